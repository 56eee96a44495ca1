use std::collections::BTreeMap;

use tracing::debug;

use crate::config::GraphConfig;
use crate::store::GraphStore;
use crate::types::{Adjacency, Edge, GraphError, VertexId, Weight};

/// Upper bound on stored weights whatever the configuration says. Keeps every
/// shortest distance representable as a `Weight`.
pub const WEIGHT_CEILING: i64 = u32::MAX as i64;

/// Which edge weights the store accepts. Negative weights are always rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightPolicy {
    pub allow_zero: bool,
    pub max: i64,
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self::from(&GraphConfig::default())
    }
}

impl From<&GraphConfig> for WeightPolicy {
    fn from(config: &GraphConfig) -> Self {
        Self {
            allow_zero: config.allow_zero_weight,
            max: config.max_weight.min(WEIGHT_CEILING),
        }
    }
}

impl WeightPolicy {
    /// Validate a caller-supplied weight and convert it to the stored type.
    pub fn check(&self, weight: i64) -> Result<Weight, GraphError> {
        let max = self.max.min(WEIGHT_CEILING);
        let reason = if weight < 0 {
            "weights must be non-negative".to_string()
        } else if weight == 0 && !self.allow_zero {
            "zero weights are disabled".to_string()
        } else if weight > max {
            format!("exceeds maximum weight {max}")
        } else {
            return Ok(weight as Weight);
        };
        Err(GraphError::InvalidWeight { weight, reason })
    }
}

/// In-memory undirected graph stored as a symmetric adjacency map.
///
/// Every edge is written under both endpoints. `add_edge` validates before it
/// touches either side, so the symmetry invariant holds after every call.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: BTreeMap<VertexId, Adjacency>,
    policy: WeightPolicy,
    edge_count: usize,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: WeightPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Create a graph configured from a `GraphConfig`.
    pub fn with_config(config: &GraphConfig) -> Self {
        Self::with_policy(WeightPolicy::from(config))
    }

    /// Weight of the edge `a -- b`, if present.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Weight> {
        self.adjacency.get(a).and_then(|adj| adj.get(b)).copied()
    }

    /// Every undirected edge exactly once, ordered by endpoints.
    pub fn edges(&self) -> Vec<Edge> {
        let mut out = Vec::with_capacity(self.edge_count);
        for (a, adj) in &self.adjacency {
            for (b, &w) in adj {
                if a <= b {
                    out.push(Edge::new(a, b, w));
                }
            }
        }
        out
    }

    fn require(&self, v: &str) -> Result<(), GraphError> {
        if self.adjacency.contains_key(v) {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex(v.to_string()))
        }
    }
}

impl GraphStore for AdjacencyGraph {
    fn add_vertex(&mut self, id: &str) -> Result<bool, GraphError> {
        if id.is_empty() {
            return Err(GraphError::EmptyVertexId);
        }
        if self.adjacency.contains_key(id) {
            return Ok(false);
        }
        self.adjacency.insert(id.to_string(), Adjacency::new());
        debug!(vertex = id, "vertex added");
        Ok(true)
    }

    fn add_edge(&mut self, a: &str, b: &str, weight: i64) -> Result<Option<Weight>, GraphError> {
        self.require(a)?;
        self.require(b)?;
        let weight = self.policy.check(weight)?;

        let previous = self
            .adjacency
            .get_mut(a)
            .and_then(|adj| adj.insert(b.to_string(), weight));
        if a != b {
            if let Some(adj) = self.adjacency.get_mut(b) {
                adj.insert(a.to_string(), weight);
            }
        }
        if previous.is_none() {
            self.edge_count += 1;
        }
        debug!(a, b, weight, ?previous, "edge stored");
        Ok(previous)
    }

    fn neighbors(&self, v: &str) -> Result<&Adjacency, GraphError> {
        self.adjacency
            .get(v)
            .ok_or_else(|| GraphError::UnknownVertex(v.to_string()))
    }

    fn has_vertex(&self, v: &str) -> bool {
        self.adjacency.contains_key(v)
    }

    fn vertices(&self) -> Vec<&str> {
        self.adjacency.keys().map(String::as_str).collect()
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
#[path = "graph_tests.rs"]
mod tests;
