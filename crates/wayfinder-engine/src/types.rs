use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wayfinder_core::types::{GraphError, VertexId, Weight};

use crate::path::reconstruct_path;

/// Counters collected while draining the heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Heap entries popped, stale ones included.
    pub extractions: u64,
    /// Popped entries discarded because a shorter distance was already known.
    pub stale_entries: u64,
}

/// Result of one single-source run.
///
/// Only reachable vertices appear in `distances`; `predecessors` additionally
/// omits the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPaths {
    pub source: VertexId,
    pub distances: BTreeMap<VertexId, Weight>,
    pub predecessors: BTreeMap<VertexId, VertexId>,
    #[serde(default)]
    pub stats: SearchStats,
}

impl ShortestPaths {
    pub fn distance_to(&self, target: &str) -> Option<Weight> {
        self.distances.get(target).copied()
    }

    pub fn is_reachable(&self, target: &str) -> bool {
        self.distances.contains_key(target)
    }

    /// Path from `target` back to the source, or `None` if unreachable.
    pub fn path_to(&self, target: &str) -> Option<Vec<VertexId>> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Outcome of a route query. `NoPathFound` is a valid answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Route {
    Found {
        distance: Weight,
        /// Vertices from target back to source, both inclusive.
        path: Vec<VertexId>,
    },
    NoPathFound,
}

/// A route query together with the endpoints it was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    pub source: VertexId,
    pub target: VertexId,
    pub route: Route,
}

impl RouteResult {
    pub fn distance(&self) -> Option<Weight> {
        match &self.route {
            Route::Found { distance, .. } => Some(*distance),
            Route::NoPathFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.route, Route::Found { .. })
    }

    /// Consecutive vertex pairs to highlight, walking from target to source.
    /// Empty for an unreachable target and for `source == target`.
    pub fn highlighted_edges(&self) -> Vec<(&str, &str)> {
        match &self.route {
            Route::Found { path, .. } => path
                .windows(2)
                .map(|pair| (pair[0].as_str(), pair[1].as_str()))
                .collect(),
            Route::NoPathFound => Vec::new(),
        }
    }
}

/// Errors surfaced by engine queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Query cancelled after {extractions} heap extractions")]
    Cancelled { extractions: u64 },
}
