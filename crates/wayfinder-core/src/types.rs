use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque vertex identifier. Rendering state keyed by the same id lives
/// outside this crate.
pub type VertexId = String;

/// Stored edge weight and cumulative path distance.
pub type Weight = u64;

/// Neighbor -> weight mapping for a single vertex.
pub type Adjacency = BTreeMap<VertexId, Weight>;

/// An undirected edge, endpoints ordered so that `a <= b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(x: &str, y: &str, weight: Weight) -> Self {
        let (a, b) = if x <= y { (x, y) } else { (y, x) };
        Self {
            a: a.to_string(),
            b: b.to_string(),
            weight,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {} ({})", self.a, self.b, self.weight)
    }
}

/// Errors that can occur during graph operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(VertexId),

    #[error("Invalid weight {weight}: {reason}")]
    InvalidWeight { weight: i64, reason: String },

    #[error("Vertex identifier must not be empty")]
    EmptyVertexId,

    #[error("Graph lock poisoned by a panicked writer")]
    LockPoisoned,
}
