use crate::types::{Adjacency, GraphError, Weight};

/// Graph store contract shared by the presentation layer and the engine.
///
/// The engine only ever holds `&dyn GraphStore` (or `&impl GraphStore`) for the
/// duration of one query, so every read method takes `&self`.
pub trait GraphStore {
    /// Create a vertex. Returns `Ok(false)` if it already existed (no-op).
    fn add_vertex(&mut self, id: &str) -> Result<bool, GraphError>;

    /// Create or update the undirected edge `a -- b`.
    ///
    /// Both endpoints must exist and `weight` must pass the store's weight
    /// policy. Either both directions are written or neither is. Returns the
    /// weight previously stored for this pair, if any.
    fn add_edge(&mut self, a: &str, b: &str, weight: i64) -> Result<Option<Weight>, GraphError>;

    /// Neighbors of `v` with edge weights. Empty when `v` has no edges.
    fn neighbors(&self, v: &str) -> Result<&Adjacency, GraphError>;

    /// Whether `v` was ever added.
    fn has_vertex(&self, v: &str) -> bool;

    /// All vertex identifiers in lexicographic order.
    fn vertices(&self) -> Vec<&str>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of undirected edges (each unordered pair counted once).
    fn edge_count(&self) -> usize;
}
