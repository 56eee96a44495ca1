/// Contract tests for the GraphStore trait via AdjacencyGraph.
///
/// Every test goes through `&mut dyn GraphStore` / `&dyn GraphStore` so the
/// contract is checked, not the concrete type's extra methods.
use wayfinder_core::graph::AdjacencyGraph;
use wayfinder_core::store::GraphStore;
use wayfinder_core::types::GraphError;

fn store() -> Box<dyn GraphStore> {
    let mut g: Box<dyn GraphStore> = Box::new(AdjacencyGraph::new());
    for v in ["A", "B", "C"] {
        g.add_vertex(v).unwrap();
    }
    g
}

// ---------------------------------------------------------------------------
// add_vertex / has_vertex
// ---------------------------------------------------------------------------

#[test]
fn contract_add_vertex_idempotent() {
    let mut s = store();
    assert!(!s.add_vertex("A").unwrap(), "re-adding must be a no-op");
    assert!(s.add_vertex("D").unwrap());
    assert_eq!(s.vertex_count(), 4);
    assert_eq!(s.vertices(), vec!["A", "B", "C", "D"]);
}

#[test]
fn contract_has_vertex_is_pure() {
    let s = store();
    assert!(s.has_vertex("A"));
    assert!(!s.has_vertex("Z"));
    assert!(!s.has_vertex("Z"));
    assert_eq!(s.vertex_count(), 3);
}

#[test]
fn contract_empty_vertex_id_rejected() {
    let mut s = store();
    assert_eq!(s.add_vertex(""), Err(GraphError::EmptyVertexId));
    assert_eq!(s.vertex_count(), 3);
}

// ---------------------------------------------------------------------------
// add_edge
// ---------------------------------------------------------------------------

#[test]
fn contract_add_edge_symmetric() {
    let mut s = store();
    s.add_edge("A", "B", 6).unwrap();
    assert_eq!(s.neighbors("A").unwrap().get("B"), Some(&6));
    assert_eq!(s.neighbors("B").unwrap().get("A"), Some(&6));
}

#[test]
fn contract_add_edge_reinsertion_overwrites() {
    let mut s = store();
    assert_eq!(s.add_edge("A", "B", 6).unwrap(), None);
    assert_eq!(s.add_edge("A", "B", 2).unwrap(), Some(6));
    assert_eq!(s.edge_count(), 1);
    assert_eq!(s.neighbors("A").unwrap().len(), 1);
    assert_eq!(s.neighbors("B").unwrap().get("A"), Some(&2));
}

#[test]
fn contract_add_edge_unknown_endpoint() {
    let mut s = store();
    s.add_edge("A", "B", 1).unwrap();
    let before: Vec<_> = s
        .vertices()
        .iter()
        .map(|v| s.neighbors(v).unwrap().clone())
        .collect();

    assert_eq!(
        s.add_edge("A", "X", 1),
        Err(GraphError::UnknownVertex("X".into()))
    );
    assert_eq!(
        s.add_edge("X", "A", 1),
        Err(GraphError::UnknownVertex("X".into()))
    );

    let after: Vec<_> = s
        .vertices()
        .iter()
        .map(|v| s.neighbors(v).unwrap().clone())
        .collect();
    assert_eq!(before, after, "failed add_edge must not modify the graph");
    assert!(!s.has_vertex("X"), "add_edge must not create vertices");
}

#[test]
fn contract_add_edge_negative_weight() {
    let mut s = store();
    let err = s.add_edge("A", "C", -5).unwrap_err();
    assert!(matches!(err, GraphError::InvalidWeight { weight: -5, .. }));
    assert!(s.neighbors("A").unwrap().is_empty());
    assert!(s.neighbors("C").unwrap().is_empty());
    assert_eq!(s.edge_count(), 0);
}

#[test]
fn contract_add_edge_zero_weight_valid() {
    let mut s = store();
    s.add_edge("A", "C", 0).unwrap();
    assert_eq!(s.neighbors("C").unwrap().get("A"), Some(&0));
}

// ---------------------------------------------------------------------------
// neighbors
// ---------------------------------------------------------------------------

#[test]
fn contract_neighbors_empty_for_isolated() {
    let s = store();
    assert!(s.neighbors("C").unwrap().is_empty());
}

#[test]
fn contract_neighbors_unknown_vertex() {
    let s = store();
    assert_eq!(
        s.neighbors("nope").unwrap_err(),
        GraphError::UnknownVertex("nope".into())
    );
}
