use serde_json::json;

use crate::OutputFormatter;
use wayfinder_core::types::{Adjacency, Edge, Weight};
use wayfinder_engine::{RouteResult, ShortestPaths};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_vertex(&self, vertex: &str, created: bool) -> String {
        serde_json::to_string_pretty(&json!({ "vertex": vertex, "created": created }))
            .unwrap_or_default()
    }
    fn format_edge(&self, edge: &Edge, previous: Option<Weight>) -> String {
        serde_json::to_string_pretty(&json!({ "edge": edge, "previous_weight": previous }))
            .unwrap_or_default()
    }
    fn format_route(&self, result: &RouteResult) -> String {
        let mut value = serde_json::to_value(result).unwrap_or_default();
        value["highlighted_edges"] = json!(result.highlighted_edges());
        serde_json::to_string_pretty(&value).unwrap_or_default()
    }
    fn format_distances(&self, paths: &ShortestPaths) -> String {
        serde_json::to_string_pretty(paths).unwrap_or_default()
    }
    fn format_neighbors(&self, vertex: &str, neighbors: &Adjacency) -> String {
        serde_json::to_string_pretty(&json!({
            "vertex": vertex,
            "neighbors": neighbors,
        }))
        .unwrap_or_default()
    }
    fn format_graph(&self, vertex_count: usize, edges: &[Edge]) -> String {
        serde_json::to_string_pretty(&json!({
            "vertex_count": vertex_count,
            "edge_count": edges.len(),
            "edges": edges,
        }))
        .unwrap_or_default()
    }
}
