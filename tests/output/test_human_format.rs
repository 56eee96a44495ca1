// Human-readable rendering of engine results.
use wayfinder_core::config::OutputFormat;
use wayfinder_core::store::GraphStore;
use wayfinder_engine::route::find_route;
use wayfinder_output::human::HumanFormatter;
use wayfinder_output::{formatter_for, OutputFormatter};

use super::common::scenario_graph;

#[test]
fn test_route_reads_source_to_target() {
    let g = scenario_graph();
    let out = HumanFormatter.format_route(&find_route(&g, "D", "A").unwrap());
    assert_eq!(out, "Shortest distance from D to A: 4\n  path: D -> C -> B -> A\n");
}

#[test]
fn test_no_path_message() {
    let mut g = scenario_graph();
    g.add_vertex("E").unwrap();
    let out = HumanFormatter.format_route(&find_route(&g, "E", "A").unwrap());
    assert_eq!(out, "No path found from E to A\n");
}

#[test]
fn test_isolated_neighbors_message() {
    let mut g = scenario_graph();
    g.add_vertex("E").unwrap();
    let out = HumanFormatter.format_neighbors("E", g.neighbors("E").unwrap());
    assert_eq!(out, "E has no neighbors\n");
}

#[test]
fn test_formatter_for_selects_mode() {
    let g = scenario_graph();
    let result = find_route(&g, "A", "B").unwrap();
    let human = formatter_for(OutputFormat::Human).format_route(&result);
    assert!(human.starts_with("Shortest distance"));
    let json = formatter_for(OutputFormat::Json).format_route(&result);
    assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
}
