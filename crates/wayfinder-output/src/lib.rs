//! Output formatters for wayfinder query results.
//!
//! Provides two output modes:
//! - **Human** (default): plain text for terminal users
//! - **JSON** (`--json`): Machine-readable structured output

pub mod human;
pub mod json;

use wayfinder_core::config::OutputFormat;
use wayfinder_core::types::{Adjacency, Edge, Weight};
use wayfinder_engine::{RouteResult, ShortestPaths};

pub trait OutputFormatter {
    fn format_vertex(&self, vertex: &str, created: bool) -> String;
    fn format_edge(&self, edge: &Edge, previous: Option<Weight>) -> String;
    fn format_route(&self, result: &RouteResult) -> String;
    fn format_distances(&self, paths: &ShortestPaths) -> String;
    fn format_neighbors(&self, vertex: &str, neighbors: &Adjacency) -> String;
    fn format_graph(&self, vertex_count: usize, edges: &[Edge]) -> String;
}

/// Formatter for a configured output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Human => Box::new(human::HumanFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}
