use crate::OutputFormatter;
use wayfinder_core::types::{Adjacency, Edge, Weight};
use wayfinder_engine::{Route, RouteResult, ShortestPaths};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_vertex(&self, vertex: &str, created: bool) -> String {
        if created {
            format!("added vertex {vertex}\n")
        } else {
            format!("vertex {vertex} already exists\n")
        }
    }

    fn format_edge(&self, edge: &Edge, previous: Option<Weight>) -> String {
        match previous {
            Some(old) if old != edge.weight => format!(
                "updated edge {} -- {}: {} -> {}\n",
                edge.a, edge.b, old, edge.weight
            ),
            Some(_) => format!("edge {edge} unchanged\n"),
            None => format!("added edge {edge}\n"),
        }
    }

    fn format_route(&self, result: &RouteResult) -> String {
        match &result.route {
            Route::Found { distance, path } => {
                // Stored target-first; read it source-first.
                let forward: Vec<&str> = path.iter().rev().map(String::as_str).collect();
                format!(
                    "Shortest distance from {} to {}: {}\n  path: {}\n",
                    result.source,
                    result.target,
                    distance,
                    forward.join(" -> "),
                )
            }
            Route::NoPathFound => format!(
                "No path found from {} to {}\n",
                result.source, result.target
            ),
        }
    }

    fn format_distances(&self, paths: &ShortestPaths) -> String {
        let mut out = format!(
            "Distances from {} ({} reachable):\n",
            paths.source,
            paths.distances.len()
        );
        for (vertex, distance) in &paths.distances {
            match paths.predecessors.get(vertex) {
                Some(prev) => out.push_str(&format!("  {vertex}: {distance} (via {prev})\n")),
                None => out.push_str(&format!("  {vertex}: {distance}\n")),
            }
        }
        out
    }

    fn format_neighbors(&self, vertex: &str, neighbors: &Adjacency) -> String {
        if neighbors.is_empty() {
            return format!("{vertex} has no neighbors\n");
        }
        let mut out = format!("Neighbors of {vertex} ({}):\n", neighbors.len());
        for (n, w) in neighbors {
            out.push_str(&format!("  {n} ({w})\n"));
        }
        out
    }

    fn format_graph(&self, vertex_count: usize, edges: &[Edge]) -> String {
        let mut out = format!("{} vertex(es), {} edge(s)\n", vertex_count, edges.len());
        for e in edges {
            out.push_str(&format!("  {e}\n"));
        }
        out
    }
}
