//! Line-oriented session commands shared by `run` and `repl`.
//!
//! Each line is one command; blank lines and `#` comments are skipped.
//! ```text
//! vertex A B C D
//! edge A B 1
//! path A D
//! ```

use tracing::warn;
use wayfinder_core::config::WayfinderConfig;
use wayfinder_core::graph::AdjacencyGraph;
use wayfinder_core::store::GraphStore;
use wayfinder_core::types::{Edge, GraphError};
use wayfinder_engine::route::Router;
use wayfinder_engine::EngineError;
use wayfinder_output::OutputFormatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Vertex(Vec<String>),
    Edge { a: String, b: String, weight: i64 },
    Neighbors(String),
    Path { source: String, target: String },
    Distances(String),
    Graph,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum SessionError {
    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Parse one line. `Ok(None)` for blank lines and comments.
pub(crate) fn parse_line(line: &str) -> Result<Option<Command>, SessionError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut parts = line.split_whitespace();
    let keyword = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    let cmd = match (keyword, args.as_slice()) {
        ("vertex", []) => return Err(usage("vertex <id>...")),
        ("vertex", ids) => Command::Vertex(ids.iter().map(|s| s.to_string()).collect()),
        ("edge", [a, b, w]) => Command::Edge {
            a: a.to_string(),
            b: b.to_string(),
            weight: w
                .parse()
                .map_err(|_| SessionError::Parse(format!("weight is not an integer: {w}")))?,
        },
        ("edge", _) => return Err(usage("edge <a> <b> <weight>")),
        ("neighbors", [v]) => Command::Neighbors(v.to_string()),
        ("neighbors", _) => return Err(usage("neighbors <vertex>")),
        ("path", [s, t]) => Command::Path {
            source: s.to_string(),
            target: t.to_string(),
        },
        ("path", _) => return Err(usage("path <source> <target>")),
        ("distances", [s]) => Command::Distances(s.to_string()),
        ("distances", _) => return Err(usage("distances <source>")),
        ("graph", []) => Command::Graph,
        ("graph", _) => return Err(usage("graph")),
        (other, _) => return Err(SessionError::Parse(format!("unknown command: {other}"))),
    };
    Ok(Some(cmd))
}

fn usage(form: &str) -> SessionError {
    SessionError::Parse(format!("usage: {form}"))
}

/// Owns the operator's graph for the lifetime of one session.
pub(crate) struct Session {
    graph: AdjacencyGraph,
    router: Router,
    formatter: Box<dyn OutputFormatter>,
}

impl Session {
    pub(crate) fn new(config: &WayfinderConfig, formatter: Box<dyn OutputFormatter>) -> Self {
        Self {
            graph: AdjacencyGraph::with_config(&config.graph),
            router: Router::with_config(&config.engine),
            formatter,
        }
    }

    pub(crate) fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Parse and execute one line. `Ok(None)` when nothing ran.
    pub(crate) fn execute_line(&mut self, line: &str) -> Result<Option<String>, SessionError> {
        match parse_line(line)? {
            Some(cmd) => self.execute(cmd).map(Some),
            None => Ok(None),
        }
    }

    pub(crate) fn execute(&mut self, cmd: Command) -> Result<String, SessionError> {
        let f = &*self.formatter;
        match cmd {
            Command::Vertex(ids) => {
                let mut out = String::new();
                for id in ids {
                    let created = self.graph.add_vertex(&id)?;
                    out.push_str(&f.format_vertex(&id, created));
                }
                Ok(out)
            }
            Command::Edge { a, b, weight } => {
                let previous = self.graph.add_edge(&a, &b, weight)?;
                let stored = self.graph.edge_weight(&a, &b).unwrap_or_default();
                Ok(f.format_edge(&Edge::new(&a, &b, stored), previous))
            }
            Command::Neighbors(v) => {
                let neighbors = self.graph.neighbors(&v)?;
                Ok(f.format_neighbors(&v, neighbors))
            }
            Command::Path { source, target } => {
                if self.graph.vertex_count() == 0 || self.graph.edge_count() == 0 {
                    warn!("path query on a graph without vertices or edges");
                }
                let result = self.router.find_route(&self.graph, &source, &target)?;
                Ok(f.format_route(&result))
            }
            Command::Distances(source) => {
                let paths = self.router.shortest_paths(&self.graph, &source)?;
                Ok(f.format_distances(&paths))
            }
            Command::Graph => Ok(f.format_graph(self.graph.vertex_count(), &self.graph.edges())),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
