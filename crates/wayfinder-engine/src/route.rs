use tracing::debug;
use wayfinder_core::config::EngineConfig;
use wayfinder_core::store::GraphStore;
use wayfinder_core::types::GraphError;

use crate::cancel::CancelFlag;
use crate::dijkstra::{shortest_paths, shortest_paths_cancellable};
use crate::types::{EngineError, Route, RouteResult, ShortestPaths};

/// Answer a source/target query against a borrowed graph.
///
/// Both endpoints are validated before any search runs. An unreachable target
/// is `Route::NoPathFound`, not an error.
pub fn find_route<S>(graph: &S, source: &str, target: &str) -> Result<RouteResult, GraphError>
where
    S: GraphStore + ?Sized,
{
    validate_endpoints(graph, source, target)?;
    let paths = shortest_paths(graph, source)?;
    Ok(route_from(&paths, target))
}

/// Build a `RouteResult` for `target` out of a finished single-source run.
pub fn route_from(paths: &ShortestPaths, target: &str) -> RouteResult {
    let route = match (paths.distance_to(target), paths.path_to(target)) {
        (Some(distance), Some(path)) => Route::Found { distance, path },
        _ => Route::NoPathFound,
    };
    RouteResult {
        source: paths.source.clone(),
        target: target.to_string(),
        route,
    }
}

fn validate_endpoints<S>(graph: &S, source: &str, target: &str) -> Result<(), GraphError>
where
    S: GraphStore + ?Sized,
{
    for v in [source, target] {
        if !graph.has_vertex(v) {
            return Err(GraphError::UnknownVertex(v.to_string()));
        }
    }
    Ok(())
}

/// Query runner carrying engine settings and a cancellation handle.
///
/// The graph is passed per call and only borrowed for that call.
#[derive(Debug, Clone)]
pub struct Router {
    check_interval: u32,
    cancel: CancelFlag,
}

impl Default for Router {
    fn default() -> Self {
        Self::with_config(&EngineConfig::default())
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router configured from an `EngineConfig`.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            check_interval: config.check_interval(),
            cancel: CancelFlag::new(),
        }
    }

    /// Handle that cancels queries run by this router.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn shortest_paths<S>(&self, graph: &S, source: &str) -> Result<ShortestPaths, EngineError>
    where
        S: GraphStore + ?Sized,
    {
        shortest_paths_cancellable(graph, source, &self.cancel, self.check_interval)
    }

    pub fn find_route<S>(
        &self,
        graph: &S,
        source: &str,
        target: &str,
    ) -> Result<RouteResult, EngineError>
    where
        S: GraphStore + ?Sized,
    {
        validate_endpoints(graph, source, target)?;
        let paths = self.shortest_paths(graph, source)?;
        let result = route_from(&paths, target);
        debug!(source, target, distance = ?result.distance(), "route query answered");
        Ok(result)
    }
}
