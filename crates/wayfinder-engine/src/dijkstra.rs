use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use tracing::{debug, trace};
use wayfinder_core::store::GraphStore;
use wayfinder_core::types::{GraphError, Weight};

use crate::cancel::CancelFlag;
use crate::types::{EngineError, SearchStats, ShortestPaths};

/// Compute minimum distances from `source` to every reachable vertex.
///
/// Edge weights must be non-negative; the store enforces this on insert.
pub fn shortest_paths<S>(graph: &S, source: &str) -> Result<ShortestPaths, GraphError>
where
    S: GraphStore + ?Sized,
{
    relax_from(graph, source, |_| Ok(()))
}

/// Like [`shortest_paths`], but polls `cancel` every `check_interval`
/// extractions. A cancelled run yields no partial result.
pub fn shortest_paths_cancellable<S>(
    graph: &S,
    source: &str,
    cancel: &CancelFlag,
    check_interval: u32,
) -> Result<ShortestPaths, EngineError>
where
    S: GraphStore + ?Sized,
{
    let interval = u64::from(check_interval.max(1));
    relax_from(graph, source, |extractions| {
        if extractions % interval == 0 && cancel.is_cancelled() {
            debug!(source, extractions, "shortest paths cancelled");
            return Err(EngineError::Cancelled { extractions });
        }
        Ok(())
    })
}

/// Runs the search, calling `checkpoint` after each extraction. The error
/// type is whatever the checkpoint can fail with.
fn relax_from<'g, S, E>(
    graph: &'g S,
    source: &'g str,
    mut checkpoint: impl FnMut(u64) -> Result<(), E>,
) -> Result<ShortestPaths, E>
where
    S: GraphStore + ?Sized,
    E: From<GraphError>,
{
    if !graph.has_vertex(source) {
        return Err(GraphError::UnknownVertex(source.to_string()).into());
    }

    let mut best: HashMap<&'g str, Weight> = HashMap::new();
    let mut predecessors: HashMap<&'g str, &'g str> = HashMap::new();
    let mut heap = BinaryHeap::new();
    let mut stats = SearchStats::default();

    best.insert(source, 0);
    heap.push(Reverse((0, source)));

    while let Some(Reverse((dist, vertex))) = heap.pop() {
        stats.extractions += 1;
        checkpoint(stats.extractions)?;

        // Stale: the vertex was re-pushed with a smaller distance after this entry.
        if best.get(vertex).is_some_and(|&known| dist > known) {
            stats.stale_entries += 1;
            trace!(vertex, dist, "stale heap entry skipped");
            continue;
        }

        for (neighbor, &weight) in graph.neighbors(vertex)? {
            let candidate = dist.saturating_add(weight);
            let improves = best
                .get(neighbor.as_str())
                .map_or(true, |&known| candidate < known);
            if improves {
                let neighbor = neighbor.as_str();
                best.insert(neighbor, candidate);
                predecessors.insert(neighbor, vertex);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    debug!(
        source,
        reachable = best.len(),
        extractions = stats.extractions,
        stale = stats.stale_entries,
        "shortest paths computed"
    );

    Ok(ShortestPaths {
        source: source.to_string(),
        distances: into_owned(best),
        predecessors: into_owned(predecessors),
        stats,
    })
}

fn into_owned<V, T>(map: HashMap<&str, V>) -> BTreeMap<String, T>
where
    V: Into<T>,
{
    map.into_iter()
        .map(|(k, v)| (k.to_string(), v.into()))
        .collect()
}

#[cfg(test)]
#[path = "dijkstra_tests.rs"]
mod tests;
