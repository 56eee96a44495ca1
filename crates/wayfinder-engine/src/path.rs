use std::collections::BTreeMap;

use wayfinder_core::types::VertexId;

/// Walk predecessor links from `target` back to `source`.
///
/// Returns the vertices in target-to-source order, `[source]` when
/// `target == source`, and `None` when `target` was not reached. A walk that
/// ends anywhere other than `source`, or revisits a vertex, is also `None`:
/// maps produced by the engine never do this.
pub fn reconstruct_path(
    predecessors: &BTreeMap<VertexId, VertexId>,
    source: &str,
    target: &str,
) -> Option<Vec<VertexId>> {
    if target == source {
        return Some(vec![source.to_string()]);
    }
    if !predecessors.contains_key(target) {
        return None;
    }

    let mut path = vec![target.to_string()];
    let mut current = target;
    while let Some(prev) = predecessors.get(current) {
        // Each vertex has at most one predecessor, so a longer walk is a cycle.
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(prev.clone());
        current = prev.as_str();
    }

    (current == source).then_some(path)
}
