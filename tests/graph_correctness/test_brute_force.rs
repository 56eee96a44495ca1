// Engine distances against exhaustive simple-path enumeration on small graphs.
use wayfinder_core::graph::AdjacencyGraph;
use wayfinder_core::store::GraphStore;
use wayfinder_engine::dijkstra::shortest_paths;

use super::common::generators::{random_graph, XorShift};

fn min_over_simple_paths(g: &AdjacencyGraph, source: &str, target: &str) -> Option<u64> {
    let mut best = None;
    let mut stack = vec![(source.to_string(), 0u64, vec![source.to_string()])];
    while let Some((at, acc, seen)) = stack.pop() {
        if at == target {
            best = Some(best.map_or(acc, |b: u64| b.min(acc)));
            continue;
        }
        for (n, w) in g.neighbors(&at).unwrap() {
            if seen.contains(n) {
                continue;
            }
            let mut next_seen = seen.clone();
            next_seen.push(n.clone());
            stack.push((n.clone(), acc + w, next_seen));
        }
    }
    best
}

#[test]
fn test_distances_match_enumeration() {
    let mut rng = XorShift(0xDEAD_BEEF_CAFE_F00D);
    for round in 0..60 {
        let n = 3 + rng.below(5) as usize;
        let g = random_graph(&mut rng, n, n + 3, 9);
        for s in g.vertices() {
            let paths = shortest_paths(&g, s).unwrap();
            for t in g.vertices() {
                assert_eq!(
                    paths.distance_to(t),
                    min_over_simple_paths(&g, s, t),
                    "round {round}: {s} -> {t}"
                );
            }
        }
    }
}

#[test]
fn test_reconstructed_paths_are_shortest() {
    let mut rng = XorShift(7);
    for _ in 0..30 {
        let g = random_graph(&mut rng, 7, 12, 20);
        let paths = shortest_paths(&g, "v0").unwrap();
        for t in g.vertices() {
            match paths.path_to(t) {
                Some(path) => {
                    assert_eq!(path.first().map(String::as_str), Some(t));
                    assert_eq!(path.last().map(String::as_str), Some("v0"));
                    let total: u64 = path
                        .windows(2)
                        .map(|pair| g.edge_weight(&pair[0], &pair[1]).unwrap())
                        .sum();
                    assert_eq!(Some(total), paths.distance_to(t));
                }
                None => assert!(!paths.is_reachable(t)),
            }
        }
    }
}

#[test]
fn test_predecessors_only_for_reachable_non_source() {
    let mut rng = XorShift(99);
    for _ in 0..30 {
        let g = random_graph(&mut rng, 8, 6, 5);
        let paths = shortest_paths(&g, "v3").unwrap();
        assert!(!paths.predecessors.contains_key("v3"));
        assert_eq!(paths.distance_to("v3"), Some(0));
        for v in paths.predecessors.keys() {
            assert!(paths.is_reachable(v));
        }
        assert_eq!(paths.predecessors.len() + 1, paths.distances.len());
    }
}
