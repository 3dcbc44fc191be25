//! Bellman-Ford single-pair shortest path with negative cycle detection.
//!
//! Every undirected edge is relaxed in both directions, `|V| - 1` passes at
//! most, stopping early once a pass changes nothing. One extra pass then
//! checks whether anything can still be relaxed, or whether any negative edge
//! was reached; either way a negative cycle is reachable from the source and
//! the query has no defined answer.

use graph_toolkit_core::{PathOutcome, Vertex, Weight, WeightedGraph};
use tracing::{debug, warn};

use super::reconstruct::finish;
use super::{endpoints, ShortestPath};

/// Bellman-Ford algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFord;

impl<V: Vertex, W: Weight> ShortestPath<V, W> for BellmanFord {
    fn name(&self) -> &'static str {
        "bellman-ford"
    }

    fn shortest_path(&self, graph: &WeightedGraph<V, W>, source: &V, target: &V) -> PathOutcome<V, W> {
        let Some((s, t)) = endpoints(graph, source, target, "bellman-ford") else {
            return PathOutcome::NoPath;
        };

        // Adjacency is symmetric, so flattening it yields both directions
        let arcs: Vec<(usize, usize, W)> = graph
            .indexed_adjacency()
            .into_iter()
            .enumerate()
            .flat_map(|(u, list)| list.into_iter().map(move |(v, w)| (u, v, w)))
            .collect();

        let n = graph.len();
        let mut dist: Vec<Option<W>> = vec![None; n];
        let mut pred: Vec<Option<usize>> = vec![None; n];
        dist[s] = Some(W::zero());

        let mut passes = 0;
        for _ in 1..n {
            passes += 1;
            if !relax_all(&arcs, &mut dist, &mut pred) {
                break;
            }
        }

        // Saturated integer distances stop relaxing, so a reached negative arc
        // (itself a cycle when walked back and forth) is checked directly
        let negative_arc = arcs
            .iter()
            .any(|&(u, _, w)| dist[u].is_some() && w.is_negative());
        if negative_arc || relax_all(&arcs, &mut dist, &mut pred) {
            warn!(?source, "negative cycle reachable from source");
            return PathOutcome::NegativeCycle;
        }

        debug!(passes, arcs = arcs.len(), reached = dist[t].is_some(), "bellman-ford finished");
        if s == t {
            return PathOutcome::found(vec![source.clone()], W::zero());
        }
        finish(graph, &dist, &pred, s, t, "bellman-ford")
    }
}

/// One relaxation pass over every arc; true if any distance improved
fn relax_all<W: Weight>(arcs: &[(usize, usize, W)], dist: &mut [Option<W>], pred: &mut [Option<usize>]) -> bool {
    let mut changed = false;
    for &(u, v, w) in arcs {
        let Some(du) = dist[u] else { continue };
        let candidate = du.add_weight(w);
        if dist[v].map_or(true, |dv| candidate.compare(&dv).is_lt()) {
            dist[v] = Some(candidate);
            pred[v] = Some(u);
            changed = true;
        }
    }
    changed
}
