//! Dijkstra's single-pair shortest path.

use graph_toolkit_core::{PathOutcome, Vertex, Weight, WeightedGraph};
use tracing::{debug, trace, warn};

use super::reconstruct::finish;
use super::{endpoints, ShortestPath};
use crate::priority::MinQueue;

/// Dijkstra's algorithm with a binary heap.
///
/// Requires non-negative weights. On a graph with any negative edge it warns
/// and returns `NoPath`; use [`BellmanFord`](super::BellmanFord) there.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl<V: Vertex, W: Weight> ShortestPath<V, W> for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn shortest_path(&self, graph: &WeightedGraph<V, W>, source: &V, target: &V) -> PathOutcome<V, W> {
        let Some((s, t)) = endpoints(graph, source, target, "dijkstra") else {
            return PathOutcome::NoPath;
        };
        if s == t {
            return PathOutcome::found(vec![source.clone()], W::zero());
        }
        if graph.has_negative_weight() {
            warn!("dijkstra requires non-negative edge weights");
            return PathOutcome::NoPath;
        }

        let adj = graph.indexed_adjacency();
        let mut dist: Vec<Option<W>> = vec![None; adj.len()];
        let mut pred: Vec<Option<usize>> = vec![None; adj.len()];
        let mut queue = MinQueue::new();

        dist[s] = Some(W::zero());
        queue.push(W::zero(), s);

        while let Some((d, u)) = queue.pop() {
            // Stale entry: a shorter distance was recorded after this push
            if dist[u].map_or(false, |best| d.compare(&best).is_gt()) {
                continue;
            }
            if u == t {
                break;
            }
            for &(v, w) in &adj[u] {
                let candidate = d.add_weight(w);
                if dist[v].map_or(true, |cur| candidate.compare(&cur).is_lt()) {
                    trace!(from = u, to = v, distance = ?candidate, "relax");
                    dist[v] = Some(candidate);
                    pred[v] = Some(u);
                    queue.push(candidate, v);
                }
            }
        }

        debug!(pending = queue.len(), reached = dist[t].is_some(), "dijkstra finished");
        finish(graph, &dist, &pred, s, t, "dijkstra")
    }
}
