//! A* search.
//!
//! Dijkstra's relaxation on `g` (known cost from the source), with the queue
//! ordered by `f = g + h(vertex, target)`. The heuristic must be admissible
//! (never overestimate the remaining cost) for the result to be optimal; that
//! is the caller's obligation and is not checked. With [`ZeroHeuristic`] the
//! search is exactly Dijkstra's.

use graph_toolkit_core::{PathOutcome, Vertex, Weight, WeightedGraph};
use tracing::{debug, trace, warn};

use super::reconstruct::finish;
use super::{endpoints, ShortestPath};
use crate::priority::MinQueue;

/// Estimate of the remaining cost from one vertex to the target
pub trait Heuristic<V, W> {
    /// Estimated cost from `from` to `to`
    fn estimate(&self, from: &V, to: &V) -> W;
}

impl<V, W, F> Heuristic<V, W> for F
where
    F: Fn(&V, &V) -> W,
{
    fn estimate(&self, from: &V, to: &V) -> W {
        self(from, to)
    }
}

/// Heuristic that always estimates zero
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<V, W: Weight> Heuristic<V, W> for ZeroHeuristic {
    fn estimate(&self, _from: &V, _to: &V) -> W {
        W::zero()
    }
}

/// A* solver parameterised by its heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {
    /// Create a solver using `heuristic`
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl AStar<ZeroHeuristic> {
    /// Solver with the zero heuristic, equivalent to Dijkstra
    pub fn uninformed() -> Self {
        Self::new(ZeroHeuristic)
    }
}

impl<V, W, H> ShortestPath<V, W> for AStar<H>
where
    V: Vertex,
    W: Weight,
    H: Heuristic<V, W>,
{
    fn name(&self) -> &'static str {
        "a-star"
    }

    fn shortest_path(&self, graph: &WeightedGraph<V, W>, source: &V, target: &V) -> PathOutcome<V, W> {
        let Some((s, t)) = endpoints(graph, source, target, "a-star") else {
            return PathOutcome::NoPath;
        };
        if s == t {
            return PathOutcome::found(vec![source.clone()], W::zero());
        }
        if graph.has_negative_weight() {
            warn!("a-star requires non-negative edge weights");
            return PathOutcome::NoPath;
        }

        let labels = graph.vertices();
        let adj = graph.indexed_adjacency();
        let mut g_cost: Vec<Option<W>> = vec![None; adj.len()];
        let mut f_cost: Vec<Option<W>> = vec![None; adj.len()];
        let mut pred: Vec<Option<usize>> = vec![None; adj.len()];
        let mut open = MinQueue::new();
        let mut expanded = 0usize;

        let h_start = self.heuristic.estimate(source, target);
        g_cost[s] = Some(W::zero());
        f_cost[s] = Some(h_start);
        open.push(h_start, s);

        while let Some((f, u)) = open.pop() {
            if f_cost[u].map_or(false, |best| f.compare(&best).is_gt()) {
                continue;
            }
            if u == t {
                break;
            }
            let Some(g) = g_cost[u] else { continue };
            expanded += 1;

            for &(v, w) in &adj[u] {
                let tentative = g.add_weight(w);
                if g_cost[v].map_or(true, |cur| tentative.compare(&cur).is_lt()) {
                    let f_next = tentative.add_weight(self.heuristic.estimate(&labels[v], target));
                    trace!(from = u, to = v, g = ?tentative, f = ?f_next, "relax");
                    g_cost[v] = Some(tentative);
                    f_cost[v] = Some(f_next);
                    pred[v] = Some(u);
                    open.push(f_next, v);
                }
            }
        }

        debug!(expanded, reached = g_cost[t].is_some(), "a-star finished");
        finish(graph, &g_cost, &pred, s, t, "a-star")
    }
}
