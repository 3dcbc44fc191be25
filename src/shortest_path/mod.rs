//! Single-pair shortest paths
//!
//! Four solvers behind one [`ShortestPath`] trait:
//!
//! - [`Dijkstra`]: non-negative weights, goal test on pop
//! - [`BellmanFord`]: tolerates negative weights, detects negative cycles
//! - [`FloydWarshall`]: all-pairs matrices, queried per pair
//! - [`AStar`]: Dijkstra guided by a caller-supplied admissible heuristic
//!
//! Shared conventions: a missing source or target is `NoPath` (with a
//! warning), `source == target` is a one-vertex path of weight zero, and a
//! found path's edge weights always add up to its reported weight.
//!
//! The graph is undirected, so any negative edge reachable from the source is
//! itself a negative cycle (walk it back and forth).

pub mod a_star;
pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
mod reconstruct;

pub use a_star::{AStar, Heuristic, ZeroHeuristic};
pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use floyd_warshall::{AllPairs, FloydWarshall};

use graph_toolkit_core::{PathOutcome, Vertex, Weight, WeightedGraph};
use tracing::warn;

/// Common interface of the single-pair solvers
pub trait ShortestPath<V: Vertex, W: Weight> {
    /// Short algorithm name, used in logs and reports
    fn name(&self) -> &'static str;

    /// Shortest path from `source` to `target`
    fn shortest_path(&self, graph: &WeightedGraph<V, W>, source: &V, target: &V) -> PathOutcome<V, W>;
}

/// Positions of both endpoints, or `None` (logged) if either is missing
pub(crate) fn endpoints<V: Vertex, W: Weight>(
    graph: &WeightedGraph<V, W>,
    source: &V,
    target: &V,
    algorithm: &'static str,
) -> Option<(usize, usize)> {
    match (graph.index_of(source), graph.index_of(target)) {
        (Some(s), Some(t)) => Some((s, t)),
        _ => {
            warn!(algorithm, ?source, ?target, "source or target not in graph");
            None
        }
    }
}

/// Sum of edge weights along `vertices`, `None` if consecutive vertices are not adjacent
pub fn path_weight<V: Vertex, W: Weight>(graph: &WeightedGraph<V, W>, vertices: &[V]) -> Option<W> {
    vertices.windows(2).try_fold(W::zero(), |acc, pair| {
        graph.edge_weight(&pair[0], &pair[1]).map(|w| acc.add_weight(w))
    })
}

#[cfg(test)]
mod tests;
