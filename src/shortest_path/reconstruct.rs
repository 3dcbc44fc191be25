//! Path reconstruction with cycle guards.
//!
//! Both walkers are bounded by the vertex count: a well-formed chain visits
//! each vertex at most once, so anything longer is a corrupted table and is
//! reported as `None` instead of looping.

use graph_toolkit_core::{PathOutcome, Vertex, Weight, WeightedGraph};
use tracing::{debug, warn};

use super::path_weight;

/// Walk `pred` back from `target` to `source`; positions in travel order
pub(crate) fn walk_predecessors(pred: &[Option<usize>], source: usize, target: usize) -> Option<Vec<usize>> {
    let mut chain = vec![target];
    let mut current = target;
    while current != source {
        if chain.len() > pred.len() {
            return None;
        }
        current = pred[current]?;
        chain.push(current);
    }
    chain.reverse();
    Some(chain)
}

/// Follow `next[current][target]` forward from `source`
pub(crate) fn walk_successors(next: &[Vec<Option<usize>>], source: usize, target: usize) -> Option<Vec<usize>> {
    let mut visited = vec![false; next.len()];
    let mut chain = vec![source];
    let mut current = source;
    visited[source] = true;
    while current != target {
        let step = next[current][target]?;
        if visited[step] {
            return None;
        }
        visited[step] = true;
        chain.push(step);
        current = step;
    }
    Some(chain)
}

/// Turn a distance table and predecessor chain into an outcome.
///
/// The reported weight is the sum of the returned path's edges in travel
/// order, so it matches [`path_weight`] exactly even for float weights.
pub(crate) fn finish<V: Vertex, W: Weight>(
    graph: &WeightedGraph<V, W>,
    dist: &[Option<W>],
    pred: &[Option<usize>],
    source: usize,
    target: usize,
    algorithm: &'static str,
) -> PathOutcome<V, W> {
    let Some(weight) = dist[target] else {
        debug!(algorithm, "target unreachable");
        return PathOutcome::NoPath;
    };
    match walk_predecessors(pred, source, target) {
        Some(chain) => {
            let vertices = to_labels(graph, &chain);
            let weight = path_weight(graph, &vertices).unwrap_or(weight);
            PathOutcome::found(vertices, weight)
        }
        None => {
            warn!(algorithm, "predecessor chain does not lead back to the source");
            PathOutcome::NoPath
        }
    }
}

pub(crate) fn to_labels<V: Vertex, W: Weight>(graph: &WeightedGraph<V, W>, chain: &[usize]) -> Vec<V> {
    let labels = graph.vertices();
    chain.iter().map(|&i| labels[i].clone()).collect()
}
