//! Prim's minimum spanning tree.
//!
//! Grows one tree from a start vertex, always admitting the cheapest edge that
//! leaves it. The queue holds `(cost, vertex, from)` candidates; entries for
//! vertices already in the tree are stale and skipped on pop. Only the start
//! vertex's component is spanned.

use graph_toolkit_core::{SpanningTree, Vertex, Weight, WeightedEdge, WeightedGraph};
use tracing::{debug, warn};

use crate::priority::MinQueue;

/// Minimum spanning tree of the component containing `start`.
///
/// Defaults to the first inserted vertex. An unknown `start` yields an empty
/// tree and a warning.
pub fn prim<V: Vertex, W: Weight>(graph: &WeightedGraph<V, W>, start: Option<&V>) -> SpanningTree<V, W> {
    if graph.is_empty() {
        return SpanningTree::empty();
    }
    let root = match start {
        Some(v) => match graph.index_of(v) {
            Some(idx) => idx,
            None => {
                warn!(start = ?v, "prim start vertex not in graph");
                return SpanningTree::empty();
            }
        },
        None => 0,
    };

    let labels = graph.vertices();
    let adj = graph.indexed_adjacency();
    let mut in_tree = vec![false; adj.len()];
    let mut min_cost: Vec<Option<W>> = vec![None; adj.len()];
    let mut queue: MinQueue<W, (usize, Option<usize>)> = MinQueue::new();
    let mut edges = Vec::with_capacity(adj.len().saturating_sub(1));

    min_cost[root] = Some(W::zero());
    queue.push(W::zero(), (root, None));

    while let Some((cost, (vertex, from))) = queue.pop() {
        if in_tree[vertex] {
            continue;
        }
        in_tree[vertex] = true;
        if let Some(from) = from {
            edges.push(WeightedEdge::new(labels[from].clone(), labels[vertex].clone(), cost));
        }

        for &(next, weight) in &adj[vertex] {
            if in_tree[next] {
                continue;
            }
            let cheaper = min_cost[next].map_or(true, |best| weight.compare(&best).is_lt());
            if cheaper {
                min_cost[next] = Some(weight);
                queue.push(weight, (next, Some(vertex)));
            }
        }
    }

    let tree = SpanningTree::from_edges(edges);
    debug!(
        start = ?labels[root],
        edges = tree.len(),
        total = ?tree.total_weight,
        "prim spanning tree"
    );
    tree
}
