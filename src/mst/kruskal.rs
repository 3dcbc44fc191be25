//! Kruskal's minimum spanning tree.
//!
//! Edges are scanned in ascending weight; an edge is admitted when its
//! endpoints are still in different sets of a [`DisjointSet`]. Equal weights
//! are broken by the normalised endpoint labels (smaller `from`, then smaller
//! `to`), so the chosen edge set is a function of the graph alone and never of
//! insertion or hashing order.

use std::cmp::Ordering;

use graph_toolkit_core::{DisjointSet, SpanningTree, Vertex, Weight, WeightedEdge, WeightedGraph};
use tracing::{debug, trace, warn};

/// Minimum spanning forest of `graph`
pub fn kruskal<V: Vertex, W: Weight>(graph: &WeightedGraph<V, W>) -> SpanningTree<V, W> {
    let mut edges = graph.edges();
    edges.sort_by(by_weight_then_endpoints);

    let mut sets = DisjointSet::from_elements(graph.vertices().iter().cloned());
    let wanted = graph.len().saturating_sub(1);
    let mut tree = Vec::with_capacity(wanted);

    for edge in edges {
        if tree.len() == wanted {
            break;
        }
        match sets.union(&edge.from, &edge.to) {
            Ok(true) => tree.push(edge),
            Ok(false) => trace!(from = ?edge.from, to = ?edge.to, "edge closes a cycle"),
            Err(err) => warn!(%err, "skipping edge with unknown endpoint"),
        }
    }

    let tree = SpanningTree::from_edges(tree);
    debug!(
        edges = tree.len(),
        components = sets.set_count(),
        total = ?tree.total_weight,
        "kruskal spanning forest"
    );
    tree
}

fn by_weight_then_endpoints<V: Vertex, W: Weight>(
    a: &WeightedEdge<V, W>,
    b: &WeightedEdge<V, W>,
) -> Ordering {
    a.weight
        .compare(&b.weight)
        .then_with(|| a.from.cmp(&b.from))
        .then_with(|| a.to.cmp(&b.to))
}
