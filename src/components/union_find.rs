//! Connected components by merging edge endpoints in a disjoint-set forest.

use graph_toolkit_core::{DisjointSet, Vertex, Weight, WeightedGraph};
use tracing::{debug, warn};

/// Components grouped by set representative, ordered by first inserted member
pub fn union_find_components<V: Vertex, W: Weight>(graph: &WeightedGraph<V, W>) -> Vec<Vec<V>> {
    let mut sets = DisjointSet::from_elements(graph.vertices().iter().cloned());
    for edge in graph.edges() {
        if let Err(err) = sets.union(&edge.from, &edge.to) {
            warn!(%err, "skipping edge with unknown endpoint");
        }
    }

    let components = sets.components();
    debug!(components = components.len(), vertices = graph.len(), "union-find components");
    components
}
