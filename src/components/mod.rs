//! Connected components
//!
//! Three interchangeable strategies that partition the vertex set into groups
//! of mutually reachable vertices. Components are emitted in the order their
//! first vertex was inserted into the graph; isolated vertices form singleton
//! components and an empty graph has no components.

pub mod bfs;
pub mod dfs;
pub mod union_find;

pub use bfs::bfs_components;
pub use dfs::dfs_components;
pub use union_find::union_find_components;

use graph_toolkit_core::{Vertex, Weight, WeightedGraph};

/// Component discovery strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Queue-based level-order walk
    BreadthFirst,
    /// Stack-based preorder walk
    DepthFirst,
    /// Disjoint-set merge over all edges
    UnionFind,
}

/// Partition `graph` into connected components with the chosen strategy
pub fn connected_components<V: Vertex, W: Weight>(
    graph: &WeightedGraph<V, W>,
    strategy: Strategy,
) -> Vec<Vec<V>> {
    match strategy {
        Strategy::BreadthFirst => bfs_components(graph),
        Strategy::DepthFirst => dfs_components(graph),
        Strategy::UnionFind => union_find_components(graph),
    }
}

/// Order-independent form of a partition: members sorted, groups sorted.
///
/// Two strategies agree exactly when their canonical partitions are equal.
pub fn canonical_partition<V: Vertex>(components: &[Vec<V>]) -> Vec<Vec<V>> {
    let mut groups: Vec<Vec<V>> = components
        .iter()
        .map(|c| {
            let mut c = c.clone();
            c.sort();
            c
        })
        .collect();
    groups.sort();
    groups
}
