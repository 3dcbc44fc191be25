//! Connected components by breadth-first search.

use std::collections::VecDeque;

use graph_toolkit_core::{Vertex, Weight, WeightedGraph};
use tracing::debug;

/// Components in discovery order; members in BFS level order
pub fn bfs_components<V: Vertex, W: Weight>(graph: &WeightedGraph<V, W>) -> Vec<Vec<V>> {
    let labels = graph.vertices();
    let adj = graph.indexed_adjacency();
    let mut visited = vec![false; adj.len()];
    let mut queue = VecDeque::new();
    let mut components = Vec::new();

    for start in 0..adj.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(start);

        let mut component = Vec::new();
        while let Some(node) = queue.pop_front() {
            component.push(labels[node].clone());
            for &(next, _) in &adj[node] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        components.push(component);
    }

    debug!(components = components.len(), vertices = labels.len(), "bfs components");
    components
}
