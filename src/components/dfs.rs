//! Connected components by depth-first search.
//!
//! Iterative with an explicit stack, so deep chains cannot overflow the call
//! stack. Neighbors are pushed in reverse so vertices are visited in the same
//! preorder a recursive walk over the adjacency lists would produce.

use graph_toolkit_core::{Vertex, Weight, WeightedGraph};
use tracing::debug;

/// Components in discovery order; members in DFS preorder
pub fn dfs_components<V: Vertex, W: Weight>(graph: &WeightedGraph<V, W>) -> Vec<Vec<V>> {
    let labels = graph.vertices();
    let adj = graph.indexed_adjacency();
    let mut visited = vec![false; adj.len()];
    let mut stack = Vec::new();
    let mut components = Vec::new();

    for start in 0..adj.len() {
        if visited[start] {
            continue;
        }
        stack.push(start);

        let mut component = Vec::new();
        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            component.push(labels[node].clone());
            for &(next, _) in adj[node].iter().rev() {
                if !visited[next] {
                    stack.push(next);
                }
            }
        }
        components.push(component);
    }

    debug!(components = components.len(), vertices = labels.len(), "dfs components");
    components
}
