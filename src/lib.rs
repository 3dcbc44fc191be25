//! Graph Toolkit - Weighted Undirected Graph Algorithms
//!
//! A small library of classic algorithms over an undirected, weighted
//! adjacency-list graph: connected components (breadth-first, depth-first and
//! union-find), minimum spanning trees (Kruskal, Prim) and single-pair
//! shortest paths (Dijkstra, Bellman-Ford, Floyd-Warshall, A*).
//!
//! The graph and its value types live in `graph-toolkit-core`; everything
//! commonly needed is re-exported here.
#![warn(missing_docs)]

// Algorithm families
pub mod components;
pub mod mst;
pub mod shortest_path;

// Ambient plumbing
pub mod demo;
pub mod logging;

mod priority;

// Re-export commonly used items for convenience
pub use graph_toolkit_core::{
    load_config, load_config_or_default, Config, DemoConfig, DisjointSet, Error, GraphError,
    LoggingConfig, Neighbor, Path, PathOutcome, Result, SpanningTree, Vertex, Weight, WeightedEdge,
    WeightedGraph,
};
pub use components::{connected_components, Strategy};
pub use logging::init;
pub use mst::{kruskal, prim};
pub use shortest_path::{AStar, BellmanFord, Dijkstra, FloydWarshall, ShortestPath};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
