//! # Graph Toolkit Core
//!
//! Core types and structures for the weighted graph toolkit: the undirected
//! adjacency-list graph, the disjoint-set forest, the value types produced by
//! the algorithms and the error taxonomy shared across the workspace.

#![warn(missing_docs)]

/// Type definitions for all data structures
pub mod types;

/// Undirected weighted graph storage
pub mod graph;

/// Reusable data structures
pub mod structures;

/// Configuration
pub mod core;

/// System constants
pub mod constants;

// Re-export commonly used items
pub use types::{Error, GraphError, Result};
pub use types::{Neighbor, Path, PathOutcome, SpanningTree, Vertex, Weight, WeightedEdge};
pub use graph::WeightedGraph;
pub use structures::DisjointSet;
pub use core::{Config, LoggingConfig, DemoConfig, load_config, load_config_or_default};
