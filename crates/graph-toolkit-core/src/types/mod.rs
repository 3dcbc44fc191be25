/// Type definitions for the graph toolkit
///
/// This module contains all value types organised by category.

/// Vertex and weight abstractions
pub mod weight;
/// Edge value types
pub mod edge;
/// Path and spanning tree results
pub mod path;
/// System-wide error types
pub mod error;

// Re-export commonly used types for convenience
pub use weight::{sum_weights, Vertex, Weight};
pub use edge::{Neighbor, WeightedEdge};
pub use path::{Path, PathOutcome, SpanningTree};
pub use error::{Error, GraphError, Result};
