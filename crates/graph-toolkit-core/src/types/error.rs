//! Error types and handling for the graph toolkit
//!
//! Missing vertices are the only hard failure the graph structures report.
//! Unreachable targets and negative cycles are ordinary algorithm outcomes and
//! live in [`PathOutcome`](crate::types::PathOutcome) instead.

use thiserror::Error;

/// Main result type used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the graph toolkit
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph operation errors
    #[error("Graph operation error: {0}")]
    Graph(#[from] GraphError),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML decoding errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Graph operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex not found
    #[error("Vertex not found: {vertex}")]
    VertexNotFound {
        /// Debug rendering of the missing vertex
        vertex: String,
    },
}

impl GraphError {
    /// Create a vertex-not-found error from any debuggable label
    pub fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        Self::VertexNotFound { vertex: format!("{vertex:?}") }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Check if this error reports a missing vertex
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Graph(GraphError::VertexNotFound { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_not_found_renders_label() {
        let err: Error = GraphError::vertex_not_found(&"Z").into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Graph operation error: Vertex not found: \"Z\"");
    }

    #[test]
    fn config_error_is_not_a_lookup_failure() {
        let err = Error::config("bad level");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Configuration error: bad level");
    }
}
