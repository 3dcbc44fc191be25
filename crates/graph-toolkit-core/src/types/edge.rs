//! Edge value types
//!
//! One explicit record per relationship: [`Neighbor`] is a single adjacency
//! entry as stored on a vertex, [`WeightedEdge`] is a full edge with both
//! endpoints.

use serde::{Deserialize, Serialize};

use super::weight::{Vertex, Weight};

/// Adjacency entry: the vertex on the other end and the edge weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor<V, W> {
    /// Adjacent vertex
    pub vertex: V,
    /// Weight of the connecting edge
    pub weight: W,
}

impl<V, W> Neighbor<V, W> {
    /// Create a new adjacency entry
    pub fn new(vertex: V, weight: W) -> Self {
        Self { vertex, weight }
    }
}

/// Weighted edge between two vertices
///
/// The graph is undirected, so `from`/`to` only carry meaning where an
/// algorithm grows a tree outward (Prim records the tree-side vertex in
/// `from`). Edges listed by the graph itself are normalised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<V, W> {
    /// First endpoint
    pub from: V,
    /// Second endpoint
    pub to: V,
    /// Edge weight
    pub weight: W,
}

impl<V: Vertex, W: Weight> WeightedEdge<V, W> {
    /// Create a new edge, keeping endpoint order as given
    pub fn new(from: V, to: V, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Create an edge with endpoints sorted so the smaller label comes first
    pub fn normalized(a: V, b: V, weight: W) -> Self {
        if b < a {
            Self { from: b, to: a, weight }
        } else {
            Self { from: a, to: b, weight }
        }
    }

    /// Endpoint pair in normalised order, the undirected identity of the edge
    pub fn key(&self) -> (&V, &V) {
        if self.to < self.from {
            (&self.to, &self.from)
        } else {
            (&self.from, &self.to)
        }
    }

    /// True if `v` is one of the endpoints
    pub fn touches(&self, v: &V) -> bool {
        &self.from == v || &self.to == v
    }
}
