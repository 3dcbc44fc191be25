//! Algorithm result types

use serde::{Deserialize, Serialize};

use super::edge::WeightedEdge;
use super::weight::{sum_weights, Vertex, Weight};

/// A path from a source to a target, both inclusive, with its total weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path<V, W> {
    /// Vertices in travel order, `vertices[0]` is the source
    pub vertices: Vec<V>,
    /// Accumulated edge weight along `vertices`
    pub weight: W,
}

impl<V: Vertex, W: Weight> Path<V, W> {
    /// Create a path from an ordered vertex list and its total weight
    pub fn new(vertices: Vec<V>, weight: W) -> Self {
        Self { vertices, weight }
    }

    /// Zero-length path consisting of a single vertex
    pub fn single(vertex: V) -> Self {
        Self { vertices: vec![vertex], weight: W::zero() }
    }

    /// First vertex
    pub fn source(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Last vertex
    pub fn target(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Number of edges travelled
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Outcome of a single-pair shortest path query
///
/// "No path" and "negative cycle" are distinct, expected results rather than
/// errors, and neither carries a weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome<V, W> {
    /// A shortest path exists
    Found(Path<V, W>),
    /// Source and target are not connected, or either is missing
    NoPath,
    /// A negative cycle is reachable, so no shortest path is defined
    NegativeCycle,
}

impl<V: Vertex, W: Weight> PathOutcome<V, W> {
    /// Shorthand for a found path
    pub fn found(vertices: Vec<V>, weight: W) -> Self {
        Self::Found(Path::new(vertices, weight))
    }

    /// True if a path was found
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// True for the no-path outcome
    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPath)
    }

    /// True for the negative-cycle outcome
    pub fn is_negative_cycle(&self) -> bool {
        matches!(self, Self::NegativeCycle)
    }

    /// Total weight, `None` unless a path was found
    pub fn weight(&self) -> Option<W> {
        match self {
            Self::Found(path) => Some(path.weight),
            _ => None,
        }
    }

    /// Borrow the found path
    pub fn path(&self) -> Option<&Path<V, W>> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Vertices of the found path
    pub fn vertices(&self) -> Option<&[V]> {
        self.path().map(|p| p.vertices.as_slice())
    }

    /// Take the found path
    pub fn into_path(self) -> Option<Path<V, W>> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Minimum spanning tree, or forest when the graph is disconnected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree<V, W> {
    /// Tree edges in the order they were admitted
    pub edges: Vec<WeightedEdge<V, W>>,
    /// Sum of all edge weights
    pub total_weight: W,
}

impl<V: Vertex, W: Weight> SpanningTree<V, W> {
    /// Build a tree from its edges, computing the total weight
    pub fn from_edges(edges: Vec<WeightedEdge<V, W>>) -> Self {
        let total_weight = sum_weights(edges.iter().map(|e| e.weight));
        Self { edges, total_weight }
    }

    /// Tree with no edges
    pub fn empty() -> Self {
        Self { edges: Vec::new(), total_weight: W::zero() }
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if the tree has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True if the tree contains an edge between `a` and `b`, in either direction
    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.edges
            .iter()
            .any(|e| (&e.from == a && &e.to == b) || (&e.from == b && &e.to == a))
    }
}
