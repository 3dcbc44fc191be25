//! Undirected weighted graph stored as adjacency lists.
//!
//! Vertices keep their insertion order; every traversal that iterates "all
//! vertices" sees them in that order, which makes algorithm output
//! deterministic for a deterministic sequence of `add_*` calls.
//!
//! Invariant: for every adjacency entry `u -> (v, w)` a reciprocal entry
//! `v -> (u, w)` exists. All mutation goes through methods that maintain it,
//! and adjacency lists are only ever handed out as shared slices.

use ahash::AHashMap;
use std::collections::HashSet;
use tracing::{trace, warn};

use crate::constants::NEIGHBOR_LIST_CAPACITY;
use crate::types::{GraphError, Neighbor, Result, Vertex, Weight, WeightedEdge};

/// Adjacency-list graph with undirected weighted edges
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W> {
    /// Vertex labels in insertion order
    labels: Vec<V>,
    /// `adjacency[i]` holds the neighbors of `labels[i]`
    adjacency: Vec<Vec<Neighbor<V, W>>>,
    /// Label to position in `labels`
    index: AHashMap<V, usize>,
}

impl<V: Vertex, W: Weight> Default for WeightedGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, W: Weight> WeightedGraph<V, W> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            adjacency: Vec::new(),
            index: AHashMap::new(),
        }
    }

    /// Create an empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            labels: Vec::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
            index: AHashMap::with_capacity(vertices),
        }
    }

    /// Build a graph from `(u, v, weight)` triples, applied in order
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (u, v, w) in edges {
            graph.add_edge(u, v, w);
        }
        graph
    }

    /// Ensure `vertex` exists.
    ///
    /// Idempotent. Returns `true` if the vertex was newly inserted and `false`
    /// if it was already present; either way the call succeeds.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.ensure_vertex(vertex).1
    }

    /// Add an undirected edge, creating missing endpoints.
    ///
    /// If the edge already exists its weight is overwritten in both
    /// directions; the previous weight is returned.
    pub fn add_edge(&mut self, u: V, v: V, weight: W) -> Option<W> {
        let (ui, _) = self.ensure_vertex(u.clone());
        let (vi, _) = self.ensure_vertex(v.clone());

        let previous = Self::upsert(&mut self.adjacency[ui], v.clone(), weight);
        Self::upsert(&mut self.adjacency[vi], u.clone(), weight);

        trace!(?u, ?v, ?weight, replaced = previous.is_some(), "edge set");
        previous
    }

    /// Remove `vertex` and every edge touching it.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let Some(idx) = self.index.remove(vertex) else {
            warn!(?vertex, "cannot remove vertex: not in graph");
            return Err(GraphError::vertex_not_found(vertex).into());
        };

        self.labels.remove(idx);
        self.adjacency.remove(idx);
        for neighbors in &mut self.adjacency {
            neighbors.retain(|n| &n.vertex != vertex);
        }
        // Everything after the removed slot shifted down by one
        for (pos, label) in self.labels.iter().enumerate().skip(idx) {
            if let Some(slot) = self.index.get_mut(label) {
                *slot = pos;
            }
        }

        trace!(?vertex, "vertex removed");
        Ok(())
    }

    /// Remove the edge between `u` and `v`.
    ///
    /// Returns whether an edge was actually removed. Fails if either endpoint
    /// is not in the graph.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> Result<bool> {
        let ui = self.require(u)?;
        let vi = self.require(v)?;

        let before = self.adjacency[ui].len() + self.adjacency[vi].len();
        self.adjacency[ui].retain(|n| &n.vertex != v);
        self.adjacency[vi].retain(|n| &n.vertex != u);
        let removed = self.adjacency[ui].len() + self.adjacency[vi].len() < before;

        if !removed {
            warn!(?u, ?v, "no edge to remove");
        }
        Ok(removed)
    }

    /// Neighbors of `vertex` with the connecting edge weights
    pub fn neighbors(&self, vertex: &V) -> Result<&[Neighbor<V, W>]> {
        let idx = self.require(vertex)?;
        Ok(&self.adjacency[idx])
    }

    /// Weight of the edge between `u` and `v`, if there is one
    pub fn edge_weight(&self, u: &V, v: &V) -> Option<W> {
        let idx = *self.index.get(u)?;
        self.adjacency[idx]
            .iter()
            .find(|n| &n.vertex == v)
            .map(|n| n.weight)
    }

    /// True if `u` and `v` are adjacent
    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// True if `vertex` is in the graph
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.labels
    }

    /// All edges, each undirected edge listed once.
    ///
    /// Endpoints are normalised (smaller label first). Order follows vertex
    /// insertion order and then each vertex's adjacency order.
    pub fn edges(&self) -> Vec<WeightedEdge<V, W>> {
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut edges = Vec::new();

        for (ui, neighbors) in self.adjacency.iter().enumerate() {
            for n in neighbors {
                let vi = self.index[&n.vertex];
                let key = if ui <= vi { (ui, vi) } else { (vi, ui) };
                if seen.insert(key) {
                    edges.push(WeightedEdge::normalized(
                        self.labels[ui].clone(),
                        n.vertex.clone(),
                        n.weight,
                    ));
                }
            }
        }
        edges
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        let mut self_loops = 0;
        let mut entries = 0;
        for (ui, neighbors) in self.adjacency.iter().enumerate() {
            entries += neighbors.len();
            self_loops += neighbors.iter().filter(|n| n.vertex == self.labels[ui]).count();
        }
        (entries - self_loops) / 2 + self_loops
    }

    /// True if any edge weight is below zero
    pub fn has_negative_weight(&self) -> bool {
        self.adjacency
            .iter()
            .flatten()
            .any(|n| n.weight.is_negative())
    }

    /// Remove all vertices and edges
    pub fn clear(&mut self) {
        self.labels.clear();
        self.adjacency.clear();
        self.index.clear();
    }

    /// True if the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Position of `vertex` in insertion order
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Label at position `idx`
    pub fn label(&self, idx: usize) -> Option<&V> {
        self.labels.get(idx)
    }

    /// Adjacency lists rewritten in terms of vertex positions.
    ///
    /// `result[i]` lists `(j, weight)` for every neighbor `labels[j]` of
    /// `labels[i]`, in adjacency order. Algorithms work on this snapshot and
    /// map positions back to labels with [`label`](Self::label).
    pub fn indexed_adjacency(&self) -> Vec<Vec<(usize, W)>> {
        self.adjacency
            .iter()
            .map(|neighbors| {
                neighbors
                    .iter()
                    .map(|n| (self.index[&n.vertex], n.weight))
                    .collect()
            })
            .collect()
    }

    fn require(&self, vertex: &V) -> Result<usize> {
        match self.index.get(vertex) {
            Some(&idx) => Ok(idx),
            None => {
                warn!(?vertex, "vertex not in graph");
                Err(GraphError::vertex_not_found(vertex).into())
            }
        }
    }

    fn ensure_vertex(&mut self, vertex: V) -> (usize, bool) {
        if let Some(&idx) = self.index.get(&vertex) {
            return (idx, false);
        }
        let idx = self.labels.len();
        self.index.insert(vertex.clone(), idx);
        self.labels.push(vertex);
        self.adjacency.push(Vec::with_capacity(NEIGHBOR_LIST_CAPACITY));
        (idx, true)
    }

    fn upsert(neighbors: &mut Vec<Neighbor<V, W>>, vertex: V, weight: W) -> Option<W> {
        match neighbors.iter_mut().find(|n| n.vertex == vertex) {
            Some(existing) => Some(std::mem::replace(&mut existing.weight, weight)),
            None => {
                neighbors.push(Neighbor::new(vertex, weight));
                None
            }
        }
    }
}
