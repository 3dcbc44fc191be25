//! Disjoint-set forest (Union-Find) over arbitrary vertex labels.
//!
//! Labels are mapped to dense slots on insertion; the forest itself is plain
//! `parent`/`rank`/`size` vectors. `find` compresses the whole visited path
//! onto the root, `union` attaches the lower-rank root under the higher one
//! and, on equal rank, keeps the first argument's root and bumps its rank.
//! Together these give amortised near-constant operations.

use ahash::AHashMap;
use tracing::warn;

use crate::types::{GraphError, Result, Vertex};

/// Union-Find structure with path compression and union by rank
#[derive(Debug, Clone)]
pub struct DisjointSet<V> {
    labels: Vec<V>,
    index: AHashMap<V, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    sets: usize,
}

impl<V: Vertex> Default for DisjointSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> DisjointSet<V> {
    /// Create an empty structure
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: AHashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
            size: Vec::new(),
            sets: 0,
        }
    }

    /// Create singleton sets for every element, in iteration order
    pub fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut set = Self::new();
        for v in elements {
            set.make_set(v);
        }
        set
    }

    /// Add `v` as its own singleton set. Returns `false` if already present.
    pub fn make_set(&mut self, v: V) -> bool {
        if self.index.contains_key(&v) {
            return false;
        }
        let slot = self.labels.len();
        self.index.insert(v.clone(), slot);
        self.labels.push(v);
        self.parent.push(slot);
        self.rank.push(0);
        self.size.push(1);
        self.sets += 1;
        true
    }

    /// Representative of the set containing `v`, or `None` if `v` is unknown
    pub fn find(&mut self, v: &V) -> Option<V> {
        let slot = *self.index.get(v)?;
        let root = self.find_slot(slot);
        Some(self.labels[root].clone())
    }

    /// Merge the sets containing `u` and `v`.
    ///
    /// Returns `Ok(false)` when both are already in the same set.
    pub fn union(&mut self, u: &V, v: &V) -> Result<bool> {
        let us = self.slot(u)?;
        let vs = self.slot(v)?;
        let ru = self.find_slot(us);
        let rv = self.find_slot(vs);
        if ru == rv {
            return Ok(false);
        }

        let (root, child) = if self.rank[ru] < self.rank[rv] { (rv, ru) } else { (ru, rv) };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        if self.rank[root] == self.rank[child] {
            self.rank[root] += 1;
        }
        self.sets -= 1;
        Ok(true)
    }

    /// True if both elements exist and share a set
    pub fn connected(&mut self, u: &V, v: &V) -> bool {
        match (self.index.get(u).copied(), self.index.get(v).copied()) {
            (Some(us), Some(vs)) => self.find_slot(us) == self.find_slot(vs),
            _ => false,
        }
    }

    /// Number of elements in the set containing `v`
    pub fn set_size(&mut self, v: &V) -> Option<usize> {
        let slot = *self.index.get(v)?;
        let root = self.find_slot(slot);
        Some(self.size[root])
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if there are no elements
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// True if `v` has been added
    pub fn contains(&self, v: &V) -> bool {
        self.index.contains_key(v)
    }

    /// Current partition.
    ///
    /// Groups are ordered by their earliest inserted member and list members
    /// in insertion order.
    pub fn components(&mut self) -> Vec<Vec<V>> {
        let mut group_of_root: AHashMap<usize, usize> = AHashMap::new();
        let mut groups: Vec<Vec<V>> = Vec::with_capacity(self.sets);

        for slot in 0..self.labels.len() {
            let root = self.find_slot(slot);
            let group = *group_of_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(self.labels[slot].clone());
        }
        groups
    }

    fn slot(&self, v: &V) -> Result<usize> {
        match self.index.get(v) {
            Some(&slot) => Ok(slot),
            None => {
                warn!(vertex = ?v, "element not in disjoint set");
                Err(GraphError::vertex_not_found(v).into())
            }
        }
    }

    fn find_slot(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: point every node on the path straight at the root
        let mut node = slot;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }
}
