//! Floyd-Warshall all-pairs shortest paths.
//!
//! `dist[i][j]` is the best known distance (`None` for unreachable) and
//! `next[i][j]` the vertex that follows `i` on that path. Each outer round
//! admits one more intermediate vertex `k`. Pair queries walk `next` toward
//! the target under a cycle guard and add up the direct edge weights along
//! the walk in travel order.

use ahash::AHashMap;
use graph_toolkit_core::{PathOutcome, Vertex, Weight, WeightedGraph};
use tracing::{debug, warn};

use super::reconstruct::walk_successors;
use super::ShortestPath;

/// Floyd-Warshall solver
///
/// As a [`ShortestPath`] it rebuilds the matrices on every call; use
/// [`FloydWarshall::all_pairs`] to compute them once and query repeatedly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshall;

/// Precomputed all-pairs distance and successor matrices
#[derive(Debug, Clone)]
pub struct AllPairs<V, W> {
    labels: Vec<V>,
    index: AHashMap<V, usize>,
    /// Direct edge weights, `None` where not adjacent
    edge: Vec<Vec<Option<W>>>,
    dist: Vec<Vec<Option<W>>>,
    next: Vec<Vec<Option<usize>>>,
}

impl FloydWarshall {
    /// Compute the all-pairs matrices for `graph`
    pub fn all_pairs<V: Vertex, W: Weight>(graph: &WeightedGraph<V, W>) -> AllPairs<V, W> {
        let n = graph.len();
        let mut dist: Vec<Vec<Option<W>>> = vec![vec![None; n]; n];
        let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
        let mut edge: Vec<Vec<Option<W>>> = vec![vec![None; n]; n];

        for i in 0..n {
            dist[i][i] = Some(W::zero());
            next[i][i] = Some(i);
        }
        for (i, list) in graph.indexed_adjacency().into_iter().enumerate() {
            for (j, w) in list {
                edge[i][j] = Some(w);
                if i == j {
                    // A self loop only matters when it is negative
                    if w.is_negative() {
                        dist[i][i] = Some(w);
                    }
                    continue;
                }
                dist[i][j] = Some(w);
                next[i][j] = Some(j);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(ik) = dist[i][k] else { continue };
                for j in 0..n {
                    let Some(kj) = dist[k][j] else { continue };
                    let candidate = ik.add_weight(kj);
                    if dist[i][j].map_or(true, |ij| candidate.compare(&ij).is_lt()) {
                        dist[i][j] = Some(candidate);
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        let index = graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        debug!(vertices = n, "floyd-warshall matrices built");

        AllPairs {
            labels: graph.vertices().to_vec(),
            index,
            edge,
            dist,
            next,
        }
    }
}

impl<V: Vertex, W: Weight> AllPairs<V, W> {
    /// Shortest distance from `source` to `target`, `None` if unreachable or unknown
    pub fn distance(&self, source: &V, target: &V) -> Option<W> {
        let s = *self.index.get(source)?;
        let t = *self.index.get(target)?;
        self.dist[s][t]
    }

    /// True if some vertex can reach itself with negative total weight
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.labels.len()).any(|i| self.dist[i][i].map_or(false, |d| d.is_negative()))
    }

    /// Number of vertices covered by the matrices
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if built from an empty graph
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// True if a walk from `source` to `target` can pass through a negative cycle
    fn cycle_between(&self, s: usize, t: usize) -> bool {
        (0..self.labels.len()).any(|k| {
            self.dist[k][k].map_or(false, |d| d.is_negative())
                && self.dist[s][k].is_some()
                && self.dist[k][t].is_some()
        })
    }

    /// Sum of direct edge weights along `chain`, in travel order
    fn chain_weight(&self, chain: &[usize]) -> Option<W> {
        chain
            .windows(2)
            .try_fold(W::zero(), |acc, pair| self.edge[pair[0]][pair[1]].map(|w| acc.add_weight(w)))
    }

    /// Shortest path from `source` to `target`.
    ///
    /// `NegativeCycle` only when a negative cycle sits on some walk between
    /// the two; cycles in other components do not affect the answer.
    pub fn path(&self, source: &V, target: &V) -> PathOutcome<V, W> {
        let (Some(&s), Some(&t)) = (self.index.get(source), self.index.get(target)) else {
            warn!(algorithm = "floyd-warshall", ?source, ?target, "source or target not in graph");
            return PathOutcome::NoPath;
        };
        if self.cycle_between(s, t) {
            warn!(algorithm = "floyd-warshall", ?source, ?target, "negative cycle between source and target");
            return PathOutcome::NegativeCycle;
        }
        let Some(weight) = self.dist[s][t] else {
            return PathOutcome::NoPath;
        };
        match walk_successors(&self.next, s, t) {
            Some(chain) => {
                let weight = self.chain_weight(&chain).unwrap_or(weight);
                PathOutcome::found(chain.iter().map(|&i| self.labels[i].clone()).collect(), weight)
            }
            None => {
                warn!(?source, ?target, "successor chain loops; treating as no path");
                PathOutcome::NoPath
            }
        }
    }
}

impl<V: Vertex, W: Weight> ShortestPath<V, W> for FloydWarshall {
    fn name(&self) -> &'static str {
        "floyd-warshall"
    }

    fn shortest_path(&self, graph: &WeightedGraph<V, W>, source: &V, target: &V) -> PathOutcome<V, W> {
        Self::all_pairs(graph).path(source, target)
    }
}
