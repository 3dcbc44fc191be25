//! Graph data structures
//!
//! The undirected weighted graph every algorithm in the toolkit runs on.

mod weighted_graph;

pub use weighted_graph::WeightedGraph;

#[cfg(test)]
mod tests;
