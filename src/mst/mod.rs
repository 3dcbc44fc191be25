//! Minimum spanning trees
//!
//! Kruskal spans every component (a forest on disconnected input); Prim grows
//! a single tree and so only covers the component of its start vertex. On
//! connected input both reach the same total weight.

pub mod kruskal;
pub mod prim;

pub use kruskal::kruskal;
pub use prim::prim;
