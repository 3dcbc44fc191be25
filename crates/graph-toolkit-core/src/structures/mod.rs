/// Core reusable data structures
pub mod union_find;

// Export the main types
pub use union_find::DisjointSet;
