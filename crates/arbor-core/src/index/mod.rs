//! Index structures.
//!
//! - [`AdjacencyTable`] - per-vertex edge lists, the storage behind every graph
//! - [`DisjointSets`] - disjoint-set forest with path compression and union-by-size

pub mod adjacency;
pub mod disjoint_sets;

pub use adjacency::AdjacencyTable;
pub use disjoint_sets::DisjointSets;
