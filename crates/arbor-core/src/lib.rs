//! # arbor-core
//!
//! Core layer for Arbor: graph storage and the auxiliary structures the
//! algorithms are built on.
//!
//! This crate depends only on `arbor-common`.
//!
//! ## Modules
//!
//! - [`graph`] - Directed and undirected graphs behind the [`EdgeSet`] trait
//! - [`index`] - Index structures (adjacency table, disjoint-set forest)
//! - [`collections`] - Ordered collections with set algebra

pub mod collections;
pub mod graph;
pub mod index;

// Re-export commonly used types
pub use collections::SortedSet;
pub use graph::{Digraph, EdgeSet, Graph};
pub use index::{AdjacencyTable, DisjointSets};
