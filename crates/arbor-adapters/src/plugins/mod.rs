//! Plugin system for Arbor.
//!
//! ## Modules
//!
//! - [`algorithms`] - Graph algorithms (BFS, Dijkstra, Prim, Kruskal)

pub mod algorithms;
