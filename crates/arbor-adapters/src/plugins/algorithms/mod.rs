//! Graph algorithms for Arbor.
//!
//! Algorithms run over the read-only [`EdgeSet`](arbor_core::EdgeSet) view of
//! a graph and return their results by value. Nothing is cached between
//! queries, so one graph can serve any number of queries.
//!
//! ## Algorithm Categories
//!
//! - [`shortest_path`] - BFS and Dijkstra single-source shortest-path trees
//! - [`mst`] - Prim's and Kruskal's minimum spanning trees
//!
//! ## Usage
//!
//! ```
//! use arbor_adapters::plugins::algorithms::{dijkstra, kruskal, prim};
//! use arbor_common::types::{Edge, VertexId};
//! use arbor_core::{Digraph, Graph};
//!
//! let edges = [
//!     Edge::from_raw(1, 2, 4),
//!     Edge::from_raw(2, 3, 1),
//!     Edge::from_raw(1, 3, 10),
//! ];
//!
//! let digraph = Digraph::from_edges(3, edges)?;
//! let tree = dijkstra(&digraph, VertexId::new(1))?;
//! assert_eq!(tree.distance(VertexId::new(3)), Some(5));
//!
//! let graph = Graph::from_edges(3, edges)?;
//! assert_eq!(prim(&graph)?.total_weight, kruskal(&graph)?.total_weight);
//! # Ok::<(), arbor_common::Error>(())
//! ```

mod config;
pub mod mst;
mod selection;
pub mod shortest_path;
mod traits;

// Configuration
pub use config::{AlgorithmConfig, Selection};

// Core traits
pub use traits::{Frontier, MinScored};

// Shortest path algorithms
pub use shortest_path::{ShortestPathEngine, ShortestPathTree, bfs, dijkstra};

// Minimum Spanning Tree algorithms
pub use mst::{MinimumSpanningTreeEngine, SpanningTree, kruskal, prim};
