//! # Arbor
//!
//! Shortest-path trees, minimum spanning trees and disjoint sets over compact,
//! 1-indexed adjacency storage.
//!
//! Build a [`Digraph`] or an undirected [`Graph`], then hand it to an engine:
//!
//! | Question | Function | Engine method |
//! | -------- | -------- | ------------- |
//! | Fewest hops from a source | [`bfs`] | [`ShortestPathEngine::unweighted`] |
//! | Lightest paths from a source | [`dijkstra`] | [`ShortestPathEngine::weighted`] |
//! | Minimum spanning tree | [`prim`], [`kruskal`] | [`MinimumSpanningTreeEngine`] |
//!
//! ## Quick Start
//!
//! ```rust
//! use arbor::{Digraph, Edge, VertexId, dijkstra};
//!
//! let graph = Digraph::from_edges(
//!     3,
//!     [Edge::from_raw(1, 2, 4), Edge::from_raw(2, 3, 1), Edge::from_raw(1, 3, 10)],
//! )?;
//!
//! let tree = dijkstra(&graph, VertexId::new(1))?;
//! assert_eq!(tree.distance(VertexId::new(3)), Some(5));
//! assert_eq!(tree.predecessor(VertexId::new(3)), Some(VertexId::new(2)));
//! # Ok::<(), arbor::Error>(())
//! ```
//!
//! Vertices are numbered from 1; id 0 never names a vertex.

// Re-export core types - you'll need these for building graphs
pub use arbor_common::types::{Edge, VertexId, Weight};
pub use arbor_common::utils::error::{Error, Result};

// Storage
pub use arbor_core::{AdjacencyTable, Digraph, DisjointSets, EdgeSet, Graph, SortedSet};

// Algorithms
pub use arbor_adapters::plugins::algorithms::{
    AlgorithmConfig, MinimumSpanningTreeEngine, Selection, ShortestPathEngine, ShortestPathTree,
    SpanningTree, bfs, dijkstra, kruskal, prim,
};

// Input
pub use arbor_adapters::storage::{
    DEFAULT_MAX_VERTICES, EdgeList, parse_edge_list, parse_edge_list_with_limit, read_edge_list,
    read_edge_list_with_limit,
};
