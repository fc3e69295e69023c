//! Graph storage.
//!
//! Both graph kinds own an [`AdjacencyTable`](crate::index::AdjacencyTable)
//! and expose it read-only through the [`EdgeSet`] trait, which is all the
//! algorithms need.
//!
//! - [`Digraph`] - directed edges
//! - [`Graph`] - undirected edges, stored as mirrored directed entries

mod digraph;
mod undirected;

pub use digraph::Digraph;
pub use undirected::Graph;

use arbor_common::types::{Edge, VertexId, Weight};
use arbor_common::utils::error::{Error, Result};

/// Read-only view of a graph's adjacency structure.
///
/// Vertices are `1..=vertex_count()`. Outgoing edges of each vertex are
/// returned in insertion order, which algorithms rely on for deterministic
/// tie-breaking.
pub trait EdgeSet {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Returns true for directed graphs.
    fn is_directed(&self) -> bool;

    /// Returns the outgoing edges of `v` in insertion order.
    ///
    /// Unknown vertices have no edges.
    fn edges_from(&self, v: VertexId) -> &[Edge];

    /// Returns the number of outgoing edges of `v`.
    fn out_degree(&self, v: VertexId) -> usize {
        self.edges_from(v).len()
    }

    /// Iterates over all vertices in ascending order.
    fn vertices(&self) -> impl DoubleEndedIterator<Item = VertexId> {
        VertexId::range(self.vertex_count())
    }

    /// Returns `OutOfRange` unless `v` is a vertex of this graph.
    fn check_vertex(&self, v: VertexId) -> Result<()> {
        Error::check_vertex(v, self.vertex_count())
    }

    /// Returns the weight of the edge from `head` to `tail`, if present.
    fn edge_weight(&self, head: VertexId, tail: VertexId) -> Option<Weight> {
        self.edges_from(head)
            .iter()
            .find(|e| e.tail == tail)
            .map(|e| e.weight)
    }
}

/// Validates the vertex count of a new graph.
fn check_size(n: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::PreconditionViolation(
            "a graph needs at least one vertex".to_string(),
        ));
    }
    if u32::try_from(n).is_err() {
        return Err(Error::PreconditionViolation(format!(
            "vertex count {n} exceeds the id space"
        )));
    }
    Ok(())
}

/// Validates both endpoints of an edge against the vertex count.
fn check_edge(edge: &Edge, size: usize) -> Result<()> {
    Error::check_vertex(edge.head, size)?;
    Error::check_vertex(edge.tail, size)
}
