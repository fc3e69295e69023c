//! Directed graphs.

use arbor_common::types::{Edge, VertexId};
use arbor_common::utils::error::{Error, Result};

use super::{EdgeSet, check_edge, check_size};
use crate::index::AdjacencyTable;

/// A directed graph over vertices `1..=n`.
///
/// Inserting an edge that links the same vertices as an existing one
/// overwrites its weight instead of adding a parallel edge.
#[derive(Debug, Clone)]
pub struct Digraph {
    table: AdjacencyTable,
}

impl Digraph {
    /// Creates a graph with `n` vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolation` if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        check_size(n)?;
        Ok(Self {
            table: AdjacencyTable::new(n),
        })
    }

    /// Creates a graph with `n` vertices and the given edges.
    ///
    /// # Errors
    ///
    /// Fails on the first edge with an endpoint outside `[1, n]`.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = Edge>) -> Result<Self> {
        let mut graph = Self::new(n)?;
        for edge in edges {
            graph.insert(edge)?;
        }
        Ok(graph)
    }

    /// Inserts a directed edge, or updates its weight if present.
    pub fn insert(&mut self, edge: Edge) -> Result<()> {
        check_edge(&edge, self.vertex_count())?;
        self.table.upsert(edge);
        Ok(())
    }

    /// Removes the edge linking `edge.head` to `edge.tail` and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such edge exists.
    pub fn remove(&mut self, edge: Edge) -> Result<Edge> {
        check_edge(&edge, self.vertex_count())?;
        self.table
            .remove(edge.head, edge.tail)
            .ok_or(Error::NotFound {
                head: edge.head,
                tail: edge.tail,
            })
    }

    /// Returns true if an edge from `head` to `tail` exists.
    #[must_use]
    pub fn contains_edge(&self, head: VertexId, tail: VertexId) -> bool {
        self.table.get(head, tail).is_some()
    }

    /// Iterates over all edges, by head vertex then insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.table.iter()
    }
}

impl EdgeSet for Digraph {
    fn vertex_count(&self) -> usize {
        self.table.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.table.entry_count()
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn edges_from(&self, v: VertexId) -> &[Edge] {
        self.table.edges_from(v)
    }
}
