//! Undirected graphs.
//!
//! Each logical edge `{u, v}` is stored as two directed entries, `(u, v)` and
//! `(v, u)`, with equal weight. A self-loop is stored once. Both directions
//! are inserted, updated and removed together; finding only one of them is an
//! internal inconsistency.

use arbor_common::types::{Edge, VertexId};
use arbor_common::utils::error::{Error, Result};

use super::{EdgeSet, check_edge, check_size};
use crate::index::AdjacencyTable;

/// An undirected graph over vertices `1..=n`.
#[derive(Debug, Clone)]
pub struct Graph {
    table: AdjacencyTable,
    /// Number of logical edges.
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `n` vertices and no edges.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolation` if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        check_size(n)?;
        Ok(Self {
            table: AdjacencyTable::new(n),
            edge_count: 0,
        })
    }

    /// Creates a graph with `n` vertices and the given edges.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = Edge>) -> Result<Self> {
        let mut graph = Self::new(n)?;
        for edge in edges {
            graph.insert(edge)?;
        }
        Ok(graph)
    }

    /// Inserts an undirected edge, or updates the weight of both directions
    /// if it is already present.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` for invalid endpoints and `InvariantViolation` if
    /// only one direction of the edge is stored.
    pub fn insert(&mut self, edge: Edge) -> Result<()> {
        check_edge(&edge, self.vertex_count())?;

        if edge.is_loop() {
            if self.table.upsert(edge) {
                self.edge_count += 1;
            }
            return Ok(());
        }

        let forward = self.table.get(edge.head, edge.tail).is_some();
        let backward = self.table.get(edge.tail, edge.head).is_some();
        if forward != backward {
            return Err(Self::unmirrored(&edge));
        }

        self.table.upsert(edge);
        self.table.upsert(edge.reverse());
        if !forward {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Removes the undirected edge between `edge.head` and `edge.tail`,
    /// returning the stored `head -> tail` entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the edge is absent and `InvariantViolation` if
    /// its reverse entry is missing.
    pub fn remove(&mut self, edge: Edge) -> Result<Edge> {
        check_edge(&edge, self.vertex_count())?;

        if self.table.get(edge.head, edge.tail).is_none() {
            return Err(Error::NotFound {
                head: edge.head,
                tail: edge.tail,
            });
        }
        if !edge.is_loop() && self.table.get(edge.tail, edge.head).is_none() {
            return Err(Self::unmirrored(&edge));
        }

        let removed = self
            .table
            .remove(edge.head, edge.tail)
            .ok_or_else(|| Self::unmirrored(&edge))?;
        if !edge.is_loop() {
            self.table.remove(edge.tail, edge.head);
        }
        self.edge_count -= 1;
        Ok(removed)
    }

    /// Returns true if `a` and `b` are adjacent.
    #[must_use]
    pub fn contains_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.table.get(a, b).is_some()
    }

    /// Returns the number of stored directed entries (two per non-loop edge).
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.table.entry_count()
    }

    /// Returns the degree of a vertex.
    #[must_use]
    pub fn degree(&self, v: VertexId) -> usize {
        self.table.out_degree(v)
    }

    /// Iterates over every stored entry, both directions included.
    pub fn entries(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.table.iter()
    }

    /// Iterates over each logical edge once, as the entry with `head <= tail`.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.table.iter().filter(|e| e.head <= e.tail)
    }

    fn unmirrored(edge: &Edge) -> Error {
        Error::InvariantViolation(format!(
            "undirected edge {{{}, {}}} is stored in one direction only",
            edge.head, edge.tail
        ))
    }
}

impl EdgeSet for Graph {
    fn vertex_count(&self) -> usize {
        self.table.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn edges_from(&self, v: VertexId) -> &[Edge] {
        self.table.edges_from(v)
    }
}
