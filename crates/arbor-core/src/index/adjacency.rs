//! Dense adjacency lists indexed by vertex id.
//!
//! This is the edge storage behind both graph kinds:
//! - O(1) lookup of a vertex's list (vertex ids index the table directly)
//! - Insertion order is preserved within each list
//! - Short lists stay inline, no heap allocation per vertex
//!
//! Slot 0 of the table exists but is never populated, since vertex 0 is not
//! a valid vertex.

use arbor_common::types::{Edge, VertexId};
use smallvec::SmallVec;

/// Number of edges kept inline per vertex before spilling to the heap.
const INLINE_EDGES: usize = 4;

/// Outgoing edges of a single vertex, in insertion order.
type AdjacencyList = SmallVec<[Edge; INLINE_EDGES]>;

/// Per-vertex edge lists for a graph with a fixed number of vertices.
///
/// The table performs no range validation of its own: lookups of unknown
/// vertices see an empty list, and writes to them are ignored. Graph types
/// validate ids before they reach the table.
#[derive(Debug, Clone)]
pub struct AdjacencyTable {
    /// Adjacency lists indexed by head vertex. Length is `size + 1`.
    lists: Vec<AdjacencyList>,
    /// Number of stored directed entries.
    entry_count: usize,
}

impl AdjacencyTable {
    /// Creates an empty table for vertices `1..=size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            lists: vec![AdjacencyList::new(); size + 1],
            entry_count: 0,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.lists.len() - 1
    }

    /// Returns the number of stored directed entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Inserts `edge`, or overwrites the weight of the entry linking the same
    /// vertices.
    ///
    /// Returns `true` if a new entry was appended.
    pub fn upsert(&mut self, edge: Edge) -> bool {
        let Some(list) = self.lists.get_mut(edge.head.index()) else {
            return false;
        };

        if let Some(existing) = list.iter_mut().find(|e| e.links_same_nodes(&edge)) {
            existing.weight = edge.weight;
            false
        } else {
            list.push(edge);
            self.entry_count += 1;
            true
        }
    }

    /// Removes the entry from `head` to `tail`, returning it.
    ///
    /// The relative order of the remaining entries is kept.
    pub fn remove(&mut self, head: VertexId, tail: VertexId) -> Option<Edge> {
        let list = self.lists.get_mut(head.index())?;
        let pos = list.iter().position(|e| e.tail == tail)?;
        self.entry_count -= 1;
        Some(list.remove(pos))
    }

    /// Returns the entry from `head` to `tail`, if present.
    #[must_use]
    pub fn get(&self, head: VertexId, tail: VertexId) -> Option<&Edge> {
        self.edges_from(head).iter().find(|e| e.tail == tail)
    }

    /// Returns the outgoing entries of `head` in insertion order.
    #[must_use]
    pub fn edges_from(&self, head: VertexId) -> &[Edge] {
        match self.lists.get(head.index()) {
            Some(list) => list.as_slice(),
            None => &[],
        }
    }

    /// Returns the out-degree of a vertex.
    #[must_use]
    pub fn out_degree(&self, head: VertexId) -> usize {
        self.edges_from(head).len()
    }

    /// Iterates over all entries, by head vertex then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.lists.iter().flat_map(|list| list.iter())
    }
}
