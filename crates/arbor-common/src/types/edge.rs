//! Weighted edge records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::VertexId;

/// Edge weight. Shortest-path queries assume weights are non-negative.
pub type Weight = i64;

/// A weighted edge from `head` to `tail`.
///
/// Two edges are the same edge when they link the same vertices in the same
/// order, regardless of weight. See [`Edge::links_same_nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex.
    pub head: VertexId,
    /// Destination vertex.
    pub tail: VertexId,
    /// Edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub const fn new(head: VertexId, tail: VertexId, weight: Weight) -> Self {
        Self { head, tail, weight }
    }

    /// Creates an edge from raw vertex ids.
    #[must_use]
    pub const fn from_raw(head: u32, tail: u32, weight: Weight) -> Self {
        Self::new(VertexId::new(head), VertexId::new(tail), weight)
    }

    /// Returns the same edge pointing the other way.
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::new(self.tail, self.head, self.weight)
    }

    /// Returns true if both edges have the same head and the same tail.
    #[must_use]
    pub fn links_same_nodes(&self, other: &Edge) -> bool {
        self.head == other.head && self.tail == other.tail
    }

    /// Returns true if head and tail coincide.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.head == self.tail
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.head, self.tail, self.weight)
    }
}
