//! Vertex identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a vertex in a graph.
///
/// Vertices are numbered from 1. The value 0 is reserved and never names a
/// vertex of any graph, which lets storage index per-vertex arrays directly
/// with the id and leave slot 0 unused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Creates a vertex id from a raw value.
    ///
    /// No range check happens here; graphs validate ids against their own
    /// vertex count.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns the id as an array index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true if this id lies in `[1, size]`.
    #[inline]
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.0 >= 1 && (self.0 as usize) <= size
    }

    /// Iterates over all vertices of a graph with `size` vertices, in order.
    pub fn range(size: usize) -> impl DoubleEndedIterator<Item = VertexId> {
        (1..=size as u32).map(VertexId)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<VertexId> for u32 {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
