//! Core traits for selection-loop algorithms.

use std::cmp::Ordering;

use arbor_common::types::{VertexId, Weight};

/// A heap entry ordered so that `BinaryHeap` pops the smallest score first,
/// and the smallest item among equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: Ord, T: Ord> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0).then_with(|| other.1.cmp(&self.1))
    }
}

impl<K: Ord, T: Ord> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Picks the next vertex to finalize in a Dijkstra/Prim style loop.
///
/// `keys[v]` is the best key recorded for `v` (`None` = not reached yet) and
/// `done[v]` marks finalized vertices. Both slices have one slot per vertex
/// plus the unused slot 0.
pub trait Frontier {
    /// Notifies the frontier that `keys[v]` just improved to `key`.
    fn decreased(&mut self, v: VertexId, key: Weight);

    /// Returns the unfinalized reached vertex with the smallest key, the
    /// smallest id among ties, or `None` when no candidate remains.
    fn next_min(&mut self, keys: &[Option<Weight>], done: &[bool]) -> Option<VertexId>;
}
