//! Disjoint-set forest with path compression and union-by-size.
//!
//! The forest is a single array of `n + 1` signed entries, slot 0 unused.
//! Every entry must be read by its sign:
//!
//! - a non-negative entry at index `i` is the parent of `i`;
//! - a negative entry marks `i` as a root, and its magnitude is the number of
//!   elements in the tree rooted at `i`.
//!
//! Unions are permanent; there is no rollback.

use arbor_common::types::VertexId;
use arbor_common::utils::error::{Error, Result};

/// A partition of the vertices `1..=n` into disjoint sets.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    /// Parent pointers or negated tree sizes, indexed by vertex.
    entries: Vec<isize>,
    /// Number of sets currently in the partition.
    set_count: usize,
}

impl DisjointSets {
    /// Creates `n` singleton sets, one per vertex in `1..=n`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        let mut entries = vec![-1; n + 1];
        entries[0] = 0;
        Self {
            entries,
            set_count: n,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns true if the forest has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns the raw signed entries for vertices `1..=n`.
    #[must_use]
    pub fn entries(&self) -> &[isize] {
        &self.entries[1..]
    }

    /// Returns the root of the tree containing `x`.
    ///
    /// Every node on the walk from `x` to the root is re-pointed directly at
    /// the root, so later finds from any of them take one step.
    pub fn find(&mut self, x: VertexId) -> Result<VertexId> {
        Error::check_vertex(x, self.len())?;

        let mut root = x.index();
        while self.entries[root] >= 0 {
            root = self.entries[root] as usize;
        }

        let mut node = x.index();
        while node != root {
            let parent = self.entries[node] as usize;
            self.entries[node] = root as isize;
            node = parent;
        }

        Ok(VertexId::new(root as u32))
    }

    /// Merges the trees rooted at `r` and `s`, returning the surviving root.
    ///
    /// Both arguments must be distinct roots. The smaller tree is attached
    /// under the larger one; on equal sizes `s` is attached under `r`.
    pub fn union(&mut self, r: VertexId, s: VertexId) -> Result<VertexId> {
        Error::check_vertex(r, self.len())?;
        Error::check_vertex(s, self.len())?;
        if r == s {
            return Err(Error::PreconditionViolation(format!(
                "union of {r} with itself"
            )));
        }
        for root in [r, s] {
            if self.entries[root.index()] >= 0 {
                return Err(Error::PreconditionViolation(format!(
                    "union argument {root} is not a root"
                )));
            }
        }

        let (ri, si) = (r.index(), s.index());
        // Sizes are stored negated: the more negative entry is the larger tree.
        let (winner, loser) = if self.entries[si] < self.entries[ri] {
            (si, ri)
        } else {
            (ri, si)
        };
        self.entries[winner] += self.entries[loser];
        self.entries[loser] = winner as isize;
        self.set_count -= 1;

        Ok(VertexId::new(winner as u32))
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn join(&mut self, x: VertexId, y: VertexId) -> Result<bool> {
        let rx = self.find(x)?;
        let ry = self.find(y)?;
        if rx == ry {
            return Ok(false);
        }
        self.union(rx, ry)?;
        Ok(true)
    }

    /// Returns true if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: VertexId, y: VertexId) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Returns the number of elements in the set containing `x`.
    pub fn set_size(&mut self, x: VertexId) -> Result<usize> {
        let root = self.find(x)?;
        Ok(self.entries[root.index()].unsigned_abs())
    }
}
