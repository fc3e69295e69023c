//! Ordered collections.
//!
//! - [`SortedSet`] - ascending, duplicate-free sequence with set algebra operators

mod sorted_set;

pub use sorted_set::SortedSet;
