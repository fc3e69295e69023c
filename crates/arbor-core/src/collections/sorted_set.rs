//! Sorted sets with merge-based set algebra.
//!
//! Values live in one contiguous ascending sequence. Union, intersection and
//! difference are single linear merges over both operands.
//!
//! | Operator | Meaning |
//! | -------- | ------- |
//! | `a + b`, `a += b` | union |
//! | `a * b`, `a *= b` | intersection |
//! | `a - b`, `a -= b` | difference |
//! | `a < b` | `a` is a proper subset of `b` |

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// An ordered set of values with no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedSet<T> {
    /// Ascending, duplicate-free.
    values: Vec<T>,
}

impl<T: Ord> SortedSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates the set `{value}`.
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the set has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns true if `value` belongs to the set.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.values.binary_search(value).is_ok()
    }

    /// Adds `value`. Returns `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        match self.values.binary_search(&value) {
            Ok(_) => false,
            Err(pos) => {
                self.values.insert(pos, value);
                true
            }
        }
    }

    /// Removes `value`. Returns `false` if it was absent.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.values.binary_search(value) {
            Ok(pos) => {
                self.values.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Returns the elements as an ascending slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns true if every element of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut theirs = other.values.iter();
        'outer: for mine in &self.values {
            for candidate in theirs.by_ref() {
                match candidate.cmp(mine) {
                    Ordering::Less => {}
                    Ordering::Equal => continue 'outer,
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// Keeps the elements for which `keep(in_other)` holds, walking both
    /// sequences in one merge pass.
    fn retain_against(&mut self, other: &Self, keep: impl Fn(bool) -> bool) {
        let mut theirs = other.values.iter().peekable();
        self.values.retain(|mine| {
            while theirs.next_if(|t| *t < mine).is_some() {}
            keep(theirs.peek().is_some_and(|t| *t == mine))
        });
    }
}

impl<T: Ord + Clone> SortedSet<T> {
    /// Merges the elements of `other` into `self`.
    fn merge_from(&mut self, other: &Self) {
        let mut merged = Vec::with_capacity(self.len() + other.len());
        let mut mine = std::mem::take(&mut self.values).into_iter().peekable();
        let mut theirs = other.values.iter().peekable();

        loop {
            match (mine.peek(), theirs.peek()) {
                (Some(a), Some(b)) => match a.cmp(*b) {
                    Ordering::Less => merged.extend(mine.next()),
                    Ordering::Greater => merged.extend(theirs.next().cloned()),
                    Ordering::Equal => {
                        merged.extend(mine.next());
                        theirs.next();
                    }
                },
                (Some(_), None) => merged.extend(mine.by_ref()),
                (None, Some(_)) => merged.extend(theirs.by_ref().cloned()),
                (None, None) => break,
            }
        }

        self.values = merged;
    }
}

impl<T: Ord> Default for SortedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<T> for SortedSet<T> {
    fn from(value: T) -> Self {
        Self::singleton(value)
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut values: Vec<T> = iter.into_iter().collect();
        values.sort();
        values.dedup();
        Self { values }
    }
}

impl<T: Ord> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> PartialOrd for SortedSet<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subset(other), other.is_subset(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl<T: Ord + Clone> AddAssign<&SortedSet<T>> for SortedSet<T> {
    fn add_assign(&mut self, other: &SortedSet<T>) {
        self.merge_from(other);
    }
}

impl<T: Ord> MulAssign<&SortedSet<T>> for SortedSet<T> {
    fn mul_assign(&mut self, other: &SortedSet<T>) {
        self.retain_against(other, |in_other| in_other);
    }
}

impl<T: Ord> SubAssign<&SortedSet<T>> for SortedSet<T> {
    fn sub_assign(&mut self, other: &SortedSet<T>) {
        self.retain_against(other, |in_other| !in_other);
    }
}

impl<T: Ord + Clone> Add for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn add(self, other: &SortedSet<T>) -> SortedSet<T> {
        let mut result = self.clone();
        result += other;
        result
    }
}

impl<T: Ord + Clone> Mul for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn mul(self, other: &SortedSet<T>) -> SortedSet<T> {
        let mut result = self.clone();
        result *= other;
        result
    }
}

impl<T: Ord + Clone> Sub for &SortedSet<T> {
    type Output = SortedSet<T>;

    fn sub(self, other: &SortedSet<T>) -> SortedSet<T> {
        let mut result = self.clone();
        result -= other;
        result
    }
}

impl<T: Ord + fmt::Display> fmt::Display for SortedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Set is empty!");
        }
        write!(f, "{{ ")?;
        for value in &self.values {
            write!(f, "{value} ")?;
        }
        write!(f, "}}")
    }
}
