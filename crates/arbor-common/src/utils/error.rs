//! Error types shared by every Arbor crate.
//!
//! All variants are contract failures detected synchronously at the call that
//! violates them. None of them is transient, so nothing in Arbor retries.

use thiserror::Error;

use crate::types::VertexId;

/// Result type alias for Arbor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by graph storage, disjoint sets and algorithms.
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex id outside `[1, size]`.
    #[error("vertex {vertex} out of range [1, {size}]")]
    OutOfRange {
        /// Offending vertex.
        vertex: VertexId,
        /// Number of vertices in the structure.
        size: usize,
    },

    /// An edge targeted for removal does not exist.
    #[error("edge ({head}, {tail}) not found")]
    NotFound {
        /// Edge head.
        head: VertexId,
        /// Edge tail.
        tail: VertexId,
    },

    /// The caller broke an operation's precondition.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// Internal state is inconsistent. Indicates a bug.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Malformed edge-list input.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// I/O failure while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `Ok(())` if `vertex` lies in `[1, size]`, `OutOfRange` otherwise.
    pub fn check_vertex(vertex: VertexId, size: usize) -> Result<()> {
        if vertex.is_within(size) {
            Ok(())
        } else {
            Err(Error::OutOfRange { vertex, size })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_vertex() {
        assert!(Error::check_vertex(VertexId::new(2), 2).is_ok());
        let err = Error::check_vertex(VertexId::new(0), 2).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { size: 2, .. }));
    }

    #[test]
    fn test_messages() {
        let err = Error::NotFound {
            head: VertexId::new(1),
            tail: VertexId::new(4),
        };
        assert_eq!(err.to_string(), "edge (1, 4) not found");

        let err = Error::OutOfRange {
            vertex: VertexId::new(9),
            size: 5,
        };
        assert_eq!(err.to_string(), "vertex 9 out of range [1, 5]");
    }
}
