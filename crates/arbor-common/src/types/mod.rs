//! Core type definitions for Arbor.
//!
//! - Identifier types ([`VertexId`])
//! - Edge records ([`Edge`], [`Weight`])

mod edge;
mod id;

pub use edge::{Edge, Weight};
pub use id::VertexId;
