//! # arbor-common
//!
//! Foundation layer for Arbor: identifier types, edges and errors.
//!
//! This crate provides the building blocks used by all other Arbor crates.
//! It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, Edge, Weight)
//! - [`utils`] - Utility functions and helpers (errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{Edge, VertexId, Weight};
pub use utils::error::{Error, Result};
