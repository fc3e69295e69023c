//! # arbor-adapters
//!
//! Adapters layer for Arbor: algorithm plugins and input storage.
//!
//! ## Modules
//!
//! - [`plugins`] - Graph algorithms (shortest paths, spanning trees)
//! - [`storage`] - Edge-list loading

pub mod plugins;
pub mod storage;
