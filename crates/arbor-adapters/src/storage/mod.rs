//! Storage adapters.
//!
//! - [`edge_list`] - plain-text edge lists, the input format of the CLI

pub mod edge_list;

pub use edge_list::{
    DEFAULT_MAX_VERTICES, EdgeList, parse_edge_list, parse_edge_list_with_limit, read_edge_list,
    read_edge_list_with_limit,
};
