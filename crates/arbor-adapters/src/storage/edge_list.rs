//! Plain-text edge lists.
//!
//! ```text
//! # comment lines and blank lines are skipped
//! 4          <- vertex count
//! 1 2 7      <- head tail weight
//! 2 3        <- weight defaults to 1
//! ```
//!
//! Vertex ranges are checked when the list is turned into a graph, not while
//! parsing, so one list can feed several graph kinds. The vertex count itself
//! is capped at parse time, since building a graph allocates per vertex.

use std::path::Path;
use std::str::FromStr;

use arbor_common::types::{Edge, VertexId, Weight};
use arbor_common::utils::error::{Error, Result};
use arbor_core::{Digraph, Graph};

/// Weight of an edge line that omits it.
const DEFAULT_WEIGHT: Weight = 1;

/// Largest vertex count [`parse_edge_list`] and [`read_edge_list`] accept.
pub const DEFAULT_MAX_VERTICES: usize = 1 << 22;

/// A parsed edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges in file order.
    pub edges: Vec<Edge>,
}

impl EdgeList {
    /// Returns true if any edge has a negative weight.
    #[must_use]
    pub fn has_negative_weights(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0)
    }

    /// Builds a directed graph.
    pub fn to_digraph(&self) -> Result<Digraph> {
        Digraph::from_edges(self.vertex_count, self.edges.iter().copied())
    }

    /// Builds an undirected graph.
    pub fn to_graph(&self) -> Result<Graph> {
        Graph::from_edges(self.vertex_count, self.edges.iter().copied())
    }
}

impl FromStr for EdgeList {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        parse_edge_list(input)
    }
}

/// Parses an edge list from text, accepting at most
/// [`DEFAULT_MAX_VERTICES`] vertices.
///
/// # Errors
///
/// Returns `Parse` with the 1-based line number of the first malformed line,
/// or when the vertex count is missing or above the cap.
pub fn parse_edge_list(input: &str) -> Result<EdgeList> {
    parse_edge_list_with_limit(input, DEFAULT_MAX_VERTICES)
}

/// Parses an edge list from text, accepting at most `max_vertices` vertices.
pub fn parse_edge_list_with_limit(input: &str, max_vertices: usize) -> Result<EdgeList> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (line_no, header) = lines.next().ok_or_else(|| Error::Parse {
        line: input.lines().count().max(1),
        message: "missing vertex count".to_string(),
    })?;
    let vertex_count = parse_field::<usize>(header, line_no, "vertex count")?;
    if vertex_count > max_vertices {
        return Err(Error::Parse {
            line: line_no,
            message: format!("vertex count {vertex_count} exceeds the limit of {max_vertices}"),
        });
    }

    let mut edges = Vec::new();
    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let (head, tail, weight) = match fields.as_slice() {
            [head, tail] => (*head, *tail, None),
            [head, tail, weight] => (*head, *tail, Some(*weight)),
            _ => {
                return Err(Error::Parse {
                    line: line_no,
                    message: format!("expected `head tail [weight]`, found `{line}`"),
                });
            }
        };

        let head = VertexId::new(parse_field(head, line_no, "head")?);
        let tail = VertexId::new(parse_field(tail, line_no, "tail")?);
        let weight = match weight {
            Some(w) => parse_field(w, line_no, "weight")?,
            None => DEFAULT_WEIGHT,
        };
        edges.push(Edge::new(head, tail, weight));
    }

    tracing::debug!(vertices = vertex_count, edges = edges.len(), "parsed edge list");
    Ok(EdgeList {
        vertex_count,
        edges,
    })
}

/// Reads and parses an edge-list file with the default vertex cap.
pub fn read_edge_list(path: impl AsRef<Path>) -> Result<EdgeList> {
    read_edge_list_with_limit(path, DEFAULT_MAX_VERTICES)
}

/// Reads and parses an edge-list file, accepting at most `max_vertices`
/// vertices.
pub fn read_edge_list_with_limit(path: impl AsRef<Path>, max_vertices: usize) -> Result<EdgeList> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = input.len(), "read edge list");
    parse_edge_list_with_limit(&input, max_vertices)
}

fn parse_field<T: FromStr>(field: &str, line: usize, what: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    field.parse().map_err(|e| Error::Parse {
        line,
        message: format!("invalid {what} `{field}`: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::EdgeSet;
    use std::io::Write;

    #[test]
    fn test_parse() {
        let list: EdgeList = "# sample\n3\n\n1 2 4\n2 3\n  1 3 10  \n".parse().unwrap();

        assert_eq!(list.vertex_count, 3);
        assert_eq!(
            list.edges,
            vec![
                Edge::from_raw(1, 2, 4),
                Edge::from_raw(2, 3, 1),
                Edge::from_raw(1, 3, 10),
            ]
        );
        assert!(!list.has_negative_weights());
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        let err = parse_edge_list("3\n1 2 4\n1 x 4\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }), "{err}");

        let err = parse_edge_list("3\n1 2 3 4\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }), "{err}");

        let err = parse_edge_list("# only a comment\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{err}");

        let err = parse_edge_list("-3\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn test_vertex_count_is_capped() {
        let err = parse_edge_list("# huge\n4000000000\n1 2\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }), "{err}");

        let err = parse_edge_list_with_limit("5\n1 2\n", 4).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }), "{err}");

        let list = parse_edge_list_with_limit("4\n1 2\n", 4).unwrap();
        assert_eq!(list.vertex_count, 4);
    }

    #[test]
    fn test_read_file_with_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "3\n1 2 9").unwrap();

        assert!(matches!(
            read_edge_list_with_limit(file.path(), 2),
            Err(Error::Parse { line: 1, .. })
        ));
        assert_eq!(read_edge_list_with_limit(file.path(), 3).unwrap().vertex_count, 3);
    }

    #[test]
    fn test_negative_weights_parse() {
        let list = parse_edge_list("2\n1 2 -5\n").unwrap();
        assert!(list.has_negative_weights());
    }

    #[test]
    fn test_build_graphs() {
        let list = parse_edge_list("3\n1 2 4\n2 3 1\n").unwrap();

        let digraph = list.to_digraph().unwrap();
        assert_eq!(digraph.edge_count(), 2);

        let graph = list.to_graph().unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(VertexId::new(3), VertexId::new(2)), Some(1));
    }

    #[test]
    fn test_build_rejects_out_of_range() {
        let list = parse_edge_list("2\n1 3 4\n").unwrap();
        assert!(matches!(list.to_digraph(), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2\n1 2 9").unwrap();

        let list = read_edge_list(file.path()).unwrap();
        assert_eq!(list.edges, vec![Edge::from_raw(1, 2, 9)]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_edge_list(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
