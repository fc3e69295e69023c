//! Adjacency listing command.

use std::path::Path;

use anyhow::Result;
use arbor::{EdgeSet, VertexId, Weight};
use comfy_table::{Cell, Color};
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// One vertex and its outgoing edges.
#[derive(Serialize)]
struct VertexOutput {
    vertex: VertexId,
    edges: Vec<NeighborOutput>,
}

/// An outgoing edge, seen from its head.
#[derive(Serialize)]
struct NeighborOutput {
    tail: VertexId,
    weight: Weight,
}

/// Graph listing output.
#[derive(Serialize)]
struct GraphOutput {
    directed: bool,
    vertex_count: usize,
    edge_count: usize,
    adjacency: Vec<VertexOutput>,
}

/// Run the show command.
pub fn run(path: &Path, undirected: bool, format: OutputFormat, quiet: bool) -> Result<()> {
    let list = super::load(path)?;
    let output = if undirected {
        describe(&list.to_graph()?)
    } else {
        describe(&list.to_digraph()?)
    };

    match Format::from(format) {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            if quiet {
                return Ok(());
            }
            let kind = if output.directed {
                "directed"
            } else {
                "undirected"
            };
            println!(
                "{} vertices, {} edges ({kind})\n",
                output.vertex_count, output.edge_count
            );

            let mut table = output::create_table();
            output::add_header(&mut table, &["Vertex", "Adjacency (tail, weight)"]);
            for row in &output.adjacency {
                let edges = row
                    .edges
                    .iter()
                    .map(|e| format!("({}, {})", e.tail, e.weight))
                    .collect::<Vec<_>>()
                    .join(" ");
                table.add_row(vec![Cell::new(row.vertex).fg(Color::Green), Cell::new(edges)]);
            }
            println!("{table}");
        }
    }

    Ok(())
}

fn describe<G: EdgeSet>(graph: &G) -> GraphOutput {
    GraphOutput {
        directed: graph.is_directed(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        adjacency: graph
            .vertices()
            .map(|vertex| VertexOutput {
                vertex,
                edges: graph
                    .edges_from(vertex)
                    .iter()
                    .map(|e| NeighborOutput {
                        tail: e.tail,
                        weight: e.weight,
                    })
                    .collect(),
            })
            .collect(),
    }
}
