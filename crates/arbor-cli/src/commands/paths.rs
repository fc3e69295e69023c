//! Shortest-path tree command.

use std::path::PathBuf;

use anyhow::{Result, bail};
use arbor::{AlgorithmConfig, EdgeSet, ShortestPathEngine, ShortestPathTree, VertexId, Weight};
use comfy_table::{Cell, Color};
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Arguments of the paths command.
pub struct PathsArgs {
    pub path: PathBuf,
    pub source: u32,
    pub target: Option<u32>,
    pub unweighted: bool,
    pub undirected: bool,
}

/// One row of the shortest-path tree.
#[derive(Serialize)]
struct RowOutput {
    vertex: VertexId,
    distance: Option<Weight>,
    predecessor: Option<VertexId>,
}

/// Path from the source to the requested target.
#[derive(Serialize)]
struct TargetOutput {
    target: VertexId,
    distance: Option<Weight>,
    path: Option<Vec<VertexId>>,
}

/// Shortest-path tree output.
#[derive(Serialize)]
struct PathsOutput {
    source: VertexId,
    weighted: bool,
    reached: usize,
    vertices: Vec<RowOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<TargetOutput>,
}

/// Run the paths command.
pub fn run(args: &PathsArgs, config: AlgorithmConfig, format: OutputFormat, quiet: bool) -> Result<()> {
    let list = super::load(&args.path)?;
    if !args.unweighted && list.has_negative_weights() {
        tracing::warn!("negative edge weights present; weighted distances are unreliable");
    }

    let source = VertexId::new(args.source);
    let tree = if args.undirected {
        solve(&list.to_graph()?, source, args.unweighted, config)?
    } else {
        solve(&list.to_digraph()?, source, args.unweighted, config)?
    };

    let target = match args.target {
        Some(t) => {
            let target = VertexId::new(t);
            let path = tree.path_to(target)?;
            Some(TargetOutput {
                target,
                distance: tree.distance(target),
                path,
            })
        }
        None => None,
    };

    let output = PathsOutput {
        source,
        weighted: !args.unweighted,
        reached: tree.reached_count(),
        vertices: tree
            .iter()
            .map(|(vertex, distance, predecessor)| RowOutput {
                vertex,
                distance,
                predecessor,
            })
            .collect(),
        target,
    };

    match Format::from(format) {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            if quiet {
                return Ok(());
            }
            let mut table = output::create_table();
            output::add_header(&mut table, &["Vertex", "Distance", "Predecessor"]);
            for row in &output.vertices {
                table.add_row(vec![
                    Cell::new(row.vertex).fg(Color::Green),
                    Cell::new(output::or_dash(row.distance)),
                    Cell::new(output::or_dash(row.predecessor)),
                ]);
            }
            println!("{table}");

            if let Some(target) = &output.target {
                match &target.path {
                    Some(path) => {
                        let hops = path
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(" -> ");
                        println!(
                            "\nPath {} -> {}: {hops} (length {})",
                            output.source,
                            target.target,
                            output::or_dash(target.distance)
                        );
                    }
                    None => println!(
                        "\nNo path from {} to {}",
                        output.source, target.target
                    ),
                }
            }
        }
    }

    Ok(())
}

fn solve<G: EdgeSet>(
    graph: &G,
    source: VertexId,
    unweighted: bool,
    config: AlgorithmConfig,
) -> Result<ShortestPathTree> {
    if !source.is_within(graph.vertex_count()) {
        bail!(
            "source vertex {source} is not in the graph (vertices 1..={})",
            graph.vertex_count()
        );
    }
    let engine = ShortestPathEngine::with_config(graph, config);
    let tree = if unweighted {
        engine.unweighted(source)?
    } else {
        engine.weighted(source)?
    };
    Ok(tree)
}
