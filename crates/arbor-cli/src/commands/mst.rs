//! Minimum spanning tree command.

use std::path::Path;

use anyhow::Result;
use arbor::{AlgorithmConfig, MinimumSpanningTreeEngine};
use comfy_table::{Cell, Color};

use crate::output::{self, Format};
use crate::{MstAlgorithm, OutputFormat};

/// Run the mst command.
pub fn run(
    path: &Path,
    algorithm: MstAlgorithm,
    config: AlgorithmConfig,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let graph = super::load(path)?.to_graph()?;
    let engine = MinimumSpanningTreeEngine::with_config(&graph, config);
    let tree = match algorithm {
        MstAlgorithm::Prim => engine.prim()?,
        MstAlgorithm::Kruskal => engine.kruskal()?,
    };

    match Format::from(format) {
        Format::Json => output::print_json(&tree, quiet)?,
        Format::Table => {
            if quiet {
                return Ok(());
            }
            let mut table = output::create_table();
            output::add_header(&mut table, &["From", "To", "Weight"]);
            for edge in &tree.edges {
                table.add_row(vec![
                    Cell::new(edge.head),
                    Cell::new(edge.tail).fg(Color::Green),
                    Cell::new(edge.weight),
                ]);
            }
            println!("{table}\n");

            let unreached = if tree.unreached.is_empty() {
                "none".to_string()
            } else {
                tree.unreached
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            output::print_key_value_table(
                &[
                    ("Edges", tree.len().to_string()),
                    ("Total weight", tree.total_weight.to_string()),
                    ("Spanning", tree.is_spanning().to_string()),
                    ("Unreached", unreached),
                ],
                quiet,
            );
        }
    }

    Ok(())
}
