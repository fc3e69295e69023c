//! Arbor CLI - run graph algorithms over edge-list files.
//!
//! The library is for embedding; the CLI is for inspecting a graph file and
//! printing shortest-path or spanning trees.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Graph algorithms over edge-list files.
///
/// Input files hold the vertex count on the first line, then one
/// `head tail [weight]` edge per line. Lines starting with `#` are ignored.
#[derive(Parser)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress info messages and output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Select vertices with a binary heap instead of a linear scan
    #[arg(long, global = true)]
    heap: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Spanning-tree algorithm choice.
#[derive(Clone, Copy, ValueEnum, Default)]
enum MstAlgorithm {
    /// Prim's algorithm, rooted at vertex 1
    #[default]
    Prim,
    /// Kruskal's algorithm
    Kruskal,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the adjacency lists of a graph
    Show {
        /// Path to the edge-list file
        path: PathBuf,

        /// Treat edges as undirected
        #[arg(long)]
        undirected: bool,
    },

    /// Compute a single-source shortest-path tree
    Paths {
        /// Path to the edge-list file
        path: PathBuf,

        /// Source vertex
        #[arg(short, long)]
        source: u32,

        /// Print the path to this vertex as well
        #[arg(short, long)]
        target: Option<u32>,

        /// Count hops instead of summing weights
        #[arg(long)]
        unweighted: bool,

        /// Treat edges as undirected
        #[arg(long)]
        undirected: bool,
    },

    /// Compute a minimum spanning tree
    Mst {
        /// Path to the edge-list file
        path: PathBuf,

        /// Algorithm to run
        #[arg(long, short, default_value = "prim")]
        algorithm: MstAlgorithm,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = commands::algorithm_config(cli.heap);
    let result = match cli.command {
        Commands::Show { path, undirected } => {
            commands::show::run(&path, undirected, cli.format, cli.quiet)
        }
        Commands::Paths {
            path,
            source,
            target,
            unweighted,
            undirected,
        } => commands::paths::run(
            &commands::paths::PathsArgs {
                path,
                source,
                target,
                unweighted,
                undirected,
            },
            config,
            cli.format,
            cli.quiet,
        ),
        Commands::Mst { path, algorithm } => {
            commands::mst::run(&path, algorithm, config, cli.format, cli.quiet)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
