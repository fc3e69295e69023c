//! CLI command implementations.

pub mod mst;
pub mod paths;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};
use arbor::{AlgorithmConfig, EdgeList, Selection, read_edge_list};

/// Maps the global `--heap` flag onto an algorithm configuration.
pub fn algorithm_config(heap: bool) -> AlgorithmConfig {
    let selection = if heap {
        Selection::BinaryHeap
    } else {
        Selection::LinearScan
    };
    AlgorithmConfig::new().with_selection(selection)
}

/// Load an edge list, naming the file in any error.
fn load(path: &Path) -> Result<EdgeList> {
    let list =
        read_edge_list(path).with_context(|| format!("failed to load {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        vertices = list.vertex_count,
        edges = list.edges.len(),
        "loaded graph"
    );
    Ok(list)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::{MstAlgorithm, OutputFormat};

    fn graph_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const TRIANGLE: &str = "# triangle\n3\n1 2 7\n2 3 1\n1 3 3\n";

    #[test]
    fn test_algorithm_config_heap_flag() {
        assert_eq!(algorithm_config(false).selection, Selection::LinearScan);
        assert_eq!(algorithm_config(true).selection, Selection::BinaryHeap);
    }

    #[test]
    fn test_load_reports_path() {
        let err = load(Path::new("/nonexistent/graph.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/graph.txt"));
    }

    #[test]
    fn test_commands_run_quietly() {
        let file = graph_file(TRIANGLE);
        let path = file.path();

        show::run(path, false, OutputFormat::Table, true).unwrap();
        show::run(path, true, OutputFormat::Json, true).unwrap();

        let args = paths::PathsArgs {
            path: PathBuf::from(path),
            source: 1,
            target: Some(3),
            unweighted: false,
            undirected: true,
        };
        paths::run(&args, algorithm_config(true), OutputFormat::Table, true).unwrap();

        mst::run(
            path,
            MstAlgorithm::Kruskal,
            algorithm_config(false),
            OutputFormat::Json,
            true,
        )
        .unwrap();
    }

    #[test]
    fn test_paths_rejects_unknown_source() {
        let file = graph_file(TRIANGLE);
        let args = paths::PathsArgs {
            path: file.path().to_path_buf(),
            source: 9,
            target: None,
            unweighted: true,
            undirected: false,
        };
        let err = paths::run(&args, algorithm_config(false), OutputFormat::Table, true)
            .unwrap_err();
        assert!(err.to_string().contains("source vertex 9"));
    }
}
