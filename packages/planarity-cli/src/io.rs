//! Edge-list loading and result writing.
//!
//! Input is a whitespace-delimited edge list, one edge per line. Tokens
//! are arbitrary labels; the loader interns them to dense integer ids and
//! keeps the reverse table so results are written back under the original
//! labels. Lines with fewer than two tokens are skipped; a third (weight)
//! column is tolerated and ignored.

use planarity_core::{Graph, NodeId};
use rustc_hash::FxHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no edges were read from {0}")]
    NoEdges(PathBuf),

    #[error(transparent)]
    Core(#[from] planarity_core::PlanarityError),
}

/// A loaded graph plus the label table: `labels[id]` is the original
/// token for node `id`.
pub struct LoadedGraph {
    pub graph: Graph,
    pub labels: Vec<String>,
}

pub fn load_edge_list(path: &Path) -> CliResult<LoadedGraph> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut ids: FxHashMap<String, NodeId> = FxHashMap::default();
    let mut labels: Vec<String> = Vec::new();
    let mut graph = Graph::new();

    let mut intern = |token: &str, labels: &mut Vec<String>| -> NodeId {
        if let Some(&id) = ids.get(token) {
            return id;
        }
        let id = labels.len();
        ids.insert(token.to_string(), id);
        labels.push(token.to_string());
        id
    };

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let (a, b) = match (tokens.next(), tokens.next()) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };
        let a = intern(a, &mut labels);
        let b = intern(b, &mut labels);
        graph.add_node(a);
        graph.add_node(b);
        graph.add_edge(a, b);
    }

    graph.dedupe();

    if graph.num_edges() == 0 {
        return Err(CliError::NoEdges(path.to_path_buf()));
    }

    Ok(LoadedGraph { graph, labels })
}

/// Write each undirected edge once, as `label label` per line.
pub fn write_graph(graph: &Graph, labels: &[String], path: &Path) -> CliResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for (a, b) in graph.edges() {
        writeln!(writer, "{} {}", labels[a], labels[b])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn write_input(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_load_interns_labels_to_dense_ids() {
        let f = write_input("alpha beta\nbeta gamma\n");
        let loaded = load_edge_list(f.path()).unwrap();
        assert_eq!(loaded.labels, vec!["alpha", "beta", "gamma"]);
        assert_eq!(loaded.graph.num_nodes(), 3);
        assert_eq!(loaded.graph.num_edges(), 2);
    }

    #[test]
    fn test_load_tolerates_tabs_and_extra_whitespace() {
        let f = write_input("  a \t b  \nc\t\td\n");
        let loaded = load_edge_list(f.path()).unwrap();
        assert_eq!(loaded.graph.num_edges(), 2);
    }

    #[test]
    fn test_load_skips_short_lines_and_ignores_weights() {
        let f = write_input("a b 0.5\n\nlonely\nb c 1.0\n");
        let loaded = load_edge_list(f.path()).unwrap();
        assert_eq!(loaded.labels, vec!["a", "b", "c"]);
        assert_eq!(loaded.graph.num_edges(), 2);
    }

    #[test]
    fn test_load_drops_self_loops_but_keeps_the_node() {
        let f = write_input("a a\na b\n");
        let loaded = load_edge_list(f.path()).unwrap();
        assert_eq!(loaded.graph.num_edges(), 1);
        assert!(loaded.graph.contains(0));
    }

    #[test]
    fn test_load_rejects_edgeless_input() {
        let f = write_input("only-one-token\n\n");
        assert!(matches!(
            load_edge_list(f.path()),
            Err(CliError::NoEdges(_))
        ));
    }

    #[test]
    fn test_write_round_trips_labels() {
        let f = write_input("x y\ny z\n");
        let loaded = load_edge_list(f.path()).unwrap();

        let out = NamedTempFile::new().unwrap();
        write_graph(&loaded.graph, &loaded.labels, out.path()).unwrap();

        let written = std::fs::read_to_string(out.path()).unwrap();
        let mut lines: Vec<&str> = written.lines().collect();
        lines.sort_unstable();
        assert_eq!(lines, vec!["x y", "y z"]);
    }
}
