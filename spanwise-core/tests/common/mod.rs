use std::{
    fs,
    path::{Path, PathBuf},
};

use spanwise_core::Graph;
use tempfile::TempDir;

/// Square with one heavy diagonal, as an edge-list file body.
pub const SQUARE: &str = "4 4\n0 1 5\n1 2 3\n2 3 1\n0 3 10\n";

#[must_use]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

pub fn write_edge_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write edge list");
    path
}

/// Builds a graph from triples, panicking on invalid input.
#[must_use]
pub fn graph_with(vertex_count: usize, edges: &[(usize, usize, u32)]) -> Graph {
    let mut graph = Graph::new(vertex_count).expect("vertex count is positive");
    for &(source, target, weight) in edges {
        graph
            .add_edge(source, target, weight)
            .expect("fixture edge is valid");
    }
    graph
}
