//! Shared test utilities for `spanwise-core`.

use proptest::test_runner::Config as ProptestConfig;
use spanwise_test_support::property::case_count;

use crate::Graph;

/// Builds the proptest configuration shared by every property suite,
/// honouring the `SPANWISE_PBT_CASES` override.
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    ProptestConfig {
        cases: case_count(default_cases),
        ..ProptestConfig::default()
    }
}

/// Builds a graph from `(source, target, weight)` triples, panicking on any
/// invalid triple.
pub(crate) fn graph_from_edges(vertex_count: usize, edges: &[(usize, usize, u32)]) -> Graph {
    let mut graph = Graph::new(vertex_count).expect("vertex count must be positive");
    for &(source, target, weight) in edges {
        graph
            .add_edge(source, target, weight)
            .expect("test edge must be valid");
    }
    graph
}
