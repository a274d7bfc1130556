//! Engine-level properties checked against the reference forest:
//!
//! - every reported edge exists in the graph with the reported weight;
//! - no engine reports a cycle;
//! - Kruskal's engines return `V - C` edges whose weight matches the
//!   reference forest;
//! - Prim's engines span exactly vertex 0's component at minimum weight;
//! - all four engines agree whenever the graph is connected.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, MstAlgorithm, SpanningTree};

use super::{
    oracle::{ReferenceForest, reference_forest},
    types::GraphFixture,
};

/// Runs every engine on the fixture and validates its output.
pub(super) fn run_engine_properties(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let reference = reference_forest(fixture.vertex_count, &fixture.edges);

    for algorithm in MstAlgorithm::ALL {
        let tree = algorithm.run(&graph);
        validate_edges_exist(&graph, &tree)?;
        validate_acyclic(fixture.vertex_count, &tree)?;
        match algorithm {
            MstAlgorithm::PrimMatrix | MstAlgorithm::PrimList => {
                validate_prim(&reference, &tree, fixture)?;
            }
            MstAlgorithm::KruskalMatrix | MstAlgorithm::KruskalList => {
                validate_kruskal(&reference, &tree, fixture)?;
            }
        }
        let spanning = reference.component_count == 1;
        if tree.is_spanning() != spanning {
            return Err(TestCaseError::fail(format!(
                "{algorithm}: is_spanning()={} but graph connectivity is {spanning} ({:?})",
                tree.is_spanning(),
                fixture.topology,
            )));
        }
    }
    Ok(())
}

fn validate_edges_exist(graph: &Graph, tree: &SpanningTree) -> TestCaseResult {
    for edge in tree.edges() {
        if graph.weight(edge.source(), edge.target()) != Some(edge.weight()) {
            return Err(TestCaseError::fail(format!(
                "{}: reported edge {edge:?} is not in the graph",
                tree.algorithm(),
            )));
        }
    }
    Ok(())
}

fn validate_acyclic(vertex_count: usize, tree: &SpanningTree) -> TestCaseResult {
    let mut labels: Vec<usize> = (0..vertex_count).collect();
    for edge in tree.edges() {
        let (keep, replace) = (labels[edge.source()], labels[edge.target()]);
        if keep == replace {
            return Err(TestCaseError::fail(format!(
                "{}: edge {edge:?} closes a cycle",
                tree.algorithm(),
            )));
        }
        for label in &mut labels {
            if *label == replace {
                *label = keep;
            }
        }
    }
    Ok(())
}

fn validate_prim(
    reference: &ReferenceForest,
    tree: &SpanningTree,
    fixture: &GraphFixture,
) -> TestCaseResult {
    let expected_edges = reference.root_size() - 1;
    if tree.edges().len() != expected_edges || tree.total_weight() != reference.root_weight {
        return Err(TestCaseError::fail(format!(
            "{}: {} edges / weight {} but vertex 0's component needs {} edges / weight {} ({:?}, V={})",
            tree.algorithm(),
            tree.edges().len(),
            tree.total_weight(),
            expected_edges,
            reference.root_weight,
            fixture.topology,
            fixture.vertex_count,
        )));
    }
    let root = reference.labels[0];
    if let Some(edge) = tree
        .edges()
        .iter()
        .find(|edge| reference.labels[edge.target()] != root)
    {
        return Err(TestCaseError::fail(format!(
            "{}: edge {edge:?} leaves vertex 0's component",
            tree.algorithm(),
        )));
    }
    Ok(())
}

fn validate_kruskal(
    reference: &ReferenceForest,
    tree: &SpanningTree,
    fixture: &GraphFixture,
) -> TestCaseResult {
    if tree.edges().len() != reference.edge_count || tree.total_weight() != reference.total_weight {
        return Err(TestCaseError::fail(format!(
            "{}: {} edges / weight {} but the reference forest has {} / {} ({:?}, V={})",
            tree.algorithm(),
            tree.edges().len(),
            tree.total_weight(),
            reference.edge_count,
            reference.total_weight,
            fixture.topology,
            fixture.vertex_count,
        )));
    }
    if let Some(edge) = tree.edges().iter().find(|edge| edge.source() >= edge.target()) {
        return Err(TestCaseError::fail(format!(
            "{}: edge {edge:?} is not in (smaller, larger) form",
            tree.algorithm(),
        )));
    }
    let weights: Vec<u32> = tree.edges().iter().map(|edge| edge.weight()).collect();
    if !weights.is_sorted() {
        return Err(TestCaseError::fail(format!(
            "{}: weights {weights:?} are not in acceptance order",
            tree.algorithm(),
        )));
    }
    Ok(())
}
