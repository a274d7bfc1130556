//! Fixture types for MST property tests.

use crate::{Graph, test_utils::graph_from_edges};

/// Shape of a generated fixture graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// Random pairs with weights drawn from a wide range.
    Spread,
    /// Random pairs whose weights collide constantly, stressing tie-breaks.
    ManyIdentical,
    /// A random spanning path plus a handful of chords.
    Sparse,
    /// Nearly complete graph.
    Dense,
    /// Two or three blocks with no edges between them.
    Disconnected,
}

/// A generated graph description. Never holds the same pair twice.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Distinct `(source, target, weight)` triples.
    pub edges: Vec<(usize, usize, u32)>,
    /// Topology the fixture was drawn from.
    pub topology: Topology,
}

impl GraphFixture {
    pub(super) fn build(&self) -> Graph {
        graph_from_edges(self.vertex_count, &self.edges)
    }
}
