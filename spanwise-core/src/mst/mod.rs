//! Minimum spanning tree engines.
//!
//! Four engines solve the same problem over the same [`Graph`]: Prim's and
//! Kruskal's algorithms, each reading either the matrix or the adjacency
//! list. They borrow the graph immutably and allocate their scratch state
//! per call, so results never leak between invocations.
//!
//! On a disconnected graph Prim's engines span only the component holding
//! vertex 0, whereas Kruskal's engines return a spanning forest. Both are
//! valid outcomes rather than errors.

mod kruskal;
mod prim;

use std::fmt;

use tracing::debug;

use crate::Graph;

/// A single edge of a spanning tree.
///
/// Prim's engines report `(parent, child)` pairs; Kruskal's engines report
/// canonical `(smaller, larger)` pairs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MstEdge {
    source: usize,
    target: usize,
    weight: u32,
}

impl MstEdge {
    pub(crate) const fn new(source: usize, target: usize, weight: u32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint (the parent for Prim's engines).
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint (the child for Prim's engines).
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }
}

/// Identifies one of the four MST engines.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstAlgorithm {
    /// Prim's algorithm scanning matrix rows.
    PrimMatrix,
    /// Prim's algorithm walking adjacency records.
    PrimList,
    /// Kruskal's algorithm over edges harvested from the matrix.
    KruskalMatrix,
    /// Kruskal's algorithm over edges harvested from the adjacency list.
    KruskalList,
}

impl MstAlgorithm {
    /// Every engine, in reporting order.
    pub const ALL: [Self; 4] = [
        Self::PrimMatrix,
        Self::PrimList,
        Self::KruskalMatrix,
        Self::KruskalList,
    ];

    /// Returns the stable kebab-case identifier used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrimMatrix => "prim-matrix",
            Self::PrimList => "prim-list",
            Self::KruskalMatrix => "kruskal-matrix",
            Self::KruskalList => "kruskal-list",
        }
    }

    /// Runs this engine against `graph`.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::{Graph, MstAlgorithm};
    ///
    /// let mut graph = Graph::new(3)?;
    /// graph.add_edge(0, 1, 2)?;
    /// graph.add_edge(1, 2, 2)?;
    /// graph.add_edge(0, 2, 9)?;
    /// for algorithm in MstAlgorithm::ALL {
    ///     assert_eq!(algorithm.run(&graph).total_weight(), 4);
    /// }
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn run(self, graph: &Graph) -> SpanningTree {
        match self {
            Self::PrimMatrix => graph.run_prim_matrix(),
            Self::PrimList => graph.run_prim_list(),
            Self::KruskalMatrix => graph.run_kruskal_matrix(),
            Self::KruskalList => graph.run_kruskal_list(),
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one engine invocation: the accepted edges in the order the
/// engine produced them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    algorithm: MstAlgorithm,
    vertex_count: usize,
    edges: Vec<MstEdge>,
}

impl SpanningTree {
    pub(crate) const fn new(
        algorithm: MstAlgorithm,
        vertex_count: usize,
        edges: Vec<MstEdge>,
    ) -> Self {
        Self {
            algorithm,
            vertex_count,
            edges,
        }
    }

    /// Returns the engine that produced this tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> MstAlgorithm { self.algorithm }

    /// Returns the accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MstEdge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|edge| u64::from(edge.weight)).sum()
    }

    /// Returns `true` when the tree reaches every vertex, i.e. it holds
    /// exactly `V - 1` edges.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }
}

impl fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.algorithm)?;
        for edge in &self.edges {
            writeln!(f, "{} - {}\t{}", edge.source, edge.target, edge.weight)?;
        }
        write!(f, "total weight: {}", self.total_weight())
    }
}

fn finish(graph: &Graph, algorithm: MstAlgorithm, edges: Vec<MstEdge>) -> SpanningTree {
    let tree = SpanningTree::new(algorithm, graph.vertex_count(), edges);
    debug!(
        algorithm = algorithm.as_str(),
        tree_edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        spanning = tree.is_spanning(),
        "spanning tree computed"
    );
    tree
}

#[cfg(test)]
mod property;
