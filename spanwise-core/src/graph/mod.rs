//! Dual-representation graph store.
//!
//! [`Graph`] owns a dense weight matrix and a per-vertex adjacency list and
//! mutates both together, so every read-only consumer may pick whichever
//! representation suits its access pattern.

mod adjacency;
mod consistency;
mod matrix;

use tracing::{debug, instrument};

use crate::error::{GraphError, Result};

pub use self::{
    adjacency::{AdjacencyList, Neighbour, Records},
    consistency::ConsistencyViolation,
    matrix::AdjacencyMatrix,
};

/// Undirected, weighted graph stored as both an adjacency matrix and an
/// adjacency list.
///
/// The vertex count is fixed at construction. Edges only ever accumulate
/// until [`Graph::reset`] clears them.
///
/// # Examples
/// ```
/// use spanwise_core::Graph;
///
/// let mut graph = Graph::new(4)?;
/// graph.add_edge(0, 1, 5)?;
/// graph.add_edge(1, 2, 3)?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.weight(2, 1), Some(3));
/// assert_eq!(graph.neighbours(1).len(), 2);
/// assert!((graph.density() - 2.0 / 6.0).abs() < f64::EPSILON);
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edge_count: usize,
    density: f64,
    matrix: AdjacencyMatrix,
    adjacency: AdjacencyList,
}

impl Graph {
    /// Creates an edgeless graph with `vertex_count` vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] when `vertex_count` is zero
    /// and [`GraphError::TooManyVertices`] when the `V * V` matrix or the
    /// per-vertex lists cannot be allocated.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount { got: vertex_count });
        }
        Ok(Self {
            vertex_count,
            edge_count: 0,
            density: 0.0,
            matrix: AdjacencyMatrix::new(vertex_count)?,
            adjacency: AdjacencyList::new(vertex_count)?,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of successful [`Graph::add_edge`] calls since the
    /// last reset.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Returns `edge_count / max_edges`, or `0.0` for a single-vertex graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn density(&self) -> f64 { self.density }

    /// Returns the maximum number of edges in a simple undirected graph with
    /// this many vertices.
    #[must_use]
    pub fn max_edges(&self) -> usize {
        max_edges(self.vertex_count)
    }

    /// Returns the matrix representation.
    #[must_use]
    #[rustfmt::skip]
    pub fn matrix(&self) -> &AdjacencyMatrix { &self.matrix }

    /// Returns the list representation.
    #[must_use]
    #[rustfmt::skip]
    pub fn adjacency(&self) -> &AdjacencyList { &self.adjacency }

    /// Returns the weight of edge `(left, right)`, or `None` when there is no
    /// such edge.
    #[must_use]
    pub fn weight(&self, left: usize, right: usize) -> Option<u32> {
        Some(self.matrix.get(left, right)).filter(|&weight| weight != 0)
    }

    /// Returns the adjacency records of `vertex`, newest first.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> Records<'_> {
        self.adjacency.neighbours(vertex)
    }

    /// Inserts the undirected edge `(source, target)` into both
    /// representations.
    ///
    /// Duplicates are not detected: inserting an existing pair again
    /// overwrites the matrix cell, adds a second pair of list records and
    /// counts as another edge. Use [`Graph::weight`] first when that matters.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`], [`GraphError::SelfLoop`] or
    /// [`GraphError::ZeroWeight`] when a precondition fails; the graph is left
    /// untouched in that case.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: u32) -> Result<()> {
        validate_edge(self.vertex_count, source, target, weight)?;
        self.matrix.set_symmetric(source, target, weight);
        self.adjacency.link(source, target, weight);
        self.edge_count = self.edge_count.saturating_add(1);
        self.density = density(self.edge_count, self.vertex_count);
        Ok(())
    }

    /// Removes every edge from both representations.
    #[instrument(
        name = "graph.reset",
        level = "debug",
        skip(self),
        fields(vertex_count = self.vertex_count),
    )]
    pub fn reset(&mut self) {
        debug!(discarded_edges = self.edge_count, "clearing graph");
        self.matrix.clear();
        self.adjacency.clear();
        self.edge_count = 0;
        self.density = 0.0;
    }
}

pub(crate) fn validate_edge(
    vertex_count: usize,
    source: usize,
    target: usize,
    weight: u32,
) -> Result<()> {
    for vertex in [source, target] {
        if vertex >= vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
    }
    if source == target {
        return Err(GraphError::SelfLoop { vertex: source });
    }
    if weight == 0 {
        return Err(GraphError::ZeroWeight {
            source_vertex: source,
            target_vertex: target,
        });
    }
    Ok(())
}

pub(crate) const fn max_edges(vertex_count: usize) -> usize {
    vertex_count.saturating_mul(vertex_count.saturating_sub(1)) / 2
}

fn density(edge_count: usize, vertex_count: usize) -> f64 {
    match max_edges(vertex_count) {
        0 => 0.0,
        max => edge_count as f64 / max as f64,
    }
}
