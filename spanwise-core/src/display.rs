//! Text renderings of both graph representations for diagnostics.

use std::fmt;

use crate::Graph;

/// Renders the weight matrix as a table with column indices across the top
/// and row indices down the left.
///
/// # Examples
/// ```
/// use spanwise_core::{Graph, MatrixDisplay};
///
/// let mut graph = Graph::new(2)?;
/// graph.add_edge(0, 1, 7)?;
/// assert_eq!(
///     MatrixDisplay::new(&graph).to_string(),
///     "      0   1\n 0    0   7\n 1    7   0\n",
/// );
/// # Ok::<(), spanwise_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MatrixDisplay<'a> {
    graph: &'a Graph,
}

impl<'a> MatrixDisplay<'a> {
    /// Wraps `graph` for rendering.
    #[must_use]
    pub const fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }
}

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("   ")?;
        for column in 0..self.graph.vertex_count() {
            write!(f, "{column:>4}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.graph.matrix().rows().enumerate() {
            write!(f, "{row:>2} ")?;
            for weight in cells {
                write!(f, "{weight:>4}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders each vertex's adjacency records, newest first, as
/// `Vertex i: (n, w) ...`.
#[derive(Clone, Copy, Debug)]
pub struct AdjacencyDisplay<'a> {
    graph: &'a Graph,
}

impl<'a> AdjacencyDisplay<'a> {
    /// Wraps `graph` for rendering.
    #[must_use]
    pub const fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }
}

impl fmt::Display for AdjacencyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, records) in self.graph.adjacency().iter() {
            write!(f, "Vertex {vertex}:")?;
            for record in records {
                write!(f, " ({}, {})", record.vertex(), record.weight())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
