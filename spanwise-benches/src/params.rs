//! Benchmark parameter types.

use std::fmt;

/// Shape of the graph a benchmark runs against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Requested edge density in `[0.0, 1.0]`.
    pub density: f64,
}

impl GraphBenchParams {
    /// Expands `vertex_counts` by `densities` in row-major order.
    #[must_use]
    pub fn grid(vertex_counts: &[usize], densities: &[f64]) -> Vec<Self> {
        vertex_counts
            .iter()
            .flat_map(|&vertex_count| {
                densities.iter().map(move |&density| Self {
                    vertex_count,
                    density,
                })
            })
            .collect()
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={},d={}", self.vertex_count, self.density)
    }
}
