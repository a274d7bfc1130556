//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use spanwise_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction or generation failed.
    #[error("graph setup failed: {0}")]
    Graph(#[from] GraphError),
    /// A generated graph came out disconnected.
    #[error("generated graph with {vertex_count} vertices is not connected")]
    Disconnected {
        /// Vertex count of the offending graph.
        vertex_count: usize,
    },
}
