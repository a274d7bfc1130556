//! Kruskal's algorithm over edge sets harvested from either representation.

use tracing::{debug, instrument};

use crate::{DisjointSet, Graph};

use super::{MstAlgorithm, MstEdge, SpanningTree, finish};

/// Collects each undirected edge once by scanning the matrix's upper
/// triangle.
fn harvest_matrix(graph: &Graph) -> Vec<MstEdge> {
    let mut edges = Vec::with_capacity(graph.edge_count());
    for (source, row) in graph.matrix().rows().enumerate() {
        for (target, &weight) in row.iter().enumerate().skip(source + 1) {
            if weight != 0 {
                edges.push(MstEdge::new(source, target, weight));
            }
        }
    }
    edges
}

/// Collects each undirected edge once by keeping only the record stored
/// under the smaller endpoint.
fn harvest_list(graph: &Graph) -> Vec<MstEdge> {
    let mut edges = Vec::with_capacity(graph.edge_count());
    for (source, records) in graph.adjacency().iter() {
        edges.extend(
            records
                .filter(|record| record.vertex() > source)
                .map(|record| MstEdge::new(source, record.vertex(), record.weight())),
        );
    }
    edges
}

/// Sorts `edges` by weight (equal weights keep harvest order) and accepts
/// every edge that joins two different components, stopping once `V - 1`
/// edges are accepted.
fn select(vertex_count: usize, mut edges: Vec<MstEdge>) -> Vec<MstEdge> {
    edges.sort_by_key(MstEdge::weight);

    let wanted = vertex_count.saturating_sub(1);
    let mut components = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(wanted);
    for edge in edges {
        if accepted.len() == wanted {
            break;
        }
        if components.union(edge.source(), edge.target()) {
            accepted.push(edge);
        }
    }
    debug!(
        accepted = accepted.len(),
        components = components.components(),
        "kruskal selection finished"
    );
    accepted
}

impl Graph {
    /// Computes a minimum spanning forest with Kruskal's algorithm over the
    /// edges found in the matrix.
    ///
    /// Edges are reported as `(smaller, larger)` pairs in acceptance order.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::Graph;
    ///
    /// let mut graph = Graph::new(4)?;
    /// graph.add_edge(0, 1, 5)?;
    /// graph.add_edge(1, 2, 3)?;
    /// graph.add_edge(2, 3, 1)?;
    /// graph.add_edge(0, 3, 10)?;
    /// let tree = graph.run_kruskal_matrix();
    /// let weights: Vec<u32> = tree.edges().iter().map(|edge| edge.weight()).collect();
    /// assert_eq!(weights, [1, 3, 5]);
    /// assert_eq!(tree.total_weight(), 9);
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "mst.kruskal_matrix",
        level = "debug",
        skip(self),
        fields(vertex_count = self.vertex_count(), edge_count = self.edge_count()),
    )]
    pub fn run_kruskal_matrix(&self) -> SpanningTree {
        let edges = select(self.vertex_count(), harvest_matrix(self));
        finish(self, MstAlgorithm::KruskalMatrix, edges)
    }

    /// Computes a minimum spanning forest with Kruskal's algorithm over the
    /// edges found in the adjacency list.
    #[must_use]
    #[instrument(
        name = "mst.kruskal_list",
        level = "debug",
        skip(self),
        fields(vertex_count = self.vertex_count(), edge_count = self.edge_count()),
    )]
    pub fn run_kruskal_list(&self) -> SpanningTree {
        let edges = select(self.vertex_count(), harvest_list(self));
        finish(self, MstAlgorithm::KruskalList, edges)
    }
}
