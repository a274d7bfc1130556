//! Prim's algorithm over the matrix and list representations.
//!
//! Both variants grow the tree from vertex 0 and pick the next vertex with a
//! linear scan over the keys, so selection costs O(V²) regardless of the
//! representation. They differ only in how a selected vertex's neighbours
//! are visited: the matrix variant scans a full row, the list variant walks
//! the vertex's records.

use tracing::{debug, instrument};

use crate::Graph;

use super::{MstAlgorithm, MstEdge, SpanningTree, finish};

const ROOT: usize = 0;

/// Per-call scratch state: tentative keys, tree parents (with the weight of
/// the connecting edge) and membership.
struct PrimState {
    key: Vec<u64>,
    parent: Vec<Option<(usize, u32)>>,
    in_tree: Vec<bool>,
}

impl PrimState {
    fn new(vertex_count: usize) -> Self {
        let mut key = vec![u64::MAX; vertex_count];
        if let Some(root) = key.get_mut(ROOT) {
            *root = 0;
        }
        Self {
            key,
            parent: vec![None; vertex_count],
            in_tree: vec![false; vertex_count],
        }
    }

    /// Returns the vertex outside the tree with the smallest finite key.
    /// Ties go to the lowest index.
    fn select(&self) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (vertex, (&key, &in_tree)) in self.key.iter().zip(&self.in_tree).enumerate() {
            if in_tree || key == u64::MAX {
                continue;
            }
            if best.is_none_or(|(_, best_key)| key < best_key) {
                best = Some((vertex, key));
            }
        }
        best.map(|(vertex, _)| vertex)
    }

    fn admit(&mut self, vertex: usize) {
        if let Some(flag) = self.in_tree.get_mut(vertex) {
            *flag = true;
        }
    }

    fn relax(&mut self, from: usize, to: usize, weight: u32) {
        let (Some(&in_tree), Some(key)) = (self.in_tree.get(to), self.key.get_mut(to)) else {
            return;
        };
        if !in_tree && u64::from(weight) < *key {
            *key = u64::from(weight);
            if let Some(parent) = self.parent.get_mut(to) {
                *parent = Some((from, weight));
            }
        }
    }

    fn into_edges(self) -> Vec<MstEdge> {
        self.parent
            .into_iter()
            .enumerate()
            .filter_map(|(child, parent)| {
                parent.map(|(parent, weight)| MstEdge::new(parent, child, weight))
            })
            .collect()
    }
}

fn grow(graph: &Graph, mut visit: impl FnMut(&mut PrimState, usize)) -> Vec<MstEdge> {
    let vertex_count = graph.vertex_count();
    let mut state = PrimState::new(vertex_count);
    for _ in 1..vertex_count {
        let Some(vertex) = state.select() else {
            debug!("remaining vertices are unreachable from the root");
            break;
        };
        state.admit(vertex);
        visit(&mut state, vertex);
    }
    state.into_edges()
}

impl Graph {
    /// Computes a minimum spanning tree with Prim's algorithm, reading
    /// neighbours from the matrix.
    ///
    /// Edges are reported as `(parent, child)` in ascending child order. On
    /// a disconnected graph only the component of vertex 0 is spanned.
    ///
    /// # Examples
    /// ```
    /// use spanwise_core::Graph;
    ///
    /// let mut graph = Graph::new(3)?;
    /// graph.add_edge(0, 1, 4)?;
    /// graph.add_edge(0, 2, 1)?;
    /// graph.add_edge(1, 2, 2)?;
    /// let tree = graph.run_prim_matrix();
    /// assert_eq!(tree.total_weight(), 3);
    /// assert_eq!(tree.edges()[0].source(), 2);
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    #[must_use]
    #[instrument(
        name = "mst.prim_matrix",
        level = "debug",
        skip(self),
        fields(vertex_count = self.vertex_count(), edge_count = self.edge_count()),
    )]
    pub fn run_prim_matrix(&self) -> SpanningTree {
        let edges = grow(self, |state, vertex| {
            for (neighbour, &weight) in self.matrix().row(vertex).iter().enumerate() {
                if weight != 0 {
                    state.relax(vertex, neighbour, weight);
                }
            }
        });
        finish(self, MstAlgorithm::PrimMatrix, edges)
    }

    /// Computes a minimum spanning tree with Prim's algorithm, walking the
    /// adjacency records of each selected vertex.
    ///
    /// Produces the same tree as [`Graph::run_prim_matrix`] unless the graph
    /// holds duplicate insertions of the same pair.
    #[must_use]
    #[instrument(
        name = "mst.prim_list",
        level = "debug",
        skip(self),
        fields(vertex_count = self.vertex_count(), edge_count = self.edge_count()),
    )]
    pub fn run_prim_list(&self) -> SpanningTree {
        let edges = grow(self, |state, vertex| {
            for record in self.neighbours(vertex) {
                state.relax(vertex, record.vertex(), record.weight());
            }
        });
        finish(self, MstAlgorithm::PrimList, edges)
    }
}
