//! Random connected graph generation.
//!
//! Generation runs in two phases. The first grows a random spanning tree so
//! the result is always connected; the second inserts random extra edges
//! until the requested density is reached.

use std::ops::RangeInclusive;

use rand::Rng;
use tracing::{info, instrument};

use crate::{
    Graph,
    error::{GraphError, Result},
    graph::max_edges,
};

/// Inclusive bounds for the weights the generator draws.
pub const GENERATED_WEIGHT_RANGE: RangeInclusive<u32> = 1..=100;

/// Summary of a [`Graph::generate_random`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationReport {
    /// Density requested by the caller.
    pub requested_density: f64,
    /// Density actually achieved.
    pub achieved_density: f64,
    /// `floor(requested_density * max_edges)`.
    pub target_edges: usize,
    /// Edges inserted while building the spanning tree (`V - 1`).
    pub tree_edges: usize,
    /// Edges inserted while filling up to the target.
    pub fill_edges: usize,
}

impl Graph {
    /// Replaces the graph's edges with a random connected graph of roughly
    /// `density`.
    ///
    /// The spanning-tree phase always inserts `V - 1` edges, so when the
    /// target edge count is below that the achieved density exceeds the
    /// request. Weights are drawn uniformly from [`GENERATED_WEIGHT_RANGE`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidDensity`] when `density` is not a finite
    /// value within `[0.0, 1.0]`. The graph is not modified in that case.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::SmallRng};
    /// use spanwise_core::Graph;
    ///
    /// let mut graph = Graph::new(10)?;
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let report = graph.generate_random(0.5, &mut rng)?;
    /// assert_eq!(report.tree_edges, 9);
    /// assert_eq!(graph.edge_count(), 22);
    /// assert!(graph.run_prim_list().is_spanning());
    /// # Ok::<(), spanwise_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.generate_random",
        skip(self, rng),
        fields(vertex_count = self.vertex_count()),
    )]
    pub fn generate_random<R: Rng + ?Sized>(
        &mut self,
        density: f64,
        rng: &mut R,
    ) -> Result<GenerationReport> {
        validate_density(density)?;
        self.reset();

        let tree_edges = self.grow_random_tree(rng)?;
        let target_edges = target_edge_count(density, self.vertex_count());
        let fill_edges = self.fill_to(target_edges, rng)?;

        let report = GenerationReport {
            requested_density: density,
            achieved_density: self.density(),
            target_edges,
            tree_edges,
            fill_edges,
        };
        info!(
            edge_count = self.edge_count(),
            target_edges,
            achieved_density = report.achieved_density,
            "random graph generated"
        );
        Ok(report)
    }

    /// Connects every vertex by repeatedly joining a random tree vertex to a
    /// random vertex not yet in the tree.
    fn grow_random_tree<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize> {
        let mut visited = vec![0_usize];
        let mut unvisited: Vec<usize> = (1..self.vertex_count()).collect();
        while !unvisited.is_empty() {
            let source = visited[rng.gen_range(0..visited.len())];
            let target = unvisited.swap_remove(rng.gen_range(0..unvisited.len()));
            self.add_edge(source, target, rng.gen_range(GENERATED_WEIGHT_RANGE))?;
            visited.push(target);
        }
        Ok(self.edge_count())
    }

    /// Inserts random edges between unconnected pairs until the graph holds
    /// `target_edges` edges. Returns how many were inserted.
    fn fill_to<R: Rng + ?Sized>(&mut self, target_edges: usize, rng: &mut R) -> Result<usize> {
        let vertex_count = self.vertex_count();
        let mut inserted = 0;
        while self.edge_count() < target_edges {
            let source = rng.gen_range(0..vertex_count);
            let target = rng.gen_range(0..vertex_count);
            if source == target || self.weight(source, target).is_some() {
                continue;
            }
            self.add_edge(source, target, rng.gen_range(GENERATED_WEIGHT_RANGE))?;
            inserted += 1;
        }
        Ok(inserted)
    }
}

pub(crate) fn validate_density(density: f64) -> Result<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(GraphError::InvalidDensity { got: density })
    }
}

/// `density` must already lie within `[0, 1]`.
fn target_edge_count(density: f64, vertex_count: usize) -> usize {
    let max = max_edges(vertex_count);
    ((density * max as f64).floor() as usize).min(max)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(-0.1)]
    #[case(1.01)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_density_outside_unit_interval(#[case] density: f64) {
        let mut graph = Graph::new(4).expect("graph must build");
        graph.add_edge(0, 1, 3).expect("edge must insert");
        let mut rng = SmallRng::seed_from_u64(1);

        let err = graph
            .generate_random(density, &mut rng)
            .expect_err("density must be rejected");

        assert!(matches!(err, GraphError::InvalidDensity { .. }));
        assert_eq!(graph.edge_count(), 1, "graph must be untouched");
    }

    #[rstest]
    #[case(0.0, 10, 0)]
    #[case(0.2, 10, 9)]
    #[case(0.5, 10, 22)]
    #[case(1.0, 10, 45)]
    #[case(0.99, 100, 4900)]
    #[case(1.0, 1, 0)]
    fn target_edge_count_floors_the_product(
        #[case] density: f64,
        #[case] vertex_count: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(target_edge_count(density, vertex_count), expected);
    }

    #[rstest]
    #[case::empty(0.0)]
    #[case::sparse(0.2)]
    #[case::medium(0.6)]
    #[case::complete(1.0)]
    fn generated_graph_is_connected(#[case] density: f64) {
        let mut graph = Graph::new(25).expect("graph must build");
        let mut rng = SmallRng::seed_from_u64(42);

        let report = graph
            .generate_random(density, &mut rng)
            .expect("generation must succeed");

        assert_eq!(report.tree_edges, 24);
        assert_eq!(
            graph.edge_count(),
            report.target_edges.max(report.tree_edges)
        );
        assert!(graph.run_kruskal_list().is_spanning());
        graph
            .check_consistency()
            .expect("representations must agree");
    }

    #[test]
    fn weights_stay_within_generated_range() {
        let mut graph = Graph::new(30).expect("graph must build");
        let mut rng = SmallRng::seed_from_u64(9);
        graph
            .generate_random(0.8, &mut rng)
            .expect("generation must succeed");

        for vertex in 0..graph.vertex_count() {
            for record in graph.neighbours(vertex) {
                assert!(GENERATED_WEIGHT_RANGE.contains(&record.weight()));
            }
        }
    }

    #[test]
    fn regeneration_discards_previous_edges() {
        let mut graph = Graph::new(12).expect("graph must build");
        let mut rng = SmallRng::seed_from_u64(3);
        graph
            .generate_random(1.0, &mut rng)
            .expect("dense generation must succeed");
        graph
            .generate_random(0.0, &mut rng)
            .expect("sparse generation must succeed");

        assert_eq!(graph.edge_count(), 11);
        graph
            .check_consistency()
            .expect("representations must agree");
    }

    #[test]
    fn same_seed_yields_same_graph() {
        let build = || {
            let mut graph = Graph::new(16).expect("graph must build");
            let mut rng = SmallRng::seed_from_u64(1234);
            graph
                .generate_random(0.4, &mut rng)
                .expect("generation must succeed");
            graph
        };
        assert_eq!(build(), build());
    }
}
