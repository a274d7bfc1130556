//! Timing harness comparing the four MST engines on generated graphs.
//!
//! Each repetition regenerates the graph at the configured density and then
//! times every engine once with a monotonic clock. The report carries the
//! mean duration per engine.

use std::{
    fmt,
    time::{Duration, Instant},
};

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument};

use crate::{
    Graph, MstAlgorithm,
    error::{BenchmarkError, GraphError},
    generator::validate_density,
};

/// Vertex counts exercised by [`standard_suite`].
pub const STANDARD_VERTEX_COUNTS: [usize; 7] = [10, 20, 50, 100, 200, 500, 1000];
/// Densities exercised by [`standard_suite`].
pub const STANDARD_DENSITIES: [f64; 3] = [0.2, 0.6, 0.99];
/// Repetitions per configuration in [`standard_suite`].
pub const STANDARD_REPETITIONS: usize = 50;

/// Configures and validates a [`Benchmark`].
///
/// # Examples
/// ```
/// use spanwise_core::BenchmarkBuilder;
///
/// let benchmark = BenchmarkBuilder::new()
///     .with_vertex_count(12)
///     .with_density(0.5)
///     .with_repetitions(3)
///     .with_seed(7)
///     .build()?;
/// let report = benchmark.run()?;
/// assert_eq!(report.repetitions(), 3);
/// # Ok::<(), spanwise_core::BenchmarkError>(())
/// ```
#[derive(Clone, Debug)]
pub struct BenchmarkBuilder {
    vertex_count: usize,
    density: f64,
    repetitions: usize,
    seed: u64,
}

impl Default for BenchmarkBuilder {
    fn default() -> Self {
        Self {
            vertex_count: 100,
            density: 0.5,
            repetitions: STANDARD_REPETITIONS,
            seed: 0,
        }
    }
}

impl BenchmarkBuilder {
    /// Creates a builder for 100 vertices at density 0.5 with
    /// [`STANDARD_REPETITIONS`] repetitions and seed 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the vertex count.
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Overrides the target density.
    #[must_use]
    pub const fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Overrides the number of repetitions.
    #[must_use]
    pub const fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Overrides the generator seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`BenchmarkError::Graph`] wrapping
    /// [`GraphError::InvalidVertexCount`] or [`GraphError::InvalidDensity`],
    /// or [`BenchmarkError::ZeroRepetitions`].
    pub fn build(self) -> Result<Benchmark, BenchmarkError> {
        if self.vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount {
                got: self.vertex_count,
            }
            .into());
        }
        validate_density(self.density)?;
        if self.repetitions == 0 {
            return Err(BenchmarkError::ZeroRepetitions);
        }
        Ok(Benchmark {
            vertex_count: self.vertex_count,
            density: self.density,
            repetitions: self.repetitions,
            seed: self.seed,
        })
    }
}

/// A validated benchmark configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Benchmark {
    vertex_count: usize,
    density: f64,
    repetitions: usize,
    seed: u64,
}

impl Benchmark {
    /// Returns the vertex count of every generated graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the target density of every generated graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn density(&self) -> f64 { self.density }

    /// Returns the number of repetitions.
    #[must_use]
    #[rustfmt::skip]
    pub const fn repetitions(&self) -> usize { self.repetitions }

    /// Returns the generator seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Runs every repetition and averages the per-engine timings.
    ///
    /// # Errors
    /// Returns [`BenchmarkError::WeightDisagreement`] when the engines report
    /// different total weights for the same graph, or
    /// [`BenchmarkError::Graph`] when generation fails.
    #[instrument(
        name = "bench.run",
        skip(self),
        fields(
            vertex_count = self.vertex_count,
            density = self.density,
            repetitions = self.repetitions,
            seed = self.seed,
        ),
    )]
    pub fn run(&self) -> Result<BenchmarkReport, BenchmarkError> {
        let mut graph = Graph::new(self.vertex_count)?;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut totals = [Duration::ZERO; MstAlgorithm::ALL.len()];

        for repetition in 0..self.repetitions {
            graph.generate_random(self.density, &mut rng)?;
            let mut reference: Option<(MstAlgorithm, u64)> = None;
            for (total, algorithm) in totals.iter_mut().zip(MstAlgorithm::ALL) {
                let started = Instant::now();
                let tree = algorithm.run(&graph);
                let elapsed = started.elapsed();
                record_duration(algorithm, elapsed);
                *total += elapsed;

                let weight = tree.total_weight();
                match reference {
                    None => reference = Some((algorithm, weight)),
                    Some((reference_algorithm, reference_weight)) if reference_weight != weight => {
                        return Err(BenchmarkError::WeightDisagreement {
                            repetition,
                            reference_algorithm: reference_algorithm.as_str(),
                            reference_weight,
                            algorithm: algorithm.as_str(),
                            weight,
                        });
                    }
                    Some(_) => {}
                }
            }
            debug!(repetition, edge_count = graph.edge_count(), "repetition timed");
        }

        let report = BenchmarkReport {
            vertex_count: self.vertex_count,
            density: self.density,
            repetitions: self.repetitions,
            averages: totals.map(|total| average(total, self.repetitions)),
        };
        info!(
            prim_matrix = ?report.average(MstAlgorithm::PrimMatrix),
            prim_list = ?report.average(MstAlgorithm::PrimList),
            kruskal_matrix = ?report.average(MstAlgorithm::KruskalMatrix),
            kruskal_list = ?report.average(MstAlgorithm::KruskalList),
            "benchmark finished"
        );
        Ok(report)
    }
}

/// Mean timings produced by [`Benchmark::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkReport {
    vertex_count: usize,
    density: f64,
    repetitions: usize,
    averages: [Duration; MstAlgorithm::ALL.len()],
}

impl BenchmarkReport {
    /// Returns the vertex count of the benchmarked graphs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the requested density.
    #[must_use]
    #[rustfmt::skip]
    pub const fn density(&self) -> f64 { self.density }

    /// Returns how many repetitions were averaged.
    #[must_use]
    #[rustfmt::skip]
    pub const fn repetitions(&self) -> usize { self.repetitions }

    /// Returns the mean duration of `algorithm` per repetition.
    #[must_use]
    pub fn average(&self, algorithm: MstAlgorithm) -> Duration {
        MstAlgorithm::ALL
            .iter()
            .zip(self.averages)
            .find_map(|(&candidate, duration)| (candidate == algorithm).then_some(duration))
            .unwrap_or_default()
    }

    /// Iterates over `(algorithm, mean duration)` pairs in reporting order.
    pub fn averages(&self) -> impl Iterator<Item = (MstAlgorithm, Duration)> + '_ {
        MstAlgorithm::ALL.into_iter().zip(self.averages)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "vertices: {}, density: {:.0}%, repetitions: {}",
            self.vertex_count,
            self.density * 100.0,
            self.repetitions
        )?;
        for (algorithm, duration) in self.averages() {
            writeln!(f, "  {:<16}{:>12} us", algorithm.as_str(), duration.as_micros())?;
        }
        Ok(())
    }
}

/// Builds the full grid of [`STANDARD_VERTEX_COUNTS`] by
/// [`STANDARD_DENSITIES`], each with [`STANDARD_REPETITIONS`] repetitions.
///
/// Configuration `i` in the returned order is seeded with `seed + i`.
#[must_use]
pub fn standard_suite(seed: u64) -> Vec<Benchmark> {
    STANDARD_VERTEX_COUNTS
        .iter()
        .flat_map(|&vertex_count| {
            STANDARD_DENSITIES
                .iter()
                .map(move |&density| (vertex_count, density))
        })
        .zip(0_u64..)
        .map(|((vertex_count, density), offset)| Benchmark {
            vertex_count,
            density,
            repetitions: STANDARD_REPETITIONS,
            seed: seed.wrapping_add(offset),
        })
        .collect()
}

fn average(total: Duration, repetitions: usize) -> Duration {
    let divisor = u128::try_from(repetitions).unwrap_or(u128::MAX).max(1);
    let nanos = total.as_nanos() / divisor;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

#[cfg(feature = "metrics")]
fn record_duration(algorithm: MstAlgorithm, elapsed: Duration) {
    metrics::histogram!("spanwise_mst_duration_seconds", "algorithm" => algorithm.as_str())
        .record(elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_duration(_algorithm: MstAlgorithm, _elapsed: Duration) {}
