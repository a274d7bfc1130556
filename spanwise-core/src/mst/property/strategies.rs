//! Strategy builders for MST property tests.
//!
//! Each topology is generated from a seeded [`SmallRng`] so a failing case
//! can be replayed from its seed alone.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use super::types::{GraphFixture, Topology};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 40;
/// Dense fixtures stay smaller to bound the quadratic pair scan.
const DENSE_MAX_VERTICES: usize = 24;

pub(super) fn topology_strategy() -> impl Strategy<Value = Topology> {
    prop_oneof![
        1 => Just(Topology::Spread),
        2 => Just(Topology::ManyIdentical),
        1 => Just(Topology::Sparse),
        1 => Just(Topology::Dense),
        1 => Just(Topology::Disconnected),
    ]
}

pub(super) fn fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (topology_strategy(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture of the requested topology.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    let (vertex_count, edges) = match topology {
        Topology::Spread => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.1..=0.6);
            (vertex_count, random_pairs(rng, vertex_count, probability, 1..=1_000_000))
        }
        Topology::ManyIdentical => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let probability = rng.gen_range(0.2..=0.8);
            (vertex_count, random_pairs(rng, vertex_count, probability, 1..=3))
        }
        Topology::Sparse => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            (vertex_count, path_with_chords(rng, vertex_count))
        }
        Topology::Dense => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
            let probability = rng.gen_range(0.7..=0.95);
            (vertex_count, random_pairs(rng, vertex_count, probability, 1..=100))
        }
        Topology::Disconnected => {
            let vertex_count = rng.gen_range(4..=MAX_VERTICES);
            (vertex_count, disjoint_blocks(rng, vertex_count))
        }
    };
    GraphFixture {
        vertex_count,
        edges,
        topology,
    }
}

/// Includes each unordered pair independently with `probability`.
fn random_pairs(
    rng: &mut SmallRng,
    vertex_count: usize,
    probability: f64,
    weights: std::ops::RangeInclusive<u32>,
) -> Vec<(usize, usize, u32)> {
    let mut edges = Vec::new();
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let weight = rng.gen_range(weights.clone());
                edges.push(oriented(rng, source, target, weight));
            }
        }
    }
    edges.shuffle(rng);
    edges
}

/// Connects a random permutation of the vertices into a path, then adds up
/// to `vertex_count / 2` chords between unconnected pairs.
fn path_with_chords(rng: &mut SmallRng, vertex_count: usize) -> Vec<(usize, usize, u32)> {
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    let mut edges: Vec<(usize, usize, u32)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(1..=50)))
        .collect();

    for _ in 0..(vertex_count / 2) {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        let taken = edges.iter().any(|&(left, right, _)| {
            (left == source && right == target) || (left == target && right == source)
        });
        if source != target && !taken {
            edges.push((source, target, rng.gen_range(1..=50)));
        }
    }
    edges
}

/// Splits the vertices into two or three contiguous blocks and wires each
/// block as a random connected subgraph.
fn disjoint_blocks(rng: &mut SmallRng, vertex_count: usize) -> Vec<(usize, usize, u32)> {
    let block_count = rng.gen_range(2..=3).min(vertex_count);
    let mut bounds: Vec<usize> = (1..vertex_count).collect();
    bounds.shuffle(rng);
    bounds.truncate(block_count - 1);
    bounds.push(0);
    bounds.push(vertex_count);
    bounds.sort_unstable();

    let mut edges = Vec::new();
    for block in bounds.windows(2) {
        let (start, end) = (block[0], block[1]);
        for vertex in (start + 1)..end {
            let parent = rng.gen_range(start..vertex);
            edges.push((parent, vertex, rng.gen_range(1..=20)));
        }
        for source in start..end {
            for target in (source + 2)..end {
                if rng.gen_bool(0.25) {
                    let weight = rng.gen_range(1..=20);
                    edges.push(oriented(rng, source, target, weight));
                }
            }
        }
    }
    dedup_pairs(edges)
}

fn oriented(rng: &mut SmallRng, left: usize, right: usize, weight: u32) -> (usize, usize, u32) {
    if rng.gen_bool(0.5) {
        (left, right, weight)
    } else {
        (right, left, weight)
    }
}

/// Keeps the first triple seen for each unordered pair.
fn dedup_pairs(edges: Vec<(usize, usize, u32)>) -> Vec<(usize, usize, u32)> {
    let mut seen = std::collections::HashSet::new();
    edges
        .into_iter()
        .filter(|&(source, target, _)| seen.insert((source.min(target), source.max(target))))
        .collect()
}
