//! Strategy builders for spanning-tree property tests.
//!
//! Every generator is driven by a seeded [`SmallRng`], so a failing case is
//! reproduced from its distribution and seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for generated graphs.
const MIN_NODES: usize = 8;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 64;
/// Maximum node count for dense graphs.
const DENSE_MAX_NODES: usize = 32;

/// Generates fixtures covering all weight distributions.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let mut builder = EdgeBuilder::default();
    let node_count = match distribution {
        WeightDistribution::Unique => {
            let n = rng.gen_range(MIN_NODES..=MAX_NODES);
            builder.random_pairs(0, n, 0.2..=0.6, rng, |r| r.gen_range(0.1..100.0));
            n
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<f64> = (0..rng.gen_range(1..=3))
                .map(|_| f64::from(rng.gen_range(1_u8..=10)))
                .collect();
            let n = rng.gen_range(MIN_NODES..=MAX_NODES);
            builder.random_pairs(0, n, 0.3..=0.7, rng, |r| pool[r.gen_range(0..pool.len())]);
            n
        }
        WeightDistribution::Sparse => {
            let n = rng.gen_range(MIN_NODES..=MAX_NODES);
            builder.sparse(n, rng);
            n
        }
        WeightDistribution::Dense => {
            let n = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
            builder.random_pairs(0, n, 0.7..=0.95, rng, |r| r.gen_range(0.1..100.0));
            n
        }
        WeightDistribution::Disconnected => builder.disconnected(rng),
    };
    MstFixture {
        node_count,
        edges: builder.edges,
        weights: builder.weights,
        distribution,
    }
}

/// Accumulates edges and their weights in edge-id order.
#[derive(Default)]
struct EdgeBuilder {
    edges: Vec<(usize, usize)>,
    weights: Vec<f64>,
}

impl EdgeBuilder {
    fn push(&mut self, u: usize, v: usize, weight: f64) {
        self.edges.push((u, v));
        self.weights.push(weight);
    }

    /// Adds each pair of `offset..offset + size` with a probability drawn
    /// from `probability`, in random orientation. A component of two or
    /// more nodes always gets at least one edge.
    fn random_pairs(
        &mut self,
        offset: usize,
        size: usize,
        probability: std::ops::RangeInclusive<f64>,
        rng: &mut SmallRng,
        mut weight: impl FnMut(&mut SmallRng) -> f64,
    ) {
        let p = rng.gen_range(probability);
        let start = self.edges.len();
        for i in offset..offset + size {
            for j in (i + 1)..offset + size {
                if rng.gen_bool(p) {
                    let w = weight(rng);
                    if rng.gen_bool(0.5) {
                        self.push(i, j, w);
                    } else {
                        self.push(j, i, w);
                    }
                }
            }
        }
        if size >= 2 && self.edges.len() == start {
            let w = weight(rng);
            self.push(offset, offset + 1, w);
        }
    }

    /// Random spanning path plus roughly `n / 2` to `n` extra edges, some
    /// of which are self-loops or parallel edges.
    fn sparse(&mut self, n: usize, rng: &mut SmallRng) {
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(rng);
        for pair in perm.windows(2) {
            self.push(pair[0], pair[1], rng.gen_range(0.1..100.0));
        }
        for _ in 0..rng.gen_range(n / 2..=n) {
            let i = rng.gen_range(0..n);
            let j = rng.gen_range(0..n);
            self.push(i, j, rng.gen_range(0.1..100.0));
        }
        // Shuffle so the spanning path is not simply the first edges.
        let mut order: Vec<usize> = (0..self.edges.len()).collect();
        order.shuffle(rng);
        self.edges = order.iter().map(|&e| self.edges[e]).collect();
        self.weights = order.iter().map(|&e| self.weights[e]).collect();
    }

    /// 2 to 5 components of 3 to 12 nodes and up to two isolated nodes.
    fn disconnected(&mut self, rng: &mut SmallRng) -> usize {
        let mut offset = 0;
        for _ in 0..rng.gen_range(2..=5) {
            let size = rng.gen_range(3..=12);
            self.random_pairs(offset, size, 0.3..=0.8, rng, |r| r.gen_range(0.1..100.0));
            offset += size;
        }
        offset + rng.gen_range(0..=2)
    }
}
