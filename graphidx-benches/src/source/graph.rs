//! Weighted undirected graphs for index and spanning-tree benchmarks.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use super::SyntheticError;

/// Configuration for a connected random graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Edges added on top of the random spanning backbone. They may repeat
    /// existing edges or be self-loops.
    pub extra_edges: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// An edge list with one weight in `[0.0, 1.0)` per edge.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticGraph {
    node_count: usize,
    edges: Vec<(usize, usize)>,
    weights: Vec<f64>,
}

impl SyntheticGraph {
    /// Generates a connected graph: every node `i > 0` is attached to a
    /// random earlier node, then `extra_edges` random pairs are added and
    /// the edge order is shuffled.
    ///
    /// # Errors
    /// Returns [`SyntheticError::ZeroNodes`] for an empty graph and
    /// [`SyntheticError::Overflow`] when the edge total does not fit.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        let node_count = config.node_count;
        let backbone = node_count.checked_sub(1).ok_or(SyntheticError::ZeroNodes)?;
        let total = backbone
            .checked_add(config.extra_edges)
            .ok_or(SyntheticError::Overflow)?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut edges = Vec::with_capacity(total);
        edges.extend((1..node_count).map(|node| (rng.gen_range(0..node), node)));
        edges.extend(
            (0..config.extra_edges)
                .map(|_| (rng.gen_range(0..node_count), rng.gen_range(0..node_count))),
        );
        edges.shuffle(&mut rng);
        let weights = random_weights(&mut rng, edges.len());
        Ok(Self {
            node_count,
            edges,
            weights,
        })
    }

    /// Generates a `width` x `height` grid with random weights. Nodes are
    /// numbered row-major; horizontal edges come before vertical ones.
    ///
    /// # Errors
    /// Returns [`SyntheticError::ZeroNodes`] when either side is zero and
    /// [`SyntheticError::Overflow`] when the node count does not fit.
    pub fn grid(width: usize, height: usize, seed: u64) -> Result<Self, SyntheticError> {
        if width == 0 || height == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        let node_count = width.checked_mul(height).ok_or(SyntheticError::Overflow)?;

        let at = move |row: usize, col: usize| row * width + col;
        let horizontal = (0..height)
            .flat_map(|row| (1..width).map(move |col| (at(row, col - 1), at(row, col))));
        let vertical = (1..height)
            .flat_map(|row| (0..width).map(move |col| (at(row - 1, col), at(row, col))));
        let edges: Vec<(usize, usize)> = horizontal.chain(vertical).collect();

        let mut rng = SmallRng::seed_from_u64(seed);
        let weights = random_weights(&mut rng, edges.len());
        Ok(Self {
            node_count,
            edges,
            weights,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge list, in edge-id order.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// One weight per edge.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

fn random_weights(rng: &mut SmallRng, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(0.0_f64..1.0_f64)).collect()
}
