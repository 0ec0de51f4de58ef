//! Rooted trees with query batches for traversal and ancestor benchmarks.

use std::iter;

use graphidx_core::prufer_to_parent;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::SyntheticError;

/// Shape of the generated tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TreeShape {
    /// Every node `i > 0` hangs below a uniformly chosen earlier node, which
    /// gives logarithmic expected depth.
    #[default]
    RandomRecursive,
    /// A single path `0 <- 1 <- ... <- n - 1`, the deepest possible tree.
    Path,
    /// A uniformly random labelled tree decoded from a random Prüfer
    /// sequence, rooted at `n - 1`. Expected depth grows like `sqrt(n)`.
    Prufer,
}

/// Configuration for a rooted tree and its query batch.
#[derive(Clone, Debug)]
pub struct SyntheticTreeConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Number of random node pairs to generate.
    pub query_count: usize,
    /// Tree shape.
    pub shape: TreeShape,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A parent vector plus random query pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticTree {
    parent: Vec<usize>,
    queries: Vec<(usize, usize)>,
}

impl SyntheticTree {
    /// Generates the tree and its queries.
    ///
    /// # Errors
    /// Returns [`SyntheticError::ZeroNodes`] for an empty tree and
    /// [`SyntheticError::Graph`] if decoding a Prüfer sequence fails.
    pub fn generate(config: &SyntheticTreeConfig) -> Result<Self, SyntheticError> {
        let n = config.node_count;
        if n == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let parent: Vec<usize> = match config.shape {
            TreeShape::RandomRecursive => iter::once(0)
                .chain((1..n).map(|node| rng.gen_range(0..node)))
                .collect(),
            TreeShape::Path => iter::once(0).chain(0..n - 1).collect(),
            TreeShape::Prufer if n == 1 => vec![0],
            TreeShape::Prufer => {
                let sequence: Vec<usize> = (0..n - 2).map(|_| rng.gen_range(0..n)).collect();
                prufer_to_parent(&sequence)?
            }
        };
        let queries = (0..config.query_count)
            .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
            .collect();
        Ok(Self { parent, queries })
    }

    /// The parent vector. The root is node 0, or `n - 1` for
    /// [`TreeShape::Prufer`].
    #[must_use]
    pub fn parent(&self) -> &[usize] {
        &self.parent
    }

    /// The query pairs.
    #[must_use]
    pub fn queries(&self) -> &[(usize, usize)] {
        &self.queries
    }
}
