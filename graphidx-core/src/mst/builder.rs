//! Configuration surface for spanning-tree construction.
//!
//! [`SpanningTreeBuilder`] collects the strategy and its parameters and
//! produces a [`SpanningTreeSolver`], which turns a [`NeighborIndex`] and
//! its edge weights into an oriented [`SpanningTree`].

use tracing::instrument;

use super::kruskal::{DEFAULT_SEED, kruskal_with};
use super::{SpanningTree, orient::parent_from_membership, prim::prim_mst_edges};
use crate::error::{Result, check_node};
use crate::neighbors::NeighborIndex;
use crate::weights::Weights;

/// Algorithm used by [`SpanningTreeSolver::solve`].
///
/// # Examples
/// ```
/// use graphidx_core::SpanningStrategy;
///
/// let strategy = SpanningStrategy::default();
/// assert_eq!(strategy, SpanningStrategy::Kruskal);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SpanningStrategy {
    /// Minimum spanning forest by sorting the edges.
    #[default]
    Kruskal,
    /// Minimum spanning forest grown from the configured root.
    Prim,
    /// Spanning forest from a seeded random edge order, ignoring weights.
    /// Needs the `random` feature.
    Random,
}

/// Configures and constructs [`SpanningTreeSolver`] instances.
///
/// # Examples
/// ```
/// use graphidx_core::{SpanningStrategy, SpanningTreeBuilder};
///
/// let solver = SpanningTreeBuilder::new()
///     .with_strategy(SpanningStrategy::Prim)
///     .with_root(3)
///     .build();
/// assert_eq!(solver.strategy(), SpanningStrategy::Prim);
/// assert_eq!(solver.root(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SpanningTreeBuilder {
    strategy: SpanningStrategy,
    root: usize,
    seed: u64,
    early_exit: bool,
}

impl Default for SpanningTreeBuilder {
    fn default() -> Self {
        Self {
            strategy: SpanningStrategy::Kruskal,
            root: 0,
            seed: DEFAULT_SEED,
            early_exit: true,
        }
    }
}

impl SpanningTreeBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use graphidx_core::{SpanningStrategy, SpanningTreeBuilder};
    ///
    /// let builder = SpanningTreeBuilder::new();
    /// assert_eq!(builder.strategy(), SpanningStrategy::Kruskal);
    /// assert_eq!(builder.root(), 0);
    /// assert_eq!(builder.seed(), 2018);
    /// assert!(builder.early_exit());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the algorithm.
    #[must_use]
    pub fn with_strategy(mut self, strategy: SpanningStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub fn strategy(&self) -> SpanningStrategy {
        self.strategy
    }

    /// Sets the node the resulting parent vector is rooted at.
    #[must_use]
    pub fn with_root(mut self, root: usize) -> Self {
        self.root = root;
        self
    }

    /// Returns the configured root.
    #[must_use]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Sets the seed for [`SpanningStrategy::Random`].
    ///
    /// # Examples
    /// ```
    /// use graphidx_core::SpanningTreeBuilder;
    ///
    /// assert_eq!(SpanningTreeBuilder::new().with_seed(42).seed(), 42);
    /// ```
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Controls whether the Kruskal loop stops once `n - 1` edges are
    /// accepted. Prim always stops when its queue drains.
    #[must_use]
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    /// Returns whether early exit is enabled.
    #[must_use]
    pub fn early_exit(&self) -> bool {
        self.early_exit
    }

    /// Constructs the solver.
    #[must_use]
    pub fn build(self) -> SpanningTreeSolver {
        SpanningTreeSolver {
            strategy: self.strategy,
            root: self.root,
            seed: self.seed,
            early_exit: self.early_exit,
        }
    }
}

/// Spanning-tree construction with a fixed configuration.
///
/// # Examples
/// ```
/// use graphidx_core::{NeighborIndex, SpanningStrategy, SpanningTreeBuilder};
///
/// let index = NeighborIndex::build(4, &[(0, 1), (1, 2), (2, 3), (0, 3)])?;
/// let weights = [1.0, 5.0, 1.0, 2.0];
/// for strategy in [SpanningStrategy::Kruskal, SpanningStrategy::Prim] {
///     let tree = SpanningTreeBuilder::new()
///         .with_strategy(strategy)
///         .build()
///         .solve(&index, &weights)?;
///     assert_eq!(tree.in_tree(), &[true, false, true, true]);
///     assert_eq!(tree.parent(), &[0, 0, 3, 0]);
/// }
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SpanningTreeSolver {
    strategy: SpanningStrategy,
    root: usize,
    seed: u64,
    early_exit: bool,
}

impl SpanningTreeSolver {
    /// Returns the configured algorithm.
    #[must_use]
    #[rustfmt::skip]
    pub fn strategy(&self) -> SpanningStrategy { self.strategy }

    /// Returns the configured root.
    #[must_use]
    #[rustfmt::skip]
    pub fn root(&self) -> usize { self.root }

    /// Computes a spanning forest of the graph behind `index` and orients
    /// it towards the configured root.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfRange`] when the root is not a
    /// node of `index`, [`crate::GraphError::StrategyUnavailable`] for
    /// [`SpanningStrategy::Random`] without the `random` feature, and the
    /// weight errors of [`super::kruskal_mst`] and [`prim_mst_edges`].
    #[instrument(
        name = "mst.solve",
        err,
        skip(self, index, weights),
        fields(strategy = ?self.strategy, root = self.root, nodes = index.node_count()),
    )]
    pub fn solve<X, W>(&self, index: &NeighborIndex, weights: &X) -> Result<SpanningTree>
    where
        X: Weights<W> + ?Sized,
        W: Copy + PartialOrd,
    {
        check_node(self.root, index.node_count())?;
        let forest = match self.strategy {
            SpanningStrategy::Prim => return prim_mst_edges(index, weights, self.root),
            SpanningStrategy::Kruskal => {
                kruskal_with(index.node_count(), index, weights, self.early_exit)?
            }
            #[cfg(feature = "random")]
            SpanningStrategy::Random => {
                super::kruskal::random_with(index.node_count(), index, self.seed, self.early_exit)?
            }
            #[cfg(not(feature = "random"))]
            SpanningStrategy::Random => {
                return Err(crate::GraphError::StrategyUnavailable {
                    strategy: self.strategy,
                });
            }
        };
        let parent = parent_from_membership(index, forest.in_tree(), self.root)?;
        Ok(SpanningTree::from_parts(parent, forest))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::GraphError;

    fn square() -> NeighborIndex {
        NeighborIndex::build(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).expect("valid graph")
    }

    #[rstest]
    fn defaults_match_documented_values() {
        let solver = SpanningTreeBuilder::default().build();
        assert_eq!(solver.strategy(), SpanningStrategy::Kruskal);
        assert_eq!(solver.root(), 0);
        assert_eq!(solver.seed, 2018);
        assert!(solver.early_exit);
    }

    #[rstest]
    #[case::kruskal(SpanningStrategy::Kruskal)]
    #[case::prim(SpanningStrategy::Prim)]
    fn minimum_strategies_agree_on_square(#[case] strategy: SpanningStrategy) {
        let tree = SpanningTreeBuilder::new()
            .with_strategy(strategy)
            .with_root(2)
            .build()
            .solve(&square(), &[4, 1, 2, 3])
            .expect("valid graph");
        assert_eq!(tree.in_tree(), &[false, true, true, true]);
        assert_eq!(tree.parent(), &[3, 2, 2, 2]);
        assert!(tree.is_tree());
    }

    #[rstest]
    fn rejects_root_outside_graph() {
        let solver = SpanningTreeBuilder::new().with_root(4).build();
        assert_eq!(
            solver.solve(&square(), &[1, 1, 1, 1]),
            Err(GraphError::NodeOutOfRange {
                node: 4,
                node_count: 4
            })
        );
    }

    #[cfg(feature = "random")]
    #[rstest]
    fn random_strategy_is_reproducible() {
        let solver = SpanningTreeBuilder::new()
            .with_strategy(SpanningStrategy::Random)
            .with_seed(11)
            .build();
        let first = solver.solve(&square(), &[0, 0, 0, 0]).expect("valid graph");
        let second = solver.solve(&square(), &[0, 0, 0, 0]).expect("valid graph");
        assert_eq!(first, second);
        assert_eq!(first.edge_count(), 3);
        assert_eq!(first.parent()[0], 0);
    }
}
