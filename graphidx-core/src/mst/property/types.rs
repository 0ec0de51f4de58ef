//! Type definitions for spanning-tree property tests.

use test_strategy::Arbitrary;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights and topology are generated, producing inputs
/// that stress different parts of the algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight drawn from a continuous range.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    #[weight(3)]
    ManyIdentical,
    /// Random spanning path plus a few extra edges, self-loops and parallel
    /// edges.
    #[weight(2)]
    Sparse,
    /// Graph approaching a complete graph.
    #[weight(2)]
    Dense,
    /// Several components with no edges between them, plus isolated nodes.
    #[weight(2)]
    Disconnected,
}

/// Fixture for spanning-tree property tests.
///
/// `weights[e]` belongs to `edges[e]`; keeping the context together makes
/// failures easy to reproduce.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Undirected edges in edge-id order.
    pub edges: Vec<(usize, usize)>,
    /// One weight per edge.
    pub weights: Vec<f64>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, nodes={}, edges={}",
            self.distribution,
            self.node_count,
            self.edges.len()
        )
    }
}
