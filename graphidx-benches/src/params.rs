//! Benchmark parameter types.
//!
//! Each type renders as the Criterion parameter label of one benchmark
//! input.

use std::fmt;

/// Parameters for an index-construction or spanning-tree benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Number of edge slots in the graph.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.node_count, self.edge_count)
    }
}

/// Parameters for a batched lowest-common-ancestor benchmark run.
#[derive(Clone, Debug)]
pub struct LcaBenchParams {
    /// Number of nodes in the tree.
    pub node_count: usize,
    /// Number of queried pairs.
    pub query_count: usize,
}

impl fmt::Display for LcaBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},q={}", self.node_count, self.query_count)
    }
}
