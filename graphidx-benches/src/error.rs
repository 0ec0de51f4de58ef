//! Benchmark setup error type.
//!
//! Lets setup functions propagate generator and graph failures with `?`
//! instead of using `.expect()`.

use graphidx_core::GraphError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Building an index or running an algorithm failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
