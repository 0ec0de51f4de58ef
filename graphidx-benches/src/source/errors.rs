//! Error types for synthetic benchmark input generation.

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested edge or node total overflowed `usize`.
    #[error("requested size overflows usize")]
    Overflow,
    /// The core library rejected a generated structure.
    #[error(transparent)]
    Graph(#[from] graphidx_core::GraphError),
}
