//! Synthetic benchmark inputs.
//!
//! Every generator is driven by a seeded [`rand::rngs::SmallRng`] so that
//! repeated benchmark runs measure identical inputs.

mod errors;
mod graph;
mod tree;

pub use errors::SyntheticError;
pub use graph::{SyntheticGraph, SyntheticGraphConfig};
pub use tree::{SyntheticTree, SyntheticTreeConfig, TreeShape};
