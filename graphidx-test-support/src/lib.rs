//! Shared test utilities used across the graphidx crates.

pub mod ci;
pub mod tracing;
