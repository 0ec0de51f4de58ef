//! Benchmark support crate for graphidx.
//!
//! Provides seeded synthetic graphs and trees plus the parameter types used
//! by the Criterion benchmarks for index construction, spanning trees and
//! batched lowest common ancestors.

pub mod error;
pub mod params;
pub mod source;
