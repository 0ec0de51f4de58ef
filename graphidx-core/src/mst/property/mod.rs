//! Property-based tests for the spanning-tree algorithms.
//!
//! Checks Kruskal and Prim against a sequential label-propagation oracle
//! and validates the structural invariants of their forests (acyclicity,
//! `n - c` edges, no self-loops, parent vectors that agree with the
//! selected edges) across graph topologies with varied weight
//! distributions.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
