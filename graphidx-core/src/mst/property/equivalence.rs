//! Property 1: equivalence with the sequential oracle.
//!
//! Kruskal and Prim must both reach the oracle's total weight, edge count
//! and component count. Tree shapes may differ when weights tie; the total
//! weight may not.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{NeighborIndex, kruskal_mst, prim_mst_edges};

use super::helpers::{selected_weight, weights_match};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let oracle = sequential_kruskal(fixture.node_count, &fixture.edges, &fixture.weights);

    let kruskal = kruskal_mst(fixture.node_count, &fixture.edges, &fixture.weights)
        .map_err(|e| TestCaseError::fail(format!("kruskal_mst failed: {e} ({})", fixture.describe())))?;
    let index = NeighborIndex::build(fixture.node_count, &fixture.edges)
        .map_err(|e| TestCaseError::fail(format!("index build failed: {e} ({})", fixture.describe())))?;
    let prim = prim_mst_edges(&index, &fixture.weights, 0)
        .map_err(|e| TestCaseError::fail(format!("prim_mst_edges failed: {e} ({})", fixture.describe())))?;

    for (name, in_tree, edge_count, component_count) in [
        ("kruskal", kruskal.in_tree(), kruskal.edge_count(), kruskal.component_count()),
        ("prim", prim.in_tree(), prim.edge_count(), prim.component_count()),
    ] {
        let weight = selected_weight(fixture, in_tree);
        if !weights_match(weight, oracle.total_weight) {
            return Err(TestCaseError::fail(format!(
                "{name}: total weight {weight}, oracle {} ({})",
                oracle.total_weight,
                fixture.describe(),
            )));
        }
        if edge_count != oracle.edge_count {
            return Err(TestCaseError::fail(format!(
                "{name}: edge count {edge_count}, oracle {} ({})",
                oracle.edge_count,
                fixture.describe(),
            )));
        }
        if component_count != oracle.component_count {
            return Err(TestCaseError::fail(format!(
                "{name}: component count {component_count}, oracle {} ({})",
                oracle.component_count,
                fixture.describe(),
            )));
        }
    }
    Ok(())
}
