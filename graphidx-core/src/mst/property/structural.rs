//! Property 2: structural invariants of the produced forests.
//!
//! For the output of Kruskal and Prim, verifies:
//!
//! - the selected edges contain no cycle and no self-loop;
//! - there are exactly `n - c` of them for `c` input components;
//! - every non-root entry of the parent vector is joined to its parent by
//!   a selected edge, and there is one root per component;
//! - a connected input yields a parent vector that forms a valid tree.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{NeighborIndex, depths, kruskal_mst, parent_from_membership, prim_mst_edges};

use super::helpers::{count_input_components, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let fail = |what: &str, e: crate::GraphError| {
        TestCaseError::fail(format!("{what} failed: {e} ({})", fixture.describe()))
    };
    let index = NeighborIndex::build(fixture.node_count, &fixture.edges)
        .map_err(|e| fail("index build", e))?;
    let kruskal = kruskal_mst(fixture.node_count, &fixture.edges, &fixture.weights)
        .map_err(|e| fail("kruskal_mst", e))?;
    let prim = prim_mst_edges(&index, &fixture.weights, 0).map_err(|e| fail("prim_mst_edges", e))?;
    let oriented =
        parent_from_membership(&index, kruskal.in_tree(), 0).map_err(|e| fail("orientation", e))?;

    let components = count_input_components(fixture);
    for (name, in_tree, edge_count) in [
        ("kruskal", kruskal.in_tree(), kruskal.edge_count()),
        ("prim", prim.in_tree(), prim.edge_count()),
    ] {
        validate_membership(fixture, name, in_tree, edge_count)?;
        validate_edge_count(fixture, name, edge_count, components)?;
    }
    validate_parent(fixture, "prim", prim.parent(), prim.in_tree(), components)?;
    validate_parent(fixture, "kruskal", &oriented, kruskal.in_tree(), components)?;

    if components == 1 {
        depths(&oriented).map_err(|e| fail("depths of oriented tree", e))?;
        depths(prim.parent()).map_err(|e| fail("depths of prim tree", e))?;
    }
    Ok(())
}

/// Verifies acyclicity, absence of self-loops and the reported edge count.
fn validate_membership(
    fixture: &MstFixture,
    name: &str,
    in_tree: &[bool],
    edge_count: usize,
) -> TestCaseResult {
    if in_tree.len() != fixture.edges.len() {
        return Err(TestCaseError::fail(format!(
            "{name}: {} membership flags for {} edges",
            in_tree.len(),
            fixture.edges.len(),
        )));
    }
    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    let mut selected = 0;
    for (edge, &(u, v)) in fixture.edges.iter().enumerate() {
        if !in_tree[edge] {
            continue;
        }
        selected += 1;
        if u == v {
            return Err(TestCaseError::fail(format!("{name}: self-loop {edge} selected")));
        }
        let ru = find_root(&mut parent, u);
        let rv = find_root(&mut parent, v);
        if ru == rv {
            return Err(TestCaseError::fail(format!(
                "{name}: edge {edge} ({u}, {v}) closes a cycle ({})",
                fixture.describe(),
            )));
        }
        parent[rv] = ru;
    }
    if selected != edge_count {
        return Err(TestCaseError::fail(format!(
            "{name}: {selected} flags set but edge_count() is {edge_count}",
        )));
    }
    Ok(())
}

/// Verifies that the forest has exactly `n - c` edges.
fn validate_edge_count(
    fixture: &MstFixture,
    name: &str,
    actual: usize,
    components: usize,
) -> TestCaseResult {
    let expected = fixture.node_count - components;
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "{name}: {actual} edges, expected n - c = {expected} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Verifies that the parent vector follows the selected edges.
fn validate_parent(
    fixture: &MstFixture,
    name: &str,
    parent: &[usize],
    in_tree: &[bool],
    components: usize,
) -> TestCaseResult {
    let mut roots = 0;
    for (node, &p) in parent.iter().enumerate() {
        if p == node {
            roots += 1;
            continue;
        }
        let joined = fixture.edges.iter().enumerate().any(|(edge, &(u, v))| {
            in_tree[edge] && ((u, v) == (node, p) || (u, v) == (p, node))
        });
        if !joined {
            return Err(TestCaseError::fail(format!(
                "{name}: parent {p} of {node} is not joined by a tree edge ({})",
                fixture.describe(),
            )));
        }
    }
    if roots != components {
        return Err(TestCaseError::fail(format!(
            "{name}: {roots} roots for {components} components ({})",
            fixture.describe(),
        )));
    }
    if parent.first().is_some_and(|&p| p != 0) {
        return Err(TestCaseError::fail(format!("{name}: root 0 is not self-parented")));
    }
    Ok(())
}
