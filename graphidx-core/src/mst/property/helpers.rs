//! Shared helpers for the spanning-tree property modules.

use super::types::MstFixture;

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Number of connected components of the fixture's input graph.
pub(super) fn count_input_components(fixture: &MstFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.node_count).collect();
    let mut components = fixture.node_count;
    for &(u, v) in &fixture.edges {
        let ru = find_root(&mut parent, u);
        let rv = find_root(&mut parent, v);
        if ru != rv {
            parent[rv] = ru;
            components -= 1;
        }
    }
    components
}

/// Sum of the weights of the selected edges.
pub(super) fn selected_weight(fixture: &MstFixture, in_tree: &[bool]) -> f64 {
    in_tree
        .iter()
        .zip(&fixture.weights)
        .filter(|(selected, _)| **selected)
        .map(|(_, weight)| weight)
        .sum()
}

/// Compares two weight sums accumulated in different orders.
pub(super) fn weights_match(left: f64, right: f64) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}
