//! Sequential Kruskal oracle for spanning-tree property verification.
//!
//! Deliberately naive: components are tracked with a flat label array that
//! is relabelled on every merge, so the oracle shares no code with
//! [`crate::UnionFind`].

/// Result of the sequential oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest by sorting the edges and merging
/// labels.
pub(super) fn sequential_kruskal(
    node_count: usize,
    edges: &[(usize, usize)],
    weights: &[f64],
) -> SequentialMstResult {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| weights[a].total_cmp(&weights[b]));

    let mut label: Vec<usize> = (0..node_count).collect();
    let mut total_weight = 0.0;
    let mut edge_count = 0;
    for edge in order {
        let (u, v) = edges[edge];
        let (keep, gone) = (label[u], label[v]);
        if keep == gone {
            continue;
        }
        for entry in &mut label {
            if *entry == gone {
                *entry = keep;
            }
        }
        total_weight += weights[edge];
        edge_count += 1;
    }

    SequentialMstResult {
        total_weight,
        edge_count,
        component_count: node_count - edge_count,
    }
}
