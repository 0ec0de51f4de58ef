//! Decoding of Prüfer sequences into parent vectors.

use crate::error::{Result, check_node};

const UNSET: usize = usize::MAX;

/// Parent vector of the labelled tree encoded by `prufer`.
///
/// A sequence of length `k` encodes a tree on `n = k + 2` nodes, and every
/// sequence over `0..n` is valid, so uniform random sequences give uniform
/// random labelled trees. The tree is rooted at node `n - 1`, which is
/// never removed as a leaf during decoding. Runs in `O(n)`.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfRange`] for an entry `>= n`.
///
/// # Examples
/// ```
/// use graphidx_core::prufer_to_parent;
///
/// assert_eq!(prufer_to_parent(&[3, 3, 3, 4])?, vec![3, 3, 3, 4, 5, 5]);
/// assert_eq!(prufer_to_parent(&[])?, vec![1, 1]);
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
pub fn prufer_to_parent(prufer: &[usize]) -> Result<Vec<usize>> {
    let n = prufer.len() + 2;
    let mut degree = vec![1_usize; n];
    for &node in prufer {
        check_node(node, n)?;
        degree[node] += 1;
    }

    let mut parent = vec![UNSET; n];
    // `index` only moves forward; a node below it that turns into a leaf is
    // taken at once instead of being searched for.
    let mut index = next_leaf(&degree, 0);
    let mut leaf = index;
    for &node in prufer {
        parent[leaf] = node;
        degree[node] -= 1;
        if node < index && degree[node] == 1 {
            leaf = node;
        } else {
            index = next_leaf(&degree, index + 1);
            leaf = index;
        }
    }
    let root = n - 1;
    parent[leaf] = root;
    parent[root] = root;
    Ok(parent)
}

/// Smallest node `>= from` with degree one.
fn next_leaf(degree: &[usize], from: usize) -> usize {
    let mut node = from;
    while degree[node] != 1 {
        node += 1;
    }
    node
}
