use crate::error::{GraphError, Result, check_node};
use crate::neighbors::NeighborIndex;

const UNSET: usize = usize::MAX;

/// Orients a spanning forest, given as edge membership, into a parent
/// vector.
///
/// The component containing `root` is rooted there; every other component
/// is rooted at its lowest node. Edges whose flag is `false` are ignored.
/// If the selected edges contain a cycle, the extra edge is simply never
/// followed.
///
/// # Errors
/// Returns [`GraphError::SizeMismatch`] when `in_tree` does not have one
/// flag per edge slot of `index` and [`GraphError::NodeOutOfRange`] for an
/// unknown `root`.
///
/// # Examples
/// ```
/// use graphidx_core::{NeighborIndex, parent_from_membership};
///
/// let index = NeighborIndex::build(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
/// let parent = parent_from_membership(&index, &[true, true, true, false], 2)?;
/// assert_eq!(parent, vec![1, 2, 2, 2]);
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
pub fn parent_from_membership(
    index: &NeighborIndex,
    in_tree: &[bool],
    root: usize,
) -> Result<Vec<usize>> {
    if in_tree.len() != index.edge_count() {
        return Err(GraphError::SizeMismatch {
            expected: index.edge_count(),
            actual: in_tree.len(),
        });
    }
    let n = index.node_count();
    check_node(root, n)?;

    let mut parent = vec![UNSET; n];
    let mut stack = Vec::new();
    for start in std::iter::once(root).chain(0..n) {
        if parent[start] != UNSET {
            continue;
        }
        parent[start] = start;
        stack.push(start);
        while let Some(node) = stack.pop() {
            for neighbor in index.adjacent(node) {
                let next = neighbor.node();
                if in_tree[neighbor.edge()] && parent[next] == UNSET {
                    parent[next] = node;
                    stack.push(next);
                }
            }
        }
    }
    Ok(parent)
}
