/// Find the root node of a tree given its `parent` vector.
///
/// This is the first `i` such that `parent[i] == i`. Should several nodes be
/// their own parent, the lowest index wins; [`crate::ChildrenIndex::build`]
/// rejects such vectors.
///
/// ```
/// use graphidx_core::find_root;
/// assert_eq!(find_root(&[1, 1, 0]), Some(1));
/// assert_eq!(find_root(&[1, 0, 0]), None);
/// ```
#[must_use]
pub fn find_root(parent: &[usize]) -> Option<usize> {
    parent
        .iter()
        .enumerate()
        .find_map(|(node, &p)| (node == p).then_some(node))
}
