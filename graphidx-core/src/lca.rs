//! Batched lowest common ancestors (Tarjan's offline algorithm).
//!
//! All queries are bucketed by node up front. One depth-first walk then
//! answers each query when the second of its two nodes finishes: at that
//! moment the union-find set containing the first node has been merged up
//! to the deepest still-open ancestor, which is the answer. Runs in
//! `O(n + q α(n))` for `q` queries.

use tracing::instrument;

use crate::error::{GraphError, Result, check_node};
use crate::tree::{ChildrenIndex, DfsEvent, DfsStack, walk};
use crate::union_find::UnionFind;

const UNSET: usize = usize::MAX;

/// Queries grouped by node: `(other, query)` pairs in CSR layout.
struct QueryBuckets {
    offsets: Vec<usize>,
    entries: Vec<(usize, usize)>,
}

impl QueryBuckets {
    fn build(node_count: usize, pairs: &[(usize, usize)]) -> Result<Self> {
        let mut offsets = vec![0; node_count + 1];
        for &(u, v) in pairs {
            check_node(u, node_count)?;
            check_node(v, node_count)?;
            offsets[u + 1] += 1;
            if u != v {
                offsets[v + 1] += 1;
            }
        }
        for node in 0..node_count {
            offsets[node + 1] += offsets[node];
        }
        let mut entries = vec![(UNSET, UNSET); offsets[node_count]];
        let mut cursor = offsets.clone();
        for (query, &(u, v)) in pairs.iter().enumerate() {
            entries[cursor[u]] = (v, query);
            cursor[u] += 1;
            if u != v {
                entries[cursor[v]] = (u, query);
                cursor[v] += 1;
            }
        }
        Ok(Self { offsets, entries })
    }

    fn of(&self, node: usize) -> &[(usize, usize)] {
        &self.entries[self.offsets[node]..self.offsets[node + 1]]
    }
}

/// Lowest common ancestor of every pair in `pairs`, in input order.
///
/// `tree` must be the [`ChildrenIndex`] of `parent`. A node is its own
/// ancestor, so the answer for `(u, u)` is `u` and the answer for a node
/// and one of its descendants is the node itself.
///
/// # Errors
/// Returns [`GraphError::SizeMismatch`] when `parent` and `tree` differ in
/// length, [`GraphError::InvalidRoot`] when the root of `tree` is not
/// self-parented in `parent`, [`GraphError::InvalidParent`] for a parent
/// entry outside the tree or one that disagrees with `tree`,
/// [`GraphError::NodeOutOfRange`] for a queried node outside the tree
/// and [`GraphError::DetachedNode`] for a queried node the root cannot
/// reach.
///
/// # Examples
/// ```
/// use graphidx_core::{ChildrenIndex, lowest_common_ancestors};
///
/// let parent = [0, 0, 1, 1];
/// let tree = ChildrenIndex::build(&parent)?;
/// let answers = lowest_common_ancestors(&tree, &parent, &[(2, 3), (0, 3), (2, 2)])?;
/// assert_eq!(answers, vec![1, 0, 2]);
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
#[instrument(
    name = "lca.batch",
    err,
    skip(tree, parent, pairs),
    fields(nodes = tree.len(), queries = pairs.len()),
)]
pub fn lowest_common_ancestors(
    tree: &ChildrenIndex,
    parent: &[usize],
    pairs: &[(usize, usize)],
) -> Result<Vec<usize>> {
    let n = tree.len();
    if parent.len() != n {
        return Err(GraphError::SizeMismatch {
            expected: n,
            actual: parent.len(),
        });
    }
    if let Some((node, &p)) = parent.iter().enumerate().find(|&(_, &p)| p >= n) {
        return Err(GraphError::InvalidParent {
            node,
            parent: p,
            node_count: n,
        });
    }
    let root = tree.root();
    check_agrees(tree, parent, root)?;
    let buckets = QueryBuckets::build(n, pairs)?;

    let mut sets = UnionFind::new(n);
    let mut ancestor: Vec<usize> = (0..n).collect();
    let mut finished = vec![false; n];
    let mut answers = vec![UNSET; pairs.len()];
    walk(tree, &mut DfsStack::with_capacity(n), |event| {
        let DfsEvent::Exit(node) = event else {
            return;
        };
        finished[node] = true;
        for &(other, query) in buckets.of(node) {
            if finished[other] {
                answers[query] = ancestor[sets.find_root(other)];
            }
        }
        if node != root {
            let up = parent[node];
            sets.union_nodes(up, node);
            ancestor[sets.find_root(up)] = up;
        }
    });

    if let Some(query) = answers.iter().position(|&a| a == UNSET) {
        let (u, v) = pairs[query];
        let node = if finished[u] { v } else { u };
        return Err(GraphError::DetachedNode { node });
    }
    Ok(answers)
}

/// Checks that `tree` indexes exactly `parent`: the root points at itself
/// and every listed child points at the node it is listed under.
fn check_agrees(tree: &ChildrenIndex, parent: &[usize], root: usize) -> Result<()> {
    if parent[root] != root {
        return Err(GraphError::InvalidRoot { root });
    }
    for node in 0..parent.len() {
        for &child in tree.children_of(node) {
            if parent[child] != node {
                return Err(GraphError::InvalidParent {
                    node: child,
                    parent: parent[child],
                    node_count: parent.len(),
                });
            }
        }
    }
    Ok(())
}

/// Like [`lowest_common_ancestors`], building the [`ChildrenIndex`] from
/// `parent` first.
///
/// # Errors
/// The errors of [`ChildrenIndex::build`] and
/// [`lowest_common_ancestors`].
pub fn lowest_common_ancestors_of(
    parent: &[usize],
    pairs: &[(usize, usize)],
) -> Result<Vec<usize>> {
    let tree = ChildrenIndex::build(parent)?;
    lowest_common_ancestors(&tree, parent, pairs)
}
