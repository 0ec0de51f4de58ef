//! Union-find (disjoint set union) over the nodes `0..n`.
//!
//! Used by Kruskal's algorithm to reject cycle-closing edges and by the
//! offline lowest-common-ancestor pass to collapse finished subtrees. `find`
//! compresses the traversed path and `union` links by rank, which keeps the
//! amortised cost of both at the inverse Ackermann bound.

use crate::error::{Result, check_node};

/// Disjoint sets over `0..n` with path compression and union by rank.
///
/// # Examples
/// ```
/// use graphidx_core::UnionFind;
///
/// let mut sets = UnionFind::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert_eq!(sets.find(0)?, sets.find(1)?);
/// assert_ne!(sets.find(0)?, sets.find(2)?);
/// assert_eq!(sets.component_count(), 3);
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of elements tracked by the structure.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Number of disjoint sets currently represented.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Separates every element into its own set again, keeping the storage.
    pub fn reset(&mut self) {
        for (node, parent) in self.parent.iter_mut().enumerate() {
            *parent = node;
        }
        self.rank.fill(0);
        self.components = self.parent.len();
    }

    /// Returns the representative of the set containing `node`.
    ///
    /// Every node visited on the way is repointed directly to the
    /// representative.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfRange`] when `node >= len()`.
    pub fn find(&mut self, node: usize) -> Result<usize> {
        check_node(node, self.len())?;
        Ok(self.find_root(node))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` without changing anything when both already share a
    /// set. The representative with the higher rank survives; on equal ranks
    /// the representative of `left` does.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::NodeOutOfRange`] when either node is out of
    /// range.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        check_node(left, self.len())?;
        check_node(right, self.len())?;
        Ok(self.union_nodes(left, right))
    }

    pub(crate) fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    pub(crate) fn union_nodes(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find_root(left);
        let mut right = self.find_root(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components -= 1;
        true
    }
}
