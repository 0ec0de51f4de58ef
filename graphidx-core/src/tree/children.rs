use std::ops::Index;

use tracing::instrument;

use super::find_root;
use crate::error::{GraphError, Result, check_node};

/// Children lists of a rooted tree, stored contiguously.
///
/// `child[0]` holds the root; the children of node `i` occupy
/// `child[idx[i]..idx[i + 1]]` in increasing node order. The index can be
/// recomputed in place with [`ChildrenIndex::reset`] for another tree of the
/// same size.
///
/// A parent vector may still contain a cycle that avoids the root. Such
/// nodes get children lists like any other but are never reached from the
/// root; traversals skip them.
///
/// # Examples
/// ```
/// use graphidx_core::ChildrenIndex;
///
/// let tree = ChildrenIndex::build(&[0, 0, 1, 1])?;
/// assert_eq!(tree.root(), 0);
/// assert_eq!(&tree[0], &[1]);
/// assert_eq!(&tree[1], &[2, 3]);
/// assert!(tree[3].is_empty());
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildrenIndex {
    idx: Vec<usize>,
    child: Vec<usize>,
}

impl ChildrenIndex {
    /// Builds the index rooted at [`find_root`]`(parent)`.
    ///
    /// # Errors
    /// Returns [`GraphError::NoRoot`] when no node is its own parent, plus the
    /// errors of [`Self::build_with_root`].
    pub fn build(parent: &[usize]) -> Result<Self> {
        let root = find_root(parent).ok_or(GraphError::NoRoot { len: parent.len() })?;
        Self::build_with_root(parent, root)
    }

    /// Builds the index for `parent`, rooted at `root`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for a root outside the tree,
    /// [`GraphError::InvalidRoot`] when `parent[root] != root`,
    /// [`GraphError::InvalidParent`] for a parent entry outside the tree and
    /// [`GraphError::MultipleRoots`] when another node is its own parent.
    pub fn build_with_root(parent: &[usize], root: usize) -> Result<Self> {
        let mut index = Self {
            idx: vec![0; parent.len() + 1],
            child: vec![usize::MAX; parent.len()],
        };
        index.fill(parent, root)?;
        Ok(index)
    }

    /// Recomputes the index in place for a new tree of the same size.
    ///
    /// # Errors
    /// Returns [`GraphError::SizeMismatch`] when `parent.len() != self.len()`
    /// and otherwise the errors of [`Self::build`]. On error the index keeps
    /// describing the previous tree.
    pub fn reset(&mut self, parent: &[usize]) -> Result<()> {
        self.check_len(parent)?;
        let root = find_root(parent).ok_or(GraphError::NoRoot { len: parent.len() })?;
        self.fill(parent, root)
    }

    /// Like [`Self::reset`] with an explicit `root`.
    ///
    /// # Errors
    /// See [`Self::reset`] and [`Self::build_with_root`].
    pub fn reset_with_root(&mut self, parent: &[usize], root: usize) -> Result<()> {
        self.check_len(parent)?;
        self.fill(parent, root)
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> usize {
        self.child[0]
    }

    /// Number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.child.len() }

    /// `false` for every index [`ChildrenIndex::build`] returns, since a
    /// built tree holds at least its root.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.child.is_empty() }

    /// Children of `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for unknown nodes.
    pub fn children(&self, node: usize) -> Result<&[usize]> {
        check_node(node, self.len())?;
        Ok(self.children_of(node))
    }

    pub(crate) fn children_of(&self, node: usize) -> &[usize] {
        &self.child[self.idx[node]..self.idx[node + 1]]
    }

    fn check_len(&self, parent: &[usize]) -> Result<()> {
        if parent.len() != self.len() {
            return Err(GraphError::SizeMismatch {
                expected: self.len(),
                actual: parent.len(),
            });
        }
        Ok(())
    }

    #[instrument(level = "trace", name = "tree.children", skip(self, parent), fields(nodes = parent.len()), err)]
    fn fill(&mut self, parent: &[usize], root: usize) -> Result<()> {
        let n = parent.len();
        if n == 0 {
            return Err(GraphError::NoRoot { len: 0 });
        }
        check_node(root, n)?;
        if parent[root] != root {
            return Err(GraphError::InvalidRoot { root });
        }
        for (node, &p) in parent.iter().enumerate() {
            if p >= n {
                return Err(GraphError::InvalidParent {
                    node,
                    parent: p,
                    node_count: n,
                });
            }
            if p == node && node != root {
                return Err(GraphError::MultipleRoots { root, other: node });
            }
        }

        self.idx.fill(0);
        for (node, &p) in parent.iter().enumerate() {
            if node != root {
                self.idx[p] += 1;
            }
        }

        // Shift the prefix sums by one slot: afterwards `idx[i + 1]` is where
        // the children of `i` start, and advancing it while placing them
        // leaves it at their end.
        let mut start = 1;
        let mut previous_degree = 0;
        for slot in &mut self.idx {
            let degree = *slot;
            *slot = start;
            start += previous_degree;
            previous_degree = degree;
        }

        self.child[0] = root;
        for (node, &p) in parent.iter().enumerate() {
            if node == root {
                continue;
            }
            self.child[self.idx[p + 1]] = node;
            self.idx[p + 1] += 1;
        }
        debug_assert_eq!(self.idx[n], n);
        Ok(())
    }
}

impl Index<usize> for ChildrenIndex {
    type Output = [usize];

    /// Children of node `i`.
    ///
    /// # Panics
    /// Panics when `i >= self.len()`; use [`ChildrenIndex::children`] for a
    /// checked lookup.
    fn index(&self, i: usize) -> &Self::Output {
        assert!(i < self.len(), "node {i} out of range");
        self.children_of(i)
    }
}
