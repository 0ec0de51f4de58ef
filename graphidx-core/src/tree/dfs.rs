//! Depth-first walk over a rooted tree.
//!
//! The walk is iterative. Every node reachable from the root produces an
//! [`DfsEvent::Enter`] before any of its descendants and an
//! [`DfsEvent::Exit`] after all of theirs. Children are visited in the order
//! the [`ChildrenIndex`] stores them.

use std::borrow::Cow;

use super::ChildrenIndex;
use crate::error::Result;

/// A step of the depth-first walk.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DfsEvent {
    /// The node is discovered.
    Enter(usize),
    /// The node and its whole subtree are finished.
    Exit(usize),
}

impl DfsEvent {
    /// The node the event refers to.
    #[must_use]
    pub const fn node(self) -> usize {
        match self {
            Self::Enter(node) | Self::Exit(node) => node,
        }
    }
}

/// Reusable work stack for [`dfs_walk_with`].
///
/// Keeping one around avoids reallocating the stack when many trees of
/// similar size are walked in a loop.
#[derive(Clone, Debug, Default)]
pub struct DfsStack {
    pending: Vec<DfsEvent>,
}

impl DfsStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stack able to walk `nodes` nodes without reallocating.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            pending: Vec::with_capacity(nodes.saturating_add(1)),
        }
    }
}

/// A tree accepted by the traversals: either a prebuilt [`ChildrenIndex`]
/// or a raw parent vector, from which an index is built on the fly.
#[derive(Clone, Copy, Debug)]
pub enum TreeInput<'a> {
    /// A prebuilt children index.
    Children(&'a ChildrenIndex),
    /// A parent vector; the root is located with [`super::find_root`].
    Parent(&'a [usize]),
}

impl<'a> From<&'a ChildrenIndex> for TreeInput<'a> {
    fn from(index: &'a ChildrenIndex) -> Self {
        Self::Children(index)
    }
}

impl<'a> From<&'a [usize]> for TreeInput<'a> {
    fn from(parent: &'a [usize]) -> Self {
        Self::Parent(parent)
    }
}

impl<'a> From<&'a Vec<usize>> for TreeInput<'a> {
    fn from(parent: &'a Vec<usize>) -> Self {
        Self::Parent(parent)
    }
}

impl<'a, const N: usize> From<&'a [usize; N]> for TreeInput<'a> {
    fn from(parent: &'a [usize; N]) -> Self {
        Self::Parent(parent)
    }
}

impl<'a> TreeInput<'a> {
    pub(crate) fn index(self) -> Result<Cow<'a, ChildrenIndex>> {
        match self {
            Self::Children(index) => Ok(Cow::Borrowed(index)),
            Self::Parent(parent) => ChildrenIndex::build(parent).map(Cow::Owned),
        }
    }
}

/// Walks `tree` depth-first, reporting every enter and exit to `visit`.
///
/// # Errors
/// Only fails when `tree` is a parent vector that does not form a valid
/// [`ChildrenIndex`].
///
/// # Examples
/// ```
/// use graphidx_core::{DfsEvent, dfs_walk};
///
/// let mut events = Vec::new();
/// dfs_walk(&[0_usize, 0, 1, 1], |event| events.push(event))?;
/// assert_eq!(
///     events,
///     vec![
///         DfsEvent::Enter(0),
///         DfsEvent::Enter(1),
///         DfsEvent::Enter(2),
///         DfsEvent::Exit(2),
///         DfsEvent::Enter(3),
///         DfsEvent::Exit(3),
///         DfsEvent::Exit(1),
///         DfsEvent::Exit(0),
///     ]
/// );
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
pub fn dfs_walk<'a, T, F>(tree: T, visit: F) -> Result<()>
where
    T: Into<TreeInput<'a>>,
    F: FnMut(DfsEvent),
{
    dfs_walk_with(tree, &mut DfsStack::new(), visit)
}

/// Like [`dfs_walk`], reusing the caller's `stack`.
///
/// # Errors
/// See [`dfs_walk`].
pub fn dfs_walk_with<'a, T, F>(tree: T, stack: &mut DfsStack, visit: F) -> Result<()>
where
    T: Into<TreeInput<'a>>,
    F: FnMut(DfsEvent),
{
    let index = tree.into().index()?;
    walk(&index, stack, visit);
    Ok(())
}

pub(crate) fn walk<F: FnMut(DfsEvent)>(tree: &ChildrenIndex, stack: &mut DfsStack, mut visit: F) {
    let pending = &mut stack.pending;
    pending.clear();
    pending.push(DfsEvent::Enter(tree.root()));
    while let Some(event) = pending.pop() {
        visit(event);
        if let DfsEvent::Enter(node) = event {
            pending.push(DfsEvent::Exit(node));
            pending.extend(tree.children_of(node).iter().rev().map(|&c| DfsEvent::Enter(c)));
        }
    }
}
