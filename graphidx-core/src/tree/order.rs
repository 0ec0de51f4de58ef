//! Node orders and depth information derived from a rooted tree.

use std::collections::VecDeque;

use super::dfs::{DfsEvent, DfsStack, TreeInput, walk};
use crate::error::{GraphError, Result};

/// Nodes in depth-first discovery order (parents before children).
///
/// # Errors
/// Fails only for parent vectors that do not form a valid tree.
pub fn pre_order<'a>(tree: impl Into<TreeInput<'a>>) -> Result<Vec<usize>> {
    let index = tree.into().index()?;
    let mut order = Vec::with_capacity(index.len());
    walk(&index, &mut DfsStack::with_capacity(index.len()), |event| {
        if let DfsEvent::Enter(node) = event {
            order.push(node);
        }
    });
    Ok(order)
}

/// Nodes in depth-first finish order: every node follows all its
/// descendants, and the root comes last.
///
/// # Errors
/// Fails only for parent vectors that do not form a valid tree.
///
/// # Examples
/// ```
/// use graphidx_core::post_order;
///
/// assert_eq!(post_order(&[0_usize, 0, 1, 1])?, vec![2, 3, 1, 0]);
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
pub fn post_order<'a>(tree: impl Into<TreeInput<'a>>) -> Result<Vec<usize>> {
    let index = tree.into().index()?;
    let mut order = Vec::with_capacity(index.len());
    walk(&index, &mut DfsStack::with_capacity(index.len()), |event| {
        if let DfsEvent::Exit(node) = event {
            order.push(node);
        }
    });
    Ok(order)
}

/// Nodes in breadth-first order, starting at the root.
///
/// # Errors
/// Fails only for parent vectors that do not form a valid tree.
pub fn bfs_order<'a>(tree: impl Into<TreeInput<'a>>) -> Result<Vec<usize>> {
    Ok(breadth_first(tree)?.0)
}

/// Level boundaries of the breadth-first order.
///
/// Entry `d` is the position in [`bfs_order`] where depth `d` starts; the
/// last entry is the number of reachable nodes. Depth `d` therefore covers
/// `bfs[levels[d]..levels[d + 1]]`.
///
/// # Errors
/// Fails only for parent vectors that do not form a valid tree.
///
/// # Examples
/// ```
/// use graphidx_core::{bfs_order, levels};
///
/// let parent = [0_usize, 0, 0, 1, 2];
/// assert_eq!(bfs_order(&parent)?, vec![0, 1, 2, 3, 4]);
/// assert_eq!(levels(&parent)?, vec![0, 1, 3, 5]);
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
pub fn levels<'a>(tree: impl Into<TreeInput<'a>>) -> Result<Vec<usize>> {
    Ok(breadth_first(tree)?.1)
}

/// Distance of every node from the root.
///
/// # Errors
/// Returns [`GraphError::DetachedNode`] for the lowest node the root cannot
/// reach, besides the errors of building the tree.
pub fn depths<'a>(tree: impl Into<TreeInput<'a>>) -> Result<Vec<usize>> {
    let index = tree.into().index()?;
    let mut depth = vec![usize::MAX; index.len()];
    let mut stack = vec![index.root()];
    depth[index.root()] = 0;
    while let Some(node) = stack.pop() {
        let below = depth[node] + 1;
        for &child in index.children_of(node) {
            depth[child] = below;
            stack.push(child);
        }
    }
    if let Some(node) = depth.iter().position(|&d| d == usize::MAX) {
        return Err(GraphError::DetachedNode { node });
    }
    Ok(depth)
}

fn breadth_first<'a>(tree: impl Into<TreeInput<'a>>) -> Result<(Vec<usize>, Vec<usize>)> {
    let index = tree.into().index()?;
    let mut order = Vec::with_capacity(index.len());
    let mut boundaries = vec![0];
    let mut queue = VecDeque::with_capacity(index.len());
    queue.push_back((index.root(), 0_usize));
    let mut current_depth = 0;
    while let Some((node, depth)) = queue.pop_front() {
        if depth > current_depth {
            boundaries.push(order.len());
            current_depth = depth;
        }
        order.push(node);
        queue.extend(index.children_of(node).iter().map(|&c| (c, depth + 1)));
    }
    boundaries.push(order.len());
    Ok((order, boundaries))
}
