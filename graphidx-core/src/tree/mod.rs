//! Rooted trees given as parent vectors.
//!
//! A parent vector maps every node to its parent; the root is the single
//! node that is its own parent. [`ChildrenIndex`] inverts that mapping into
//! compact children lists, which the traversals in this module walk.
//! [`prufer_to_parent`] produces parent vectors from Prüfer sequences.

mod children;
mod dfs;
mod order;
mod prufer;
mod root;

pub use children::ChildrenIndex;
pub use dfs::{DfsEvent, DfsStack, TreeInput, dfs_walk, dfs_walk_with};
pub(crate) use dfs::walk;
pub use order::{bfs_order, depths, levels, post_order, pre_order};
pub use prufer::prufer_to_parent;
pub use root::find_root;
