//! Graph indexing core.
//!
//! Compact adjacency and children indexes over integer node ids, the
//! scratch structures the graph algorithms run on (union-find, a priority
//! queue with decrease-key), depth-first and breadth-first tree traversals,
//! minimum spanning trees (Kruskal and Prim) and batched lowest common
//! ancestors.
//!
//! ```
//! use graphidx_core::{NeighborIndex, SpanningStrategy, SpanningTreeBuilder, post_order};
//!
//! let index = NeighborIndex::build(4, &[(0, 1), (1, 2), (0, 2), (2, 3)])?;
//! let tree = SpanningTreeBuilder::new()
//!     .with_strategy(SpanningStrategy::Prim)
//!     .build()
//!     .solve(&index, &[1.0, 1.0, 5.0, 2.0])?;
//! assert_eq!(tree.parent(), &[0, 0, 1, 2]);
//! assert_eq!(post_order(tree.parent())?, vec![3, 2, 1, 0]);
//! # Ok::<(), graphidx_core::GraphError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edges;
mod error;
mod heap;
mod lca;
mod mst;
mod neighbors;
#[cfg(test)]
mod test_utils;
mod tree;
mod union_find;
mod weights;

#[cfg(feature = "random")]
pub use crate::mst::random_spanning_tree;
pub use crate::{
    edges::{EdgeSlot, EdgeSource, Filtered, FnEdges, HeadTail},
    error::{GraphError, GraphErrorCode, Result},
    heap::PriorityQueue,
    lca::{lowest_common_ancestors, lowest_common_ancestors_of},
    mst::{
        SpanningForest, SpanningStrategy, SpanningTree, SpanningTreeBuilder, SpanningTreeSolver,
        kruskal_mst, parent_from_membership, prim_mst_edges,
    },
    neighbors::{Neighbor, NeighborIndex},
    tree::{
        ChildrenIndex, DfsEvent, DfsStack, TreeInput, bfs_order, depths, dfs_walk, dfs_walk_with,
        find_root, levels, post_order, pre_order, prufer_to_parent,
    },
    union_find::UnionFind,
    weights::{ConstantWeights, Weights},
};
