//! Minimum spanning trees and forests.
//!
//! Two minimum-weight algorithms are provided: [`kruskal_mst`] works on an
//! edge stream and reports tree membership per edge id, while
//! [`prim_mst_edges`] grows the tree over a [`crate::NeighborIndex`] and also
//! yields a parent vector. [`random_spanning_tree`] runs the Kruskal loop
//! over a seeded shuffle instead of the weight order.
//!
//! Disconnected inputs are not an error: every algorithm returns a spanning
//! forest with `n - c` edges for `c` connected components.
//! [`SpanningTreeSolver`] wraps the strategies behind one configurable entry
//! point.

mod builder;
mod kruskal;
mod orient;
mod prim;
#[cfg(test)]
mod property;

pub use self::builder::{SpanningStrategy, SpanningTreeBuilder, SpanningTreeSolver};
#[cfg(feature = "random")]
pub use self::kruskal::random_spanning_tree;
pub use self::kruskal::kruskal_mst;
pub use self::orient::parent_from_membership;
pub use self::prim::prim_mst_edges;

/// Edge membership of a spanning forest over an edge stream.
///
/// `in_tree()[e]` is `true` when edge id `e` belongs to the forest; the
/// vector has one entry per slot of the input stream, excluded slots
/// included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningForest {
    in_tree: Vec<bool>,
    edge_count: usize,
    component_count: usize,
}

impl SpanningForest {
    /// Per-edge membership flags.
    #[must_use]
    #[rustfmt::skip]
    pub fn in_tree(&self) -> &[bool] { &self.in_tree }

    /// Number of selected edges, `n - component_count()`.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest connects every node.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count <= 1
    }

    /// Ids of the selected edges in increasing order.
    pub fn tree_edges(&self) -> impl Iterator<Item = usize> + '_ {
        tree_edges(&self.in_tree)
    }

    /// Consumes the forest, returning the membership flags.
    #[must_use]
    pub fn into_membership(self) -> Vec<bool> {
        self.in_tree
    }
}

/// A spanning forest together with a parent vector orienting it.
///
/// Every component has one self-parented node: the configured root for its
/// component and the start node of every other one. A forest with several
/// components therefore does not form a single tree; check
/// [`SpanningTree::is_tree`] before building a [`crate::ChildrenIndex`] from
/// [`SpanningTree::parent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpanningTree {
    parent: Vec<usize>,
    forest: SpanningForest,
}

impl SpanningTree {
    fn from_parts(parent: Vec<usize>, forest: SpanningForest) -> Self {
        Self { parent, forest }
    }

    /// Parent of every node; component roots point at themselves.
    #[must_use]
    #[rustfmt::skip]
    pub fn parent(&self) -> &[usize] { &self.parent }

    /// Per-edge membership flags.
    #[must_use]
    #[rustfmt::skip]
    pub fn in_tree(&self) -> &[bool] { self.forest.in_tree() }

    /// Number of selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.forest.edge_count() }

    /// Number of connected components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.forest.component_count() }

    /// Returns `true` when a single tree spans every node.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.forest.is_tree()
    }

    /// Ids of the selected edges in increasing order.
    pub fn tree_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.forest.tree_edges()
    }

    /// The edge membership without the orientation.
    #[must_use]
    #[rustfmt::skip]
    pub fn forest(&self) -> &SpanningForest { &self.forest }

    /// Splits the tree into its parent vector and membership flags.
    #[must_use]
    pub fn into_parts(self) -> (Vec<usize>, Vec<bool>) {
        (self.parent, self.forest.into_membership())
    }
}

fn tree_edges(in_tree: &[bool]) -> impl Iterator<Item = usize> + '_ {
    in_tree
        .iter()
        .enumerate()
        .filter_map(|(edge, &selected)| selected.then_some(edge))
}
