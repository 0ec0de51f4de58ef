//! Error types for the graph indexing core.
//!
//! Defines the error enum shared by every index and algorithm in the crate,
//! its stable machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::mst::SpanningStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced by the graph indexes and algorithms.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A node id was outside `[0, node_count)`.
    #[error("node {node} is out of range for {node_count} nodes")]
    NodeOutOfRange {
        /// The offending node id.
        node: usize,
        /// Number of nodes in the graph or tree.
        node_count: usize,
    },
    /// An edge id had no associated weight.
    #[error("edge {edge} is out of range for {edge_count} edges")]
    EdgeOutOfRange {
        /// The offending edge id.
        edge: usize,
        /// Number of edge slots in the input stream.
        edge_count: usize,
    },
    /// A priority-queue key was outside the queue's key range.
    #[error("key {key} is out of range for a queue of capacity {capacity}")]
    KeyOutOfRange {
        /// The offending key.
        key: usize,
        /// Exclusive upper bound for keys.
        capacity: usize,
    },
    /// The parent vector contains no self-parented node.
    #[error("parent vector of length {len} has no root")]
    NoRoot {
        /// Length of the parent vector.
        len: usize,
    },
    /// The requested root is not its own parent.
    #[error("node {root} is not its own parent and cannot be the root")]
    InvalidRoot {
        /// The rejected root.
        root: usize,
    },
    /// A second self-parented node was found next to the root.
    #[error("parent vector has a second root {other} besides {root}")]
    MultipleRoots {
        /// The root the tree was built from.
        root: usize,
        /// Another node that is its own parent.
        other: usize,
    },
    /// A parent entry points outside the tree.
    #[error("node {node} has parent {parent}, but the tree has {node_count} nodes")]
    InvalidParent {
        /// The node with the broken parent entry.
        node: usize,
        /// The parent recorded for `node`.
        parent: usize,
        /// Number of nodes in the tree.
        node_count: usize,
    },
    /// A node cannot be reached from the root.
    #[error("node {node} is not reachable from the root")]
    DetachedNode {
        /// The unreachable node.
        node: usize,
    },
    /// A reset or paired input did not match the allocated size.
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Size of the allocated storage.
        expected: usize,
        /// Size of the supplied input.
        actual: usize,
    },
    /// The priority queue has no entries.
    #[error("priority queue is empty")]
    EmptyQueue,
    /// The key is already present in the priority queue.
    #[error("key {key} is already present in the priority queue")]
    DuplicateKey {
        /// The duplicated key.
        key: usize,
    },
    /// An edge weight does not compare with itself (for example NaN).
    #[error("edge {edge} has an incomparable weight")]
    IncomparableWeight {
        /// The edge carrying the weight.
        edge: usize,
    },
    /// A priority does not compare with itself (for example NaN).
    #[error("key {key} was given an incomparable priority")]
    IncomparablePriority {
        /// The key the priority was meant for.
        key: usize,
    },
    /// The requested spanning-tree strategy is not compiled into this build.
    #[error("spanning strategy {strategy:?} is unavailable in this build")]
    StrategyUnavailable {
        /// The strategy that was requested.
        strategy: SpanningStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A node id was outside the valid range.
        NodeOutOfRange => NodeOutOfRange { .. } => "GRAPH_NODE_OUT_OF_RANGE",
        /// An edge id had no associated weight.
        EdgeOutOfRange => EdgeOutOfRange { .. } => "GRAPH_EDGE_OUT_OF_RANGE",
        /// A priority-queue key was outside the key range.
        KeyOutOfRange => KeyOutOfRange { .. } => "GRAPH_KEY_OUT_OF_RANGE",
        /// The parent vector contains no root.
        NoRoot => NoRoot { .. } => "GRAPH_NO_ROOT",
        /// The requested root is not its own parent.
        InvalidRoot => InvalidRoot { .. } => "GRAPH_INVALID_ROOT",
        /// The parent vector has more than one root.
        MultipleRoots => MultipleRoots { .. } => "GRAPH_MULTIPLE_ROOTS",
        /// A parent entry points outside the tree.
        InvalidParent => InvalidParent { .. } => "GRAPH_INVALID_PARENT",
        /// A node cannot be reached from the root.
        DetachedNode => DetachedNode { .. } => "GRAPH_DETACHED_NODE",
        /// Input size differs from the allocated storage.
        SizeMismatch => SizeMismatch { .. } => "GRAPH_SIZE_MISMATCH",
        /// The priority queue has no entries.
        EmptyQueue => EmptyQueue => "GRAPH_EMPTY_QUEUE",
        /// The key is already queued.
        DuplicateKey => DuplicateKey { .. } => "GRAPH_DUPLICATE_KEY",
        /// An edge weight is incomparable.
        IncomparableWeight => IncomparableWeight { .. } => "GRAPH_INCOMPARABLE_WEIGHT",
        /// A priority is incomparable.
        IncomparablePriority => IncomparablePriority { .. } => "GRAPH_INCOMPARABLE_PRIORITY",
        /// The requested strategy is not compiled in.
        StrategyUnavailable => StrategyUnavailable { .. } => "GRAPH_STRATEGY_UNAVAILABLE",
    }
}

impl GraphError {
    /// Returns `true` when the error stems from a malformed parent vector.
    #[must_use]
    pub const fn is_malformed_tree(&self) -> bool {
        matches!(
            self,
            Self::NoRoot { .. }
                | Self::InvalidRoot { .. }
                | Self::MultipleRoots { .. }
                | Self::InvalidParent { .. }
                | Self::DetachedNode { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

pub(crate) const fn check_node(node: usize, node_count: usize) -> Result<usize> {
    if node < node_count {
        Ok(node)
    } else {
        Err(GraphError::NodeOutOfRange { node, node_count })
    }
}
