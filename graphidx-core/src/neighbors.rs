//! Compact adjacency index for undirected graphs.
//!
//! The index is built in two passes over an [`EdgeSource`]: the first counts
//! degrees, the second places every `(neighbor, edge)` pair into a single
//! contiguous array addressed by per-node offsets. Construction is
//! `O(n + m)`; afterwards the index is immutable.

use tracing::{debug, field, instrument};

use crate::edges::{EdgeSlot, EdgeSource};
use crate::error::{GraphError, Result, check_node};

/// One entry of a node's adjacency list.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Neighbor {
    node: usize,
    edge: usize,
}

impl Neighbor {
    /// The adjacent node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node(&self) -> usize { self.node }

    /// Id of the edge connecting to [`Self::node`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> usize { self.edge }
}

/// Adjacency lists of an undirected graph with a fixed node count.
///
/// Every edge `(u, v)` appears in both `u`'s and `v`'s list; a self-loop
/// `(u, u)` therefore appears twice in `u`'s list. Within a list, entries
/// follow edge-id order.
///
/// # Examples
/// ```
/// use graphidx_core::NeighborIndex;
///
/// let index = NeighborIndex::build(3, &[(0, 1), (1, 2)])?;
/// let around_one: Vec<usize> = index.neighbors(1)?.iter().map(|n| n.node()).collect();
/// assert_eq!(around_one, vec![0, 2]);
/// assert_eq!(index.degree(0)?, 1);
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborIndex {
    offsets: Vec<usize>,
    entries: Vec<Neighbor>,
    edge_count: usize,
    excluded: usize,
}

impl NeighborIndex {
    /// Builds the index for `node_count` nodes from `edges`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] when an included edge names a
    /// node `>= node_count`, and [`GraphError::SizeMismatch`] when `edges`
    /// yields a different stream on the second pass than on the first.
    #[instrument(
        name = "index.neighbors",
        err,
        skip(edges),
        fields(edges = field::Empty, excluded = field::Empty),
    )]
    pub fn build<S: EdgeSource + ?Sized>(node_count: usize, edges: &S) -> Result<Self> {
        let mut offsets = vec![0_usize; node_count + 1];
        let mut edge_count = 0;
        let mut excluded = 0;
        let mut failure = None;

        edges.for_each_slot(|slot| {
            if let EdgeSlot::Edge(u, v) = slot {
                match (check_node(u, node_count), check_node(v, node_count)) {
                    (Ok(_), Ok(_)) => {
                        offsets[u + 1] += 1;
                        offsets[v + 1] += 1;
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        if failure.is_none() {
                            failure = Some(err);
                        }
                    }
                }
            } else {
                excluded += 1;
            }
            edge_count += 1;
        });
        if let Some(err) = failure {
            return Err(err);
        }

        for node in 0..node_count {
            offsets[node + 1] += offsets[node];
        }

        let placeholder = Neighbor {
            node: usize::MAX,
            edge: usize::MAX,
        };
        let entry_count = offsets[node_count];
        let mut entries = vec![placeholder; entry_count];
        let mut cursor = offsets.clone();
        let mut edge = 0;
        let mut attempted = 0;
        let mut replay_failure = None;
        edges.for_each_slot(|slot| {
            if let EdgeSlot::Edge(u, v) = slot {
                if edge < edge_count && replay_failure.is_none() {
                    match (check_node(u, node_count), check_node(v, node_count)) {
                        (Ok(_), Ok(_)) => {
                            attempted += 2;
                            place(&mut entries, &mut cursor, &offsets, u, v, edge);
                            place(&mut entries, &mut cursor, &offsets, v, u, edge);
                        }
                        (Err(err), _) | (_, Err(err)) => replay_failure = Some(err),
                    }
                }
            }
            edge += 1;
        });
        // A source that changes between the two passes is reported instead
        // of indexed.
        if let Some(err) = replay_failure {
            return Err(err);
        }
        if edge != edge_count {
            return Err(GraphError::SizeMismatch {
                expected: edge_count,
                actual: edge,
            });
        }
        let filled = (0..node_count).all(|node| cursor[node] == offsets[node + 1]);
        if attempted != entry_count || !filled {
            return Err(GraphError::SizeMismatch {
                expected: entry_count,
                actual: attempted,
            });
        }

        tracing::Span::current().record("edges", edge_count);
        tracing::Span::current().record("excluded", excluded);
        if excluded > 0 {
            debug!(excluded, "skipped excluded edge slots");
        }

        Ok(Self {
            offsets,
            entries,
            edge_count,
            excluded,
        })
    }

    /// Number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.offsets.len() - 1 }

    /// Number of edge slots in the source stream, excluded ones included.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Number of slots that were skipped as excluded.
    #[must_use]
    #[rustfmt::skip]
    pub fn excluded_count(&self) -> usize { self.excluded }

    /// Adjacency list of `node`, borrowed from the index.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for unknown nodes.
    pub fn neighbors(&self, node: usize) -> Result<&[Neighbor]> {
        check_node(node, self.node_count())?;
        Ok(self.adjacent(node))
    }

    /// Number of adjacency entries of `node`.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeOutOfRange`] for unknown nodes.
    pub fn degree(&self, node: usize) -> Result<usize> {
        check_node(node, self.node_count())?;
        Ok(self.offsets[node + 1] - self.offsets[node])
    }

    pub(crate) fn adjacent(&self, node: usize) -> &[Neighbor] {
        &self.entries[self.offsets[node]..self.offsets[node + 1]]
    }
}

/// Writes `(node, edge)` into the next free slot of `at`'s list. A full
/// list leaves the entry out; the caller detects the shortfall afterwards.
fn place(
    entries: &mut [Neighbor],
    cursor: &mut [usize],
    offsets: &[usize],
    at: usize,
    node: usize,
    edge: usize,
) {
    if cursor[at] < offsets[at + 1] {
        entries[cursor[at]] = Neighbor { node, edge };
        cursor[at] += 1;
    }
}

/// Replays the edge stream the index was built from, with the original
/// edge ids and excluded slots in place.
impl EdgeSource for NeighborIndex {
    fn for_each_slot<F: FnMut(EdgeSlot)>(&self, mut visit: F) {
        let mut slots = vec![EdgeSlot::Excluded; self.edge_count];
        for u in 0..self.node_count() {
            for neighbor in self.adjacent(u) {
                if neighbor.node >= u {
                    slots[neighbor.edge] = EdgeSlot::Edge(u, neighbor.node);
                }
            }
        }
        for slot in slots {
            visit(slot);
        }
    }

    fn slot_count(&self) -> usize {
        self.edge_count
    }
}
