//! Prim's algorithm over a [`NeighborIndex`].

use tracing::{debug, field, instrument};

use super::{SpanningForest, SpanningTree};
use crate::error::{Result, check_node};
use crate::heap::PriorityQueue;
use crate::neighbors::NeighborIndex;
use crate::weights::{Weights, checked_weight};

const NO_EDGE: usize = usize::MAX;

struct Frontier<'a, W> {
    index: &'a NeighborIndex,
    queue: PriorityQueue<W>,
    done: Vec<bool>,
    parent: Vec<usize>,
    via: Vec<usize>,
}

impl<W: Copy + PartialOrd> Frontier<'_, W> {
    /// Offers every edge leaving `node` to the queue, keeping the cheaper
    /// connection for each neighbour.
    fn relax<X: Weights<W> + ?Sized>(&mut self, node: usize, weights: &X) -> Result<()> {
        for neighbor in self.index.adjacent(node) {
            let next = neighbor.node();
            if self.done[next] {
                continue;
            }
            let weight = checked_weight(weights, neighbor.edge(), self.index.edge_count())?;
            if self
                .queue
                .priority(next)
                .is_some_and(|current| !(weight < current))
            {
                continue;
            }
            self.queue.set(next, weight)?;
            self.parent[next] = node;
            self.via[next] = neighbor.edge();
        }
        Ok(())
    }
}

/// Minimum spanning forest by Prim's algorithm, grown from `root`.
///
/// Each unvisited node is queued with the weight of its cheapest known
/// connection. Popping a node marks that connecting edge as a tree edge and
/// relaxes the node's neighbours. When the queue drains and nodes remain
/// unvisited, the search restarts from the lowest such node, so the result
/// always has `n - c` edges for `c` components. `root` and every restart
/// node are their own parent. Runs in `O(m log n)`.
///
/// Equal weights resolve deterministically: a queued node keeps the first
/// edge that reached it, and equal queue entries pop in the order they were
/// first queued.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfRange`] when `root` is not a node,
/// [`crate::GraphError::EdgeOutOfRange`] when `weights` has no entry for an
/// indexed edge and [`crate::GraphError::IncomparableWeight`] for weights
/// such as NaN.
///
/// # Examples
/// ```
/// use graphidx_core::{NeighborIndex, prim_mst_edges};
///
/// let index = NeighborIndex::build(3, &[(0, 1), (1, 2), (0, 2)])?;
/// let tree = prim_mst_edges(&index, &[1.0, 2.0, 3.0], 0)?;
/// assert_eq!(tree.in_tree(), &[true, true, false]);
/// assert_eq!(tree.parent(), &[0, 0, 1]);
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
#[instrument(
    name = "mst.prim",
    err,
    skip(index, weights),
    fields(nodes = index.node_count(), edges = index.edge_count(), components = field::Empty),
)]
pub fn prim_mst_edges<X, W>(index: &NeighborIndex, weights: &X, root: usize) -> Result<SpanningTree>
where
    X: Weights<W> + ?Sized,
    W: Copy + PartialOrd,
{
    let n = index.node_count();
    check_node(root, n)?;

    let mut frontier = Frontier {
        index,
        queue: PriorityQueue::new(n),
        done: vec![false; n],
        parent: (0..n).collect(),
        via: vec![NO_EDGE; n],
    };
    let mut in_tree = vec![false; index.edge_count()];
    let mut edge_count = 0;
    let mut component_count = 0;

    for start in std::iter::once(root).chain(0..n) {
        if frontier.done[start] {
            continue;
        }
        component_count += 1;
        frontier.done[start] = true;
        frontier.relax(start, weights)?;
        while !frontier.queue.is_empty() {
            let (node, _) = frontier.queue.pop_min()?;
            frontier.done[node] = true;
            in_tree[frontier.via[node]] = true;
            edge_count += 1;
            frontier.relax(node, weights)?;
        }
    }

    tracing::Span::current().record("components", component_count);
    if component_count > 1 {
        debug!(component_count, "input graph is disconnected; returning a forest");
    }
    let forest = SpanningForest {
        in_tree,
        edge_count,
        component_count,
    };
    Ok(SpanningTree::from_parts(frontier.parent, forest))
}
