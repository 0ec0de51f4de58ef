//! Kruskal's algorithm and its randomised variant.

use tracing::{debug, field, instrument};

use super::SpanningForest;
use crate::edges::{EdgeSlot, EdgeSource};
use crate::error::{GraphError, Result, check_node};
use crate::union_find::UnionFind;
use crate::weights::{Weights, checked_weight};

/// Seed used by [`random_spanning_tree`] callers that do not pick their own.
pub(crate) const DEFAULT_SEED: u64 = 2018;

#[derive(Clone, Copy, Debug)]
struct Candidate {
    u: usize,
    v: usize,
    edge: usize,
}

/// Collects the included slots of `edges`, checking their endpoints.
///
/// Returns the candidates in edge-id order and the total slot count.
fn collect_candidates<S: EdgeSource + ?Sized>(
    node_count: usize,
    edges: &S,
) -> Result<(Vec<Candidate>, usize)> {
    let mut candidates = Vec::new();
    let mut slots = 0;
    let mut failure = None;
    edges.for_each_slot(|slot| {
        if let EdgeSlot::Edge(u, v) = slot {
            match (check_node(u, node_count), check_node(v, node_count)) {
                (Ok(_), Ok(_)) => candidates.push(Candidate { u, v, edge: slots }),
                (Err(err), _) | (_, Err(err)) => {
                    if failure.is_none() {
                        failure = Some(err);
                    }
                }
            }
        }
        slots += 1;
    });
    match failure {
        Some(err) => Err(err),
        None => Ok((candidates, slots)),
    }
}

/// Accepts candidates in the given order whenever they join two components.
fn span_in_order<I>(node_count: usize, slot_count: usize, order: I, early_exit: bool) -> SpanningForest
where
    I: IntoIterator<Item = Candidate>,
{
    let mut in_tree = vec![false; slot_count];
    let mut sets = UnionFind::new(node_count);
    let target = node_count.saturating_sub(1);
    let mut accepted = 0;
    for candidate in order {
        if early_exit && accepted == target {
            break;
        }
        if sets.union_nodes(candidate.u, candidate.v) {
            in_tree[candidate.edge] = true;
            accepted += 1;
        }
    }
    let component_count = sets.component_count();
    if component_count > 1 {
        debug!(component_count, "input graph is disconnected; returning a forest");
    }
    SpanningForest {
        in_tree,
        edge_count: accepted,
        component_count,
    }
}

/// Minimum spanning forest by Kruskal's algorithm.
///
/// Edges are processed by ascending weight; equal weights keep their
/// edge-id order, so the result is deterministic. Excluded slots are
/// skipped but keep their id, and self-loops are never selected. The loop
/// stops as soon as `node_count - 1` edges are accepted.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfRange`] for an edge naming a node
/// `>= node_count`, [`crate::GraphError::EdgeOutOfRange`] when `weights` has
/// no entry for an included edge and
/// [`crate::GraphError::IncomparableWeight`] for weights such as NaN. The
/// weights of included edges must be totally ordered among themselves; a
/// pair that does not compare is reported as incomparable too.
///
/// # Examples
/// ```
/// use graphidx_core::kruskal_mst;
///
/// let forest = kruskal_mst(3, &[(0, 1), (1, 2), (0, 2)], &[1.0, 2.0, 3.0])?;
/// assert_eq!(forest.in_tree(), &[true, true, false]);
/// assert!(forest.is_tree());
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
pub fn kruskal_mst<S, X, W>(node_count: usize, edges: &S, weights: &X) -> Result<SpanningForest>
where
    S: EdgeSource + ?Sized,
    X: Weights<W> + ?Sized,
    W: Copy + PartialOrd,
{
    kruskal_with(node_count, edges, weights, true)
}

/// First edge whose weight does not compare with the weight of the first
/// candidate.
fn first_incomparable<W: PartialOrd>(weighted: &[(W, Candidate)]) -> Option<usize> {
    let ((reference, _), rest) = weighted.split_first()?;
    rest.iter()
        .find(|(weight, _)| weight.partial_cmp(reference).is_none())
        .map(|(_, candidate)| candidate.edge)
}

#[instrument(
    name = "mst.kruskal",
    err,
    skip(edges, weights),
    fields(edges = field::Empty, components = field::Empty),
)]
pub(crate) fn kruskal_with<S, X, W>(
    node_count: usize,
    edges: &S,
    weights: &X,
    early_exit: bool,
) -> Result<SpanningForest>
where
    S: EdgeSource + ?Sized,
    X: Weights<W> + ?Sized,
    W: Copy + PartialOrd,
{
    let (candidates, slot_count) = collect_candidates(node_count, edges)?;
    let mut weighted = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let weight = checked_weight(weights, candidate.edge, slot_count)?;
        weighted.push((weight, candidate));
    }
    if let Some(edge) = first_incomparable(&weighted) {
        return Err(GraphError::IncomparableWeight { edge });
    }
    // `sort_by` is stable, so ties keep edge-id order.
    let mut clash = None;
    weighted.sort_by(|a, b| {
        a.0.partial_cmp(&b.0).unwrap_or_else(|| {
            if clash.is_none() {
                clash = Some(a.1.edge.max(b.1.edge));
            }
            a.1.edge.cmp(&b.1.edge)
        })
    });
    if let Some(edge) = clash {
        return Err(GraphError::IncomparableWeight { edge });
    }

    let forest = span_in_order(
        node_count,
        slot_count,
        weighted.into_iter().map(|(_, candidate)| candidate),
        early_exit,
    );
    tracing::Span::current().record("edges", slot_count);
    tracing::Span::current().record("components", forest.component_count);
    Ok(forest)
}

/// Spanning forest from a seeded random edge order.
///
/// Runs the Kruskal loop over a shuffle of the included edges, so the same
/// `seed` always yields the same forest. Weights play no part. The result
/// is a random spanning tree, not one drawn uniformly from all spanning
/// trees. Nor is it a randomised depth-first tree: those come out long
/// and path-like, while a shuffled Kruskal order gives shallower trees.
///
/// # Errors
/// Returns [`crate::GraphError::NodeOutOfRange`] for an edge naming a node
/// `>= node_count`.
///
/// # Examples
/// ```
/// use graphidx_core::random_spanning_tree;
///
/// let edges = [(0, 1), (1, 2), (0, 2), (2, 3)];
/// let forest = random_spanning_tree(4, &edges, 7)?;
/// assert_eq!(forest.edge_count(), 3);
/// assert!(forest.in_tree()[3]);
/// assert_eq!(forest, random_spanning_tree(4, &edges, 7)?);
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
#[cfg(feature = "random")]
pub fn random_spanning_tree<S: EdgeSource + ?Sized>(
    node_count: usize,
    edges: &S,
    seed: u64,
) -> Result<SpanningForest> {
    random_with(node_count, edges, seed, true)
}

#[cfg(feature = "random")]
#[instrument(
    name = "mst.random",
    err,
    skip(edges),
    fields(edges = field::Empty, components = field::Empty),
)]
pub(crate) fn random_with<S: EdgeSource + ?Sized>(
    node_count: usize,
    edges: &S,
    seed: u64,
    early_exit: bool,
) -> Result<SpanningForest> {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;

    let (mut candidates, slot_count) = collect_candidates(node_count, edges)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    candidates.shuffle(&mut rng);
    let forest = span_in_order(node_count, slot_count, candidates, early_exit);
    tracing::Span::current().record("edges", slot_count);
    tracing::Span::current().record("components", forest.component_count);
    Ok(forest)
}
