//! Edge streams consumed by the indexes and spanning-tree algorithms.
//!
//! An [`EdgeSource`] replays a finite sequence of edge slots, pushing each
//! one into a caller closure. The position of a slot in the stream is its
//! edge id, and excluded slots keep their position so per-edge weights and
//! membership vectors stay aligned with the caller's arrays.
//!
//! Sources must be side-effect free: the indexes replay them more than once
//! (once to count, once to fill).

use crate::error::{GraphError, Result};

/// One position in an edge stream.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeSlot {
    /// An undirected edge between two nodes.
    Edge(usize, usize),
    /// A slot that does not describe an edge, e.g. a sentinel entry.
    Excluded,
}

/// A replayable stream of edge slots.
pub trait EdgeSource {
    /// Pushes every slot, in edge-id order, into `visit`.
    fn for_each_slot<F: FnMut(EdgeSlot)>(&self, visit: F);

    /// Total number of slots, excluded ones included.
    fn slot_count(&self) -> usize {
        let mut count = 0;
        self.for_each_slot(|_| count += 1);
        count
    }
}

impl EdgeSource for [(usize, usize)] {
    fn for_each_slot<F: FnMut(EdgeSlot)>(&self, mut visit: F) {
        for &(u, v) in self {
            visit(EdgeSlot::Edge(u, v));
        }
    }

    fn slot_count(&self) -> usize {
        self.len()
    }
}

impl EdgeSource for Vec<(usize, usize)> {
    fn for_each_slot<F: FnMut(EdgeSlot)>(&self, visit: F) {
        self.as_slice().for_each_slot(visit);
    }

    fn slot_count(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> EdgeSource for [(usize, usize); N] {
    fn for_each_slot<F: FnMut(EdgeSlot)>(&self, visit: F) {
        self.as_slice().for_each_slot(visit);
    }

    fn slot_count(&self) -> usize {
        N
    }
}

impl<S: EdgeSource + ?Sized> EdgeSource for &S {
    fn for_each_slot<F: FnMut(EdgeSlot)>(&self, visit: F) {
        (**self).for_each_slot(visit);
    }

    fn slot_count(&self) -> usize {
        (**self).slot_count()
    }
}

/// Parallel head and tail arrays; a negative entry marks an excluded slot.
///
/// # Examples
/// ```
/// use graphidx_core::{EdgeSlot, EdgeSource, HeadTail};
///
/// let edges = HeadTail::new(&[0, -1, 1], &[1, 2, 2])?;
/// let mut slots = Vec::new();
/// edges.for_each_slot(|slot| slots.push(slot));
/// assert_eq!(
///     slots,
///     vec![EdgeSlot::Edge(0, 1), EdgeSlot::Excluded, EdgeSlot::Edge(1, 2)]
/// );
/// # Ok::<(), graphidx_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct HeadTail<'a> {
    head: &'a [isize],
    tail: &'a [isize],
}

impl<'a> HeadTail<'a> {
    /// Pairs `head[i]` with `tail[i]`.
    ///
    /// # Errors
    /// Returns [`GraphError::SizeMismatch`] when the arrays differ in length.
    pub fn new(head: &'a [isize], tail: &'a [isize]) -> Result<Self> {
        if head.len() != tail.len() {
            return Err(GraphError::SizeMismatch {
                expected: head.len(),
                actual: tail.len(),
            });
        }
        Ok(Self { head, tail })
    }
}

impl EdgeSource for HeadTail<'_> {
    fn for_each_slot<F: FnMut(EdgeSlot)>(&self, mut visit: F) {
        for (&h, &t) in self.head.iter().zip(self.tail) {
            match (usize::try_from(h), usize::try_from(t)) {
                (Ok(u), Ok(v)) => visit(EdgeSlot::Edge(u, v)),
                _ => visit(EdgeSlot::Excluded),
            }
        }
    }

    fn slot_count(&self) -> usize {
        self.head.len()
    }
}

/// Wraps a source and excludes every edge the predicate rejects.
///
/// The predicate receives `(edge_id, u, v)`.
#[derive(Clone, Copy, Debug)]
pub struct Filtered<S, P> {
    source: S,
    keep: P,
}

impl<S, P> Filtered<S, P>
where
    S: EdgeSource,
    P: Fn(usize, usize, usize) -> bool,
{
    /// Keeps only the edges for which `keep(edge, u, v)` holds.
    #[must_use]
    pub const fn new(source: S, keep: P) -> Self {
        Self { source, keep }
    }
}

impl<S, P> EdgeSource for Filtered<S, P>
where
    S: EdgeSource,
    P: Fn(usize, usize, usize) -> bool,
{
    fn for_each_slot<F: FnMut(EdgeSlot)>(&self, mut visit: F) {
        let mut edge = 0;
        self.source.for_each_slot(|slot| {
            match slot {
                EdgeSlot::Edge(u, v) if (self.keep)(edge, u, v) => visit(slot),
                _ => visit(EdgeSlot::Excluded),
            }
            edge += 1;
        });
    }

    fn slot_count(&self) -> usize {
        self.source.slot_count()
    }
}

/// Adapts a push-style generator `iterate(&mut emit)` into an edge source.
///
/// Useful for implicit graphs such as grids, whose edges are produced on the
/// fly rather than stored.
///
/// # Examples
/// ```
/// use graphidx_core::{EdgeSource, FnEdges};
///
/// // A path 0 - 1 - 2 - 3.
/// let path = FnEdges::new(|emit: &mut dyn FnMut(usize, usize)| {
///     for u in 0..3 {
///         emit(u, u + 1);
///     }
/// });
/// assert_eq!(path.slot_count(), 3);
/// ```
#[derive(Clone, Copy)]
pub struct FnEdges<G> {
    generate: G,
}

impl<G> FnEdges<G>
where
    G: Fn(&mut dyn FnMut(usize, usize)),
{
    /// Wraps `generate`, which must emit the same edges on every call.
    #[must_use]
    pub const fn new(generate: G) -> Self {
        Self { generate }
    }
}

impl<G> EdgeSource for FnEdges<G>
where
    G: Fn(&mut dyn FnMut(usize, usize)),
{
    fn for_each_slot<F: FnMut(EdgeSlot)>(&self, mut visit: F) {
        (self.generate)(&mut |u, v| visit(EdgeSlot::Edge(u, v)));
    }
}

impl<G> std::fmt::Debug for FnEdges<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnEdges").finish_non_exhaustive()
    }
}
