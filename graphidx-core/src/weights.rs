//! Weights attached to a collection of edges (or nodes).
//!
//! Two providers cover the common cases: a per-element slice or vector, and
//! [`ConstantWeights`], which reports the same weight for every element
//! without materialising an array.

/// Read access to the weight of element `index`.
///
/// Returns `None` when the provider has no weight for `index`; the
/// algorithms surface that as [`crate::GraphError::EdgeOutOfRange`].
pub trait Weights<W> {
    /// Returns the weight for `index`, if any.
    fn weight(&self, index: usize) -> Option<W>;
}

impl<W: Copy> Weights<W> for [W] {
    fn weight(&self, index: usize) -> Option<W> {
        self.get(index).copied()
    }
}

impl<W: Copy> Weights<W> for Vec<W> {
    fn weight(&self, index: usize) -> Option<W> {
        self.as_slice().weight(index)
    }
}

impl<W: Copy, const N: usize> Weights<W> for [W; N] {
    fn weight(&self, index: usize) -> Option<W> {
        self.as_slice().weight(index)
    }
}

impl<W, T: Weights<W> + ?Sized> Weights<W> for &T {
    fn weight(&self, index: usize) -> Option<W> {
        (**self).weight(index)
    }
}

/// Same weight for every element.
///
/// # Examples
/// ```
/// use graphidx_core::{ConstantWeights, Weights};
///
/// let unit = ConstantWeights::new(1.5_f64);
/// assert_eq!(unit.weight(0), Some(1.5));
/// assert_eq!(unit.weight(1_000_000), Some(1.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantWeights<W> {
    value: W,
}

impl<W: Copy> ConstantWeights<W> {
    /// Wraps `value` as the weight of every element.
    #[must_use]
    pub const fn new(value: W) -> Self {
        Self { value }
    }

    /// The shared weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn value(&self) -> W { self.value }
}

impl<W: Copy> Weights<W> for ConstantWeights<W> {
    fn weight(&self, _index: usize) -> Option<W> {
        Some(self.value)
    }
}

/// Looks up `edge` and checks that the weight is comparable with itself.
pub(crate) fn checked_weight<W, S>(weights: &S, edge: usize, edge_count: usize) -> crate::Result<W>
where
    W: PartialOrd,
    S: Weights<W> + ?Sized,
{
    let weight = weights
        .weight(edge)
        .ok_or(crate::GraphError::EdgeOutOfRange { edge, edge_count })?;
    if weight.partial_cmp(&weight).is_none() {
        return Err(crate::GraphError::IncomparableWeight { edge });
    }
    Ok(weight)
}
