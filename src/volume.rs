//! The capability set a bounding volume exposes to the hierarchy.

use std::fmt::Debug;

use crate::coordinate::Coordinate;
use crate::scalar::{Scalar, two};

/// Sweep miss sentinel: `2`, safely outside the unit interval.
///
/// [`Volume::intersects`] returns this when a swept volume never touches
/// the receiver inside `t ∈ [0, 1]`. Traversal treats any out-of-range
/// value as a miss; see [`is_hit`].
#[must_use]
pub fn miss<T: Scalar>() -> T {
    two()
}

/// True iff a sweep parameter lies in the closed unit interval.
#[must_use]
pub fn is_hit<T: Scalar>(t: T) -> bool {
    t >= T::zero() && t <= T::one()
}

/// Bounding volume capability set required by [`Bvh`](crate::Bvh).
///
/// The hierarchy is parametric over any shape providing these operations
/// and never inspects the concrete type. `Default` is the zero-valued
/// factory used for internal scratch bounds; `PartialEq` is semantic
/// equality of shape and position. Identity of stored instances is tracked
/// by the tree through `Rc` pointers, not by the shape itself, so two
/// coincident volumes remain distinct residents.
pub trait Volume<T: Scalar, const N: usize>: Clone + Debug + Default + PartialEq {
    /// Reshape `self` into the smallest same-shape volume enclosing every
    /// input. Commutative and associative up to floating point; must be
    /// handed at least one volume.
    fn min_bounds<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a;

    /// Size heuristic guiding restructuring; lower is better.
    fn score(&self) -> T;

    /// Closed intersection test: touching counts as overlap.
    fn overlaps(&self, other: &Self) -> bool;

    /// True iff `other` lies entirely within `self` (closed).
    fn contains(&self, other: &Self) -> bool;

    /// Sweep `other` along `delta` and return the earliest `t ∈ [0, 1]` at
    /// which it touches `self`, or [`miss`] when it never does. Touching at
    /// the entry parameter counts as a hit.
    fn intersects(&self, other: &Self, delta: &Coordinate<T, N>) -> T;

    /// Minimum corner of the enclosing axis-aligned projection.
    fn point(&self) -> Coordinate<T, N>;

    /// Per-dimension extent of the enclosing axis-aligned projection.
    fn extent(&self) -> Coordinate<T, N>;
}
