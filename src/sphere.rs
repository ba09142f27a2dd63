//! Spherical bounding volumes.

use std::fmt;

use crate::coordinate::Coordinate;
use crate::scalar::{Scalar, from_measure, to_measure, two};
use crate::volume::{Volume, miss};

/// A sphere stored as a center and radius.
///
/// The enclosing [`min_bounds`](Volume::min_bounds) is an iterative
/// heuristic, not a minimum-bounding-sphere solver: it grows the running
/// sphere toward each input in turn, so the result depends on input order
/// but always contains every input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere<T, const N: usize> {
    /// Center point.
    pub center: Coordinate<T, N>,
    /// Radius; must be non-negative.
    pub radius: T,
}

impl<T: Scalar, const N: usize> Default for Sphere<T, N> {
    fn default() -> Self {
        Self {
            center: Coordinate::default(),
            radius: T::default(),
        }
    }
}

impl<T: Scalar, const N: usize> Sphere<T, N> {
    /// Create a sphere from its center and radius.
    #[must_use]
    pub const fn new(center: Coordinate<T, N>, radius: T) -> Self {
        Self { center, radius }
    }
}

impl<T: Scalar, const N: usize> Volume<T, N> for Sphere<T, N> {
    fn min_bounds<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let mut others = others.into_iter();
        let first = others.next().expect("min_bounds requires at least one volume");
        self.center = first.center;
        self.radius = first.radius;

        for sphere in others {
            let diff = sphere.center - self.center;
            let distance = diff.length();
            if distance + sphere.radius <= self.radius {
                continue;
            }
            // Grow to the smallest sphere covering both, shifting the center
            // along the line between them.
            let new_radius = (self.radius + distance + sphere.radius) / two();
            let direction = diff.normalize();
            self.center = self.center + direction.scale(new_radius - self.radius);
            self.radius = new_radius;
        }
    }

    fn score(&self) -> T {
        two::<T>() * self.radius
    }

    fn overlaps(&self, other: &Self) -> bool {
        let dist_sq = self.center.distance_sq(other.center);
        let sum = self.radius + other.radius;
        dist_sq <= sum * sum
    }

    fn contains(&self, other: &Self) -> bool {
        let distance = self.center - other.center;
        distance.length() + other.radius <= self.radius
    }

    /// Quadratic ray–sphere sweep against the Minkowski sum of the two
    /// radii. Roots are solved in `f64` measure space; the smaller root in
    /// `[0, 1]` wins, then the larger, otherwise a miss. A zero direction
    /// degenerates to the static overlap test.
    fn intersects(&self, other: &Self, delta: &Coordinate<T, N>) -> T {
        let combined = self.radius + other.radius;
        let oc = other.center - self.center;

        let a = to_measure(delta.dot(*delta));
        if a == 0.0 {
            return if self.overlaps(other) { T::zero() } else { miss() };
        }
        let b = 2.0 * to_measure(oc.dot(*delta));
        let c = to_measure(oc.dot(oc)) - to_measure(combined * combined);

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return miss();
        }
        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b - sqrt_disc) / (2.0 * a);
        let t2 = (-b + sqrt_disc) / (2.0 * a);

        if (0.0..=1.0).contains(&t1) {
            from_measure(t1)
        } else if (0.0..=1.0).contains(&t2) {
            from_measure(t2)
        } else {
            miss()
        }
    }

    fn point(&self) -> Coordinate<T, N> {
        self.center - Coordinate::fill(self.radius)
    }

    fn extent(&self) -> Coordinate<T, N> {
        Coordinate::fill(two::<T>() * self.radius)
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Sphere<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Center {}, Radius {}", self.center, self.radius)
    }
}
