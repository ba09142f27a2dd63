//! Axis-aligned orthotopes: N-dimensional boxes stored as a minimum corner
//! plus a per-dimension extent.

use std::fmt;

use crate::coordinate::Coordinate;
use crate::scalar::{Scalar, max, min};
use crate::volume::{Volume, is_hit, miss};

/// An axis-aligned box: minimum corner `point` plus non-negative `delta`.
///
/// All interval tests are closed, so boxes that merely touch still overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orthotope<T, const N: usize> {
    /// Minimum corner.
    pub point: Coordinate<T, N>,
    /// Per-dimension extent; every element must be non-negative.
    pub delta: Coordinate<T, N>,
}

impl<T: Scalar, const N: usize> Default for Orthotope<T, N> {
    fn default() -> Self {
        Self {
            point: Coordinate::default(),
            delta: Coordinate::default(),
        }
    }
}

impl<T: Scalar, const N: usize> Orthotope<T, N> {
    /// Create a box from its minimum corner and extent.
    #[must_use]
    pub const fn new(point: Coordinate<T, N>, delta: Coordinate<T, N>) -> Self {
        Self { point, delta }
    }

    /// Per-dimension signed distance from `point` to this box; zero in every
    /// dimension iff the point lies inside.
    #[must_use]
    pub fn taxi_path(&self, point: Coordinate<T, N>) -> Coordinate<T, N> {
        let mut coor = Coordinate::zero();
        for index in 0..N {
            // Negative when the point is past the near face.
            coor[index] = max(self.point[index] - point[index], T::zero());
            // Positive when the point is short of the far face.
            let far = self.point[index] + self.delta[index] - point[index];
            coor[index] = coor[index] + min(far, T::zero());
        }
        coor
    }

    /// Trim a motion `delta` so that this box, moved one dimension at a time
    /// in the given `order`, never overlaps any of `solids`. A hit backs the
    /// motion off by up to `margin` along the blocked dimension.
    pub fn slide<'a, I>(&self, delta: &mut Coordinate<T, N>, order: [usize; N], margin: T, solids: I)
    where
        I: IntoIterator<Item = &'a Self> + Copy,
        T: 'a,
    {
        let mut query = *self;
        for dim in order {
            let mut q_delta = Coordinate::zero();
            q_delta[dim] = delta[dim];

            let mut closest = miss();
            for solid in solids {
                let t = solid.intersects(&query, &q_delta);
                if t < closest {
                    closest = t;
                }
            }
            if is_hit(closest) {
                // Stop at the obstacle, then back off by the margin without
                // reversing direction.
                q_delta[dim] = q_delta[dim] * closest;
                let bump = min(margin, q_delta[dim].abs());
                if q_delta[dim] > T::zero() {
                    q_delta[dim] = q_delta[dim] - bump;
                } else {
                    q_delta[dim] = q_delta[dim] + bump;
                }
                delta[dim] = q_delta[dim];
            }
            query.point[dim] = query.point[dim] + q_delta[dim];
        }
    }
}

impl<T: Scalar, const N: usize> Volume<T, N> for Orthotope<T, N> {
    fn min_bounds<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        let mut others = others.into_iter();
        let first = others.next().expect("min_bounds requires at least one volume");
        self.point = first.point;
        self.delta = first.delta;

        for other in others {
            for index in 0..N {
                let far = max(
                    self.point[index] + self.delta[index],
                    other.point[index] + other.delta[index],
                );
                self.point[index] = min(self.point[index], other.point[index]);
                self.delta[index] = far - self.point[index];
            }
        }
    }

    fn score(&self) -> T {
        let mut score = T::zero();
        for d in self.delta.0 {
            score = score + d;
        }
        score
    }

    fn overlaps(&self, other: &Self) -> bool {
        for index in 0..N {
            let p0 = other.point[index];
            let p1 = p0 + other.delta[index];
            if self.point[index] > p1 || p0 > self.point[index] + self.delta[index] {
                return false;
            }
        }
        true
    }

    fn contains(&self, other: &Self) -> bool {
        for index in 0..N {
            let p0 = self.point[index];
            let p1 = p0 + self.delta[index];
            if other.point[index] < p0 || p1 < other.point[index] + other.delta[index] {
                return false;
            }
        }
        true
    }

    /// Swept slab test: for each dimension the moving box enters at `t0` and
    /// leaves at `t1`; the sweep hits iff the intersection of all `[t0, t1]`
    /// intervals reaches into `[0, 1]`.
    fn intersects(&self, other: &Self, delta: &Coordinate<T, N>) -> T {
        let mut in_t = T::zero();
        let mut out_t = T::one();

        for index in 0..N {
            let p0 = other.point[index];
            let p1 = p0 + other.delta[index];

            if delta[index].is_zero() {
                // Static dimension: the slabs must already overlap.
                if self.point[index] > p1 || p0 > self.point[index] + self.delta[index] {
                    return miss();
                }
            } else {
                let mut t0 = (self.point[index] - p1) / delta[index];
                let mut t1 = (self.point[index] + self.delta[index] - p0) / delta[index];
                if delta[index] < T::zero() {
                    std::mem::swap(&mut t0, &mut t1);
                }
                in_t = max(in_t, t0);
                out_t = min(out_t, t1);
                if in_t > out_t {
                    return miss();
                }
            }
        }

        if in_t < T::zero() { miss() } else { in_t }
    }

    fn point(&self) -> Coordinate<T, N> {
        self.point
    }

    fn extent(&self) -> Coordinate<T, N> {
        self.delta
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Orthotope<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point {}, Delta {}", self.point, self.delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed<T: Scalar, const N: usize>(point: [T; N], delta: [T; N]) -> Orthotope<T, N> {
        Orthotope::new(Coordinate(point), Coordinate(delta))
    }

    #[test]
    fn test_overlaps() {
        let o1 = boxed([10, -20], [30, 30]);
        let o2 = boxed([-10, 5], [30, 30]);
        let o3 = boxed([-10, 25], [30, 30]);

        assert!(o1.overlaps(&o2));
        assert!(!o1.overlaps(&o3));
    }

    #[test]
    fn test_overlaps_touching_counts() {
        let o1 = boxed([0, 0], [10, 10]);
        let o2 = boxed([10, 0], [5, 10]);
        assert!(o1.overlaps(&o2));
        assert!(o2.overlaps(&o1));
    }

    #[test]
    fn test_contains() {
        let o1 = boxed([10, -20], [30, 30]);
        let o2 = boxed([15, -20], [20, 20]);
        let o3 = boxed([-10, 5], [30, 30]);

        assert!(o1.contains(&o2));
        assert!(!o2.contains(&o1));
        assert!(!o1.contains(&o3));
    }

    #[test]
    fn test_score() {
        let o = boxed([10.0_f32, -20.0], [30.0, 15.0]);
        assert_eq!(o.score(), 45.0);
    }

    #[test]
    fn test_intersects() {
        let o = boxed([-10.0_f32, 0.0], [10.0, 10.0]);
        let delta = Coordinate([20.0_f32, -20.0]);

        // Moving away: the entry parameter would be negative.
        let o1 = boxed([-10.0_f32, -25.0], [10.0, 10.0]);
        assert_eq!(o1.intersects(&o, &delta), miss());

        let o2 = boxed([15.0_f32, -25.0], [10.0, 10.0]);
        assert_eq!(o2.intersects(&o, &delta), 0.75);

        let o3 = boxed([10.0_f32, -5.0], [10.0, 10.0]);
        assert_eq!(o3.intersects(&o, &delta), 0.5);
    }

    #[test]
    fn test_intersects_static_dimension() {
        let target = boxed([10.0_f32, 0.0], [4.0, 4.0]);
        // No vertical motion and no vertical slab overlap: a miss regardless
        // of horizontal travel.
        let query = boxed([0.0_f32, 10.0], [2.0, 2.0]);
        assert_eq!(target.intersects(&query, &Coordinate([20.0, 0.0])), miss());

        // With the slabs aligned the sweep connects.
        let query = boxed([0.0_f32, 1.0], [2.0, 2.0]);
        assert_eq!(target.intersects(&query, &Coordinate([16.0, 0.0])), 0.5);
    }

    #[test]
    fn test_intersects_touching_at_entry() {
        let target = boxed([4.0_f32, 0.0], [2.0, 2.0]);
        let query = boxed([0.0_f32, 0.0], [2.0, 2.0]);
        // Travel of exactly the gap: contact happens at t = 1.
        assert_eq!(target.intersects(&query, &Coordinate([2.0, 0.0])), 1.0);
        // Anything short of the gap misses.
        assert_eq!(target.intersects(&query, &Coordinate([1.5, 0.0])), miss());
    }

    #[test]
    fn test_min_bounds() {
        let mut o1 = boxed([10, -20], [30, 30]);
        let o2 = boxed([15, -20], [20, 20]);
        let o3 = boxed([-10, 5], [30, 30]);

        o1.min_bounds([&o2, &o3]);
        assert_eq!(o1, boxed([-10, -20], [45, 55]));
    }

    #[test]
    fn test_min_bounds_running_minimum() {
        // The near corner keeps shrinking across later inputs, not just the
        // first pair.
        let mut acc = Orthotope::default();
        let a = boxed([5, 5], [1, 1]);
        let b = boxed([3, 8], [1, 1]);
        let c = boxed([0, 0], [1, 1]);
        acc.min_bounds([&a, &b, &c]);
        assert_eq!(acc, boxed([0, 0], [6, 9]));
    }

    #[test]
    fn test_equals() {
        let o1 = boxed([10, -20], [30, 30]);
        let o2 = boxed([10, -20], [30, 30]);
        let o3 = boxed([10, -5], [30, 20]);

        assert_eq!(o1, o2);
        assert_ne!(o1, o3);
    }

    #[test]
    fn test_taxi_path() {
        let o = boxed([0, 0], [10, 10]);
        assert_eq!(o.taxi_path(Coordinate([5, 5])), Coordinate([0, 0]));
        assert_eq!(o.taxi_path(Coordinate([-3, 12])), Coordinate([3, -2]));
        assert_eq!(o.taxi_path(Coordinate([15, 5])), Coordinate([-5, 0]));
    }

    #[test]
    fn test_slide_stops_at_wall() {
        let mover = boxed([0.0_f32, 0.0], [2.0, 2.0]);
        let wall = boxed([10.0_f32, 0.0], [2.0, 2.0]);
        let mut delta = Coordinate([16.0_f32, 0.0]);

        mover.slide(&mut delta, [0, 1], 0.5, &[wall]);
        // The gap is 8; the motion stops there and backs off by the margin.
        assert_eq!(delta, Coordinate([7.5, 0.0]));
    }

    #[test]
    fn test_slide_free_motion_untouched() {
        let mover = boxed([0.0_f32, 0.0], [2.0, 2.0]);
        let wall = boxed([10.0_f32, 20.0], [2.0, 2.0]);
        let mut delta = Coordinate([4.0_f32, 3.0]);

        mover.slide(&mut delta, [0, 1], 0.5, &[wall]);
        assert_eq!(delta, Coordinate([4.0, 3.0]));
    }

    #[test]
    fn test_display() {
        let o = boxed([10, -20], [30, 30]);
        assert_eq!(o.to_string(), "Point [10, -20], Delta [30, 30]");
    }
}
