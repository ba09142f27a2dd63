//! Numeric element abstraction shared by coordinates, volumes and the tree.

use std::fmt::{Debug, Display};

use num_traits::{Bounded, NumCast, Signed};

/// Numbers a [`Coordinate`](crate::Coordinate) may be built from.
///
/// The blanket impl below covers every signed primitive; the supported set
/// is IEEE-754 `f32`/`f64` and two's-complement `i32`/`i64`. Integer
/// elements keep bounds arithmetic exact but truncate sub-unit sweep
/// parameters, so collision times come back as `0` or `1`.
pub trait Scalar:
    Copy + Debug + Default + Display + PartialOrd + Signed + NumCast + Bounded
{
}

impl<T> Scalar for T where
    T: Copy + Debug + Default + Display + PartialOrd + Signed + NumCast + Bounded
{
}

/// `2` in the element domain.
pub(crate) fn two<T: Scalar>() -> T {
    T::one() + T::one()
}

/// Convert into the `f64` measure space used for square roots and rendering.
pub(crate) fn to_measure<T: Scalar>(v: T) -> f64 {
    v.to_f64().expect("scalar representable as f64")
}

/// Convert back from measure space.
///
/// # Panics
///
/// Panics when the value cannot be represented in `T` (overflow or NaN).
/// Numeric domain errors are fatal at this boundary.
pub(crate) fn from_measure<T: Scalar>(v: f64) -> T {
    T::from(v).expect("measure value representable in the scalar type")
}

pub(crate) fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

pub(crate) fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_in_each_domain() {
        assert_eq!(two::<f32>(), 2.0);
        assert_eq!(two::<f64>(), 2.0);
        assert_eq!(two::<i32>(), 2);
        assert_eq!(two::<i64>(), 2);
    }

    #[test]
    fn test_measure_round_trip() {
        assert_eq!(from_measure::<f32>(to_measure(1.5_f32)), 1.5);
        assert_eq!(from_measure::<i32>(to_measure(7_i32)), 7);
    }

    #[test]
    #[should_panic(expected = "measure value representable")]
    fn test_measure_nan_is_fatal() {
        let _: i32 = from_measure(f64::NAN);
    }

    #[test]
    fn test_partial_ord_helpers() {
        assert_eq!(min(3, 5), 3);
        assert_eq!(max(3, 5), 5);
        assert_eq!(min(-1.5, -2.5), -2.5);
        assert_eq!(max(-1.5, -2.5), -1.5);
    }
}
