//! Generic equality for checks: exact, tolerance-based, and elementwise.

use std::ops::Sub;

/// Exact equality through the type's own `PartialEq`.
pub fn equals<T: PartialEq + ?Sized>(lhs: &T, rhs: &T) -> bool {
    lhs == rhs
}

/// `|lhs - rhs| < epsilon`, strict. A difference exactly equal to
/// `epsilon` is not equal. NaN operands never compare equal.
///
/// Floating-point only: integer impls go through `abs_diff`, which cannot
/// overflow.
fn within_tolerance<T>(lhs: T, rhs: T, epsilon: T) -> bool
where
    T: Copy + PartialOrd + Sub<Output = T>,
{
    let diff = if lhs >= rhs {
        lhs - rhs
    } else if rhs > lhs {
        rhs - lhs
    } else {
        return false;
    };
    diff < epsilon
}

/// Elementwise exact equality. Sequences of different length are unequal;
/// two empty sequences are equal. Stops at the first mismatching index.
pub fn equals_seq<T: PartialEq>(lhs: &[T], rhs: &[T]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| equals(l, r))
}

/// Elementwise tolerance equality with the same short-circuit rules as
/// [`equals_seq`].
pub fn equals_seq_eps<T: ApproxEq>(lhs: &[T], rhs: &[T], epsilon: &T::Epsilon) -> bool {
    lhs.len() == rhs.len()
        && lhs
            .iter()
            .zip(rhs)
            .all(|(l, r)| l.approx_eq(r, epsilon))
}

/// Equality within an epsilon.
pub trait ApproxEq {
    /// Tolerance type; a scalar for sequences of scalars.
    type Epsilon: ?Sized;

    /// Whether `self` and `other` differ by strictly less than `epsilon`.
    fn approx_eq(&self, other: &Self, epsilon: &Self::Epsilon) -> bool;
}

/// Tolerance form of [`equals`].
pub fn equals_eps<T: ApproxEq + ?Sized>(lhs: &T, rhs: &T, epsilon: &T::Epsilon) -> bool {
    lhs.approx_eq(rhs, epsilon)
}

macro_rules! approx_float {
    ($($ty:ty),*) => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                fn approx_eq(&self, other: &Self, epsilon: &Self) -> bool {
                    within_tolerance(*self, *other, *epsilon)
                }
            }
        )*
    };
}

// A non-positive epsilon admits nothing.
macro_rules! approx_signed {
    ($($ty:ty),*) => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                fn approx_eq(&self, other: &Self, epsilon: &Self) -> bool {
                    *epsilon > 0 && self.abs_diff(*other) < epsilon.unsigned_abs()
                }
            }
        )*
    };
}

macro_rules! approx_unsigned {
    ($($ty:ty),*) => {
        $(
            impl ApproxEq for $ty {
                type Epsilon = $ty;

                fn approx_eq(&self, other: &Self, epsilon: &Self) -> bool {
                    self.abs_diff(*other) < *epsilon
                }
            }
        )*
    };
}

approx_float!(f32, f64);
approx_signed!(i8, i16, i32, i64, i128, isize);
approx_unsigned!(u8, u16, u32, u64, u128, usize);

impl<T: ApproxEq> ApproxEq for [T] {
    type Epsilon = T::Epsilon;

    fn approx_eq(&self, other: &Self, epsilon: &Self::Epsilon) -> bool {
        equals_seq_eps(self, other, epsilon)
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    type Epsilon = T::Epsilon;

    fn approx_eq(&self, other: &Self, epsilon: &Self::Epsilon) -> bool {
        equals_seq_eps(self, other, epsilon)
    }
}

impl<T: ApproxEq> ApproxEq for Vec<T> {
    type Epsilon = T::Epsilon;

    fn approx_eq(&self, other: &Self, epsilon: &Self::Epsilon) -> bool {
        equals_seq_eps(self, other, epsilon)
    }
}

impl<T: ApproxEq + ?Sized> ApproxEq for &T {
    type Epsilon = T::Epsilon;

    fn approx_eq(&self, other: &Self, epsilon: &Self::Epsilon) -> bool {
        (**self).approx_eq(*other, epsilon)
    }
}
