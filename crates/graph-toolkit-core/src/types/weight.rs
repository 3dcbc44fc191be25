//! Vertex label and edge weight abstractions.
//!
//! Vertices are opaque labels: anything cloneable, hashable and totally
//! ordered. The ordering is only used to normalise undirected edges so that
//! `(u, v)` and `(v, u)` collapse onto the same key.
//!
//! Weights cover the integer and floating point types the algorithms are run
//! with. Integer addition saturates so that long relaxation chains can never
//! wrap around into small (or negative) distances.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// Label of a graph vertex.
///
/// Blanket-implemented for every type meeting the bounds, so `String`, `&str`,
/// `char` and integer ids all work out of the box.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Numeric weight attached to an edge.
pub trait Weight: Copy + PartialEq + PartialOrd + Debug {
    /// Additive identity, used for the source distance and self paths.
    fn zero() -> Self;

    /// Adds two weights; integer implementations saturate instead of wrapping.
    fn add_weight(self, other: Self) -> Self;

    /// True for weights strictly below zero.
    fn is_negative(self) -> bool;

    /// Total order used by priority queues and edge sorting.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_signed_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn zero() -> Self { 0 }
            #[inline]
            fn add_weight(self, other: Self) -> Self { self.saturating_add(other) }
            #[inline]
            fn is_negative(self) -> bool { self < 0 }
            #[inline]
            fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }
        }
    )*};
}

macro_rules! impl_unsigned_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn zero() -> Self { 0 }
            #[inline]
            fn add_weight(self, other: Self) -> Self { self.saturating_add(other) }
            #[inline]
            fn is_negative(self) -> bool { false }
            #[inline]
            fn compare(&self, other: &Self) -> Ordering { self.cmp(other) }
        }
    )*};
}

impl_signed_weight!(i32, i64);
impl_unsigned_weight!(u32, u64);

impl Weight for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn add_weight(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn is_negative(self) -> bool {
        self < 0.0
    }

    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Sums a sequence of weights starting from [`Weight::zero`].
pub fn sum_weights<W: Weight>(weights: impl IntoIterator<Item = W>) -> W {
    weights.into_iter().fold(W::zero(), W::add_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_addition_saturates() {
        assert_eq!(i64::MAX.add_weight(1), i64::MAX);
        assert_eq!(u32::MAX.add_weight(7), u32::MAX);
        assert_eq!(3i32.add_weight(-5), -2);
    }

    #[test]
    fn negativity_per_type() {
        assert!((-1i64).is_negative());
        assert!(!0i32.is_negative());
        assert!(!5u64.is_negative());
        assert!((-0.5f64).is_negative());
    }

    #[test]
    fn float_compare_is_total() {
        assert_eq!(1.5f64.compare(&2.0), Ordering::Less);
        assert_eq!(f64::INFINITY.compare(&1e300), Ordering::Greater);
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        assert_eq!(sum_weights(Vec::<i64>::new()), 0);
        assert_eq!(sum_weights([1.0f64, 2.5]), 3.5);
    }
}
