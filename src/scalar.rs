//! Scalar element types stored in a [`NumericBuffer`](crate::buffer::NumericBuffer)

use rand::distr::uniform::SampleUniform;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Numeric element type a buffer can hold and reduce over.
///
/// Accumulation on integer types wraps on overflow, which keeps integer sums
/// exact and independent of summation order.
pub trait Scalar:
    Copy + PartialOrd + Debug + Display + FromStr + Send + Sync + SampleUniform + 'static
{
    /// Additive identity
    fn zero() -> Self;

    /// Add `rhs` to `self`
    fn accumulate(self, rhs: Self) -> Self;

    /// Divide by an element count, or `None` if `count` is not representable in `Self`
    fn divide_by_count(self, count: usize) -> Option<Self>;

    /// Whether the value is NaN (never true for integers)
    fn is_nan(self) -> bool;
}

macro_rules! impl_scalar_float {
    ($($ty:ty),*) => {$(
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn accumulate(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn divide_by_count(self, count: usize) -> Option<Self> {
                #[allow(clippy::cast_precision_loss)]
                Some(self / count as $ty)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
        }
    )*};
}

macro_rules! impl_scalar_int {
    ($($ty:ty),*) => {$(
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn accumulate(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn divide_by_count(self, count: usize) -> Option<Self> {
                <$ty>::try_from(count)
                    .ok()
                    .filter(|&divisor| divisor != 0)
                    .map(|divisor| self / divisor)
            }

            #[inline]
            fn is_nan(self) -> bool {
                false
            }
        }
    )*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i32, i64, u32, u64);
