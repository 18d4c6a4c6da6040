//! Element types for [`Matrix`](crate::Matrix).
//!
//! A matrix may hold integers or floats, but every computation that can
//! produce a non-integral value runs in `f64`. [`Scalar::to_f64`] is the
//! single promotion point at the API boundary.

use core::fmt;
use core::ops::{Add, Mul, Sub};

/// Base trait for every element type storable in a matrix.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Promote to `f64`.
    ///
    /// 64-bit integers beyond 2^53 lose precision, as with an `as` cast.
    fn to_f64(self) -> f64;

    /// Addition that reports integer overflow as `None`. Floats never
    /// overflow here; they saturate to infinity.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Whether the type is a floating-point type. Used by `Display` to
    /// decide whether a precision flag applies.
    fn is_float() -> bool {
        false
    }
}

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
            #[inline]
            fn is_float() -> bool {
                true
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
            #[inline]
            #[allow(clippy::cast_lossless)]
            fn to_f64(self) -> f64 {
                self as f64
            }
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_add(self, rhs)
            }
        }
    };
}

impl_scalar_int!(i8);
impl_scalar_int!(i16);
impl_scalar_int!(i32);
impl_scalar_int!(i64);
impl_scalar_int!(isize);
impl_scalar_int!(u8);
impl_scalar_int!(u16);
impl_scalar_int!(u32);
impl_scalar_int!(u64);
impl_scalar_int!(usize);
