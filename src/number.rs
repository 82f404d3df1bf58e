// src/number.rs

//! # Numeric Abstraction
//!
//! The pipeline is generic over its scalar so the same code runs with
//! `f32`, `f64` or fixed-point types on targets without an FPU.

use core::fmt::Debug;
use core::ops::Neg;
use num_traits::{FromPrimitive, Num};

/// Custom trait to encapsulate base number requirements.
pub trait Number:
    Num + Neg<Output = Self> + FromPrimitive + PartialOrd + Copy + Default + Debug
{
    /// Saturates the value symmetrically to `[-limit, limit]`.
    fn bound(self, limit: Self) -> Self {
        if self > limit {
            limit
        } else if self < -limit {
            -limit
        } else {
            self
        }
    }

    /// Absolute value.
    fn magnitude(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }
}

impl<T> Number for T where
    T: Num + Neg<Output = T> + FromPrimitive + PartialOrd + Copy + Default + Debug
{
}

/// Saturates `val` to `[-limit, limit]`.
///
/// Exact at the boundaries: a value equal to `limit` or `-limit` is returned
/// unchanged.
///
/// ```
/// use gimbal_stabilization::bound;
///
/// assert_eq!(1.0, bound(3.5_f32, 1.0));
/// assert_eq!(-1.0, bound(-3.5_f32, 1.0));
/// assert_eq!(0.25, bound(0.25_f32, 1.0));
/// ```
pub fn bound<T: Number>(val: T, limit: T) -> T {
    val.bound(limit)
}
