// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar abstraction for kinema math.
//!
//! Every algebraic type in this crate is generic over a [`Scalar`] so the
//! same code can run on `f64` (the reference lane used by golden data) or
//! `f32`. A higher-precision backend only has to implement this trait.
//!
//! Determinism contract:
//! - Transcendentals and square roots go through `libm` so results do not
//!   depend on the host C library.
//! - Arithmetic is plain IEEE; no fused multiply-add is introduced.

use core::fmt::{Debug, LowerExp};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

/// Real number backend for vectors, quaternions and matrices.
///
/// Arithmetic operators are required through the standard operator traits so
/// generic code can use `+`, `-`, `*`, `/` and unary `-` directly.
/// `LowerExp` and `FromStr` are required by the text codec.
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + LowerExp
    + FromStr
{
    /// Returns the additive identity (zero).
    fn zero() -> Self;

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    /// Machine epsilon of the representation.
    ///
    /// Used as the fixed tolerance of the epsilon-tolerant equality on
    /// vectors, points, quaternions and matrices.
    fn epsilon() -> Self;

    /// Archimedes' constant in this representation.
    fn pi() -> Self;

    /// Converts an `f64` literal into this scalar type.
    fn from_f64(value: f64) -> Self;

    /// Converts this scalar value to `f64` for interop and diagnostics.
    fn to_f64(self) -> f64;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root. Negative inputs yield NaN.
    fn sqrt(self) -> Self;

    /// Sine of `self` (radians).
    fn sin(self) -> Self;

    /// Cosine of `self` (radians).
    fn cos(self) -> Self;

    /// Larger of two values; returns `self` when `other` is NaN.
    fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn epsilon() -> Self {
        Self::EPSILON
    }

    fn pi() -> Self {
        core::f64::consts::PI
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn abs(self) -> Self {
        libm::fabs(self)
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn epsilon() -> Self {
        Self::EPSILON
    }

    fn pi() -> Self {
        core::f32::consts::PI
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as Self
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn abs(self) -> Self {
        libm::fabsf(self)
    }

    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    fn sin(self) -> Self {
        libm::sinf(self)
    }

    fn cos(self) -> Self {
        libm::cosf(self)
    }
}

/// Epsilon-tolerant scalar comparison shared by the algebraic types.
///
/// Two values are equal when their absolute difference does not exceed
/// [`Scalar::epsilon`]. NaN never compares equal.
pub(crate) fn nearly_equal<S: Scalar>(a: S, b: S) -> bool {
    (a - b).abs() <= S::epsilon()
}
