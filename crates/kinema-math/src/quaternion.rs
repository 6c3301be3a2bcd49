// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::scalar::{nearly_equal, Scalar};
use crate::vector::Vector3;

/// Quaternion stored as `(real, i, j, k)`.
///
/// * Rotations are unit quaternions, but unit norm is not re-established on
///   every mutation: call [`Quaternion::normalize`] over long composition
///   chains.
/// * `*` is the Hamilton product and is the only way to compose rotations.
///   `+` and `-` are raw component-wise 4-vector arithmetic.
/// * The default value is the identity rotation.
#[derive(Debug, Copy, Clone)]
pub struct Quaternion<S = f64> {
    data: [S; 4],
}

impl<S: Scalar> Quaternion<S> {
    /// Creates a quaternion from its real part and imaginary components.
    pub const fn new(real: S, i: S, j: S, k: S) -> Self {
        Self {
            data: [real, i, j, k],
        }
    }

    /// Returns the identity quaternion `(1, 0, 0, 0)`.
    pub fn identity() -> Self {
        Self::new(S::one(), S::zero(), S::zero(), S::zero())
    }

    /// Exponential map of an angular-velocity vector.
    ///
    /// With `a = |w|`, returns `(cos(a/2), sin(a/2)·w/a)`: the rotation
    /// accumulated over one unit of time at rate `w`. A zero vector yields
    /// the identity.
    ///
    /// # Examples
    /// ```
    /// use kinema_math::{Quaternion, Vector3};
    /// let q = Quaternion::from_angular_velocity(&Vector3::new(0.0, 0.0, 0.0));
    /// assert_eq!(q, Quaternion::identity());
    /// ```
    pub fn from_angular_velocity(w: &Vector3<S>) -> Self {
        let a = w.norm();
        if a == S::zero() {
            return Self::identity();
        }
        let two = S::one() + S::one();
        let sa = (a / two).sin();
        let ca = (a / two).cos();
        Self::new(ca, w.x() / a * sa, w.y() / a * sa, w.z() / a * sa)
    }

    /// Returns the components as `[real, i, j, k]`.
    pub fn to_array(self) -> [S; 4] {
        self.data
    }

    /// Real (scalar) part.
    pub fn real(&self) -> S {
        self.data[0]
    }

    /// First imaginary component.
    pub fn i(&self) -> S {
        self.data[1]
    }

    /// Second imaginary component.
    pub fn j(&self) -> S {
        self.data[2]
    }

    /// Third imaginary component.
    pub fn k(&self) -> S {
        self.data[3]
    }

    /// Overwrites all four components.
    pub fn set(&mut self, real: S, i: S, j: S, k: S) {
        self.data = [real, i, j, k];
    }

    /// Imaginary part as a vector `(i, j, k)`.
    pub fn imaginary(&self) -> Vector3<S> {
        Vector3::new(self.i(), self.j(), self.k())
    }

    /// Conjugate: imaginary components negated.
    pub fn conjugate(&self) -> Self {
        Self::new(self.real(), -self.i(), -self.j(), -self.k())
    }

    /// Euclidean norm of the four components.
    pub fn norm(&self) -> S {
        (self.real() * self.real() + self.i() * self.i() + self.j() * self.j() + self.k() * self.k())
            .sqrt()
    }

    /// Divides all components by the norm, in place.
    ///
    /// A quaternion with zero norm is left unchanged.
    pub fn normalize(&mut self) {
        let n = self.norm();
        if n != S::zero() {
            for c in &mut self.data {
                *c /= n;
            }
        }
    }

    /// Returns a normalised copy (see [`Quaternion::normalize`]).
    pub fn normalized(&self) -> Self {
        let mut q = *self;
        q.normalize();
        q
    }

    /// Hamilton product `self * other` (`i·j = k`).
    ///
    /// Right-multiplying an orientation by `other` applies `other` in the
    /// body's current frame. The product is not commutative.
    pub fn multiply(&self, other: &Self) -> Self {
        let (a0, a1, a2, a3) = (self.real(), self.i(), self.j(), self.k());
        let (b0, b1, b2, b3) = (other.real(), other.i(), other.j(), other.k());
        Self::new(
            a0 * b0 - a1 * b1 - a2 * b2 - a3 * b3,
            a0 * b1 + a1 * b0 + a2 * b3 - a3 * b2,
            a0 * b2 - a1 * b3 + a2 * b0 + a3 * b1,
            a0 * b3 + a1 * b2 - a2 * b1 + a3 * b0,
        )
    }

    /// Rotates `v` by this quaternion (`q · v · q̄`).
    ///
    /// Assumes a unit quaternion. Rotating the world axes this way yields
    /// the rows of [`crate::AxisTriad::from_quaternion`].
    pub fn rotate_vector(&self, v: &Vector3<S>) -> Vector3<S> {
        let p = Self::new(S::zero(), v.x(), v.y(), v.z());
        self.multiply(&p).multiply(&self.conjugate()).imaginary()
    }
}

impl<S: Scalar> Default for Quaternion<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> PartialEq for Quaternion<S> {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| nearly_equal(*a, *b))
    }
}

/// Exponential map; see [`Quaternion::from_angular_velocity`].
impl<S: Scalar> From<Vector3<S>> for Quaternion<S> {
    fn from(w: Vector3<S>) -> Self {
        Self::from_angular_velocity(&w)
    }
}

/// Components taken verbatim as `[real, i, j, k]`; no normalisation.
impl<S: Scalar> From<[S; 4]> for Quaternion<S> {
    fn from(value: [S; 4]) -> Self {
        Self { data: value }
    }
}

impl<S: Scalar> Mul for Quaternion<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<S: Scalar> MulAssign for Quaternion<S> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl<S: Scalar> Add for Quaternion<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.real() + rhs.real(),
            self.i() + rhs.i(),
            self.j() + rhs.j(),
            self.k() + rhs.k(),
        )
    }
}

impl<S: Scalar> Sub for Quaternion<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.real() - rhs.real(),
            self.i() - rhs.i(),
            self.j() - rhs.j(),
            self.k() - rhs.k(),
        )
    }
}

impl<S: Scalar> AddAssign for Quaternion<S> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Quaternion<S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
