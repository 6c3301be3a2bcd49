// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::{nearly_equal, Scalar};

/// 3D vector used for directions, velocities, forces and torques.
///
/// * Components are world-space or body-space depending on the caller; a
///   [`crate::Basis`] converts between the two.
/// * Equality is epsilon-tolerant: components may differ by at most
///   [`Scalar::epsilon`].
/// * Division by a scalar is unchecked; dividing by zero follows IEEE rules.
#[derive(Debug, Copy, Clone, Default)]
pub struct Vector3<S = f64> {
    data: [S; 3],
}

impl<S: Scalar> Vector3<S> {
    /// Creates a vector from components.
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { data: [x, y, z] }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(S::zero(), S::zero(), S::zero())
    }

    /// Unit vector along +X.
    pub fn unit_x() -> Self {
        Self::new(S::one(), S::zero(), S::zero())
    }

    /// Unit vector along +Y.
    pub fn unit_y() -> Self {
        Self::new(S::zero(), S::one(), S::zero())
    }

    /// Unit vector along +Z.
    pub fn unit_z() -> Self {
        Self::new(S::zero(), S::zero(), S::one())
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [S; 3] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// Overwrites the X component.
    pub fn set_x(&mut self, x: S) {
        self.data[0] = x;
    }

    /// Overwrites the Y component.
    pub fn set_y(&mut self, y: S) {
        self.data[1] = y;
    }

    /// Overwrites the Z component.
    pub fn set_z(&mut self, z: S) {
        self.data[2] = z;
    }

    /// Overwrites all three components.
    pub fn set(&mut self, x: S, y: S, z: S) {
        self.data = [x, y, z];
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> S {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product with another vector (`self × other`).
    pub fn cross(&self, other: &Self) -> Self {
        let (ax, ay, az) = (self.x(), self.y(), self.z());
        let (bx, by, bz) = (other.x(), other.y(), other.z());
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> S {
        (self.x() * self.x() + self.y() * self.y() + self.z() * self.z()).sqrt()
    }

    /// Scales the vector to unit length in place.
    ///
    /// A vector whose norm is exactly zero is left unchanged; "no direction"
    /// is a legitimate state, not an error.
    pub fn normalize(&mut self) {
        let n = self.norm();
        if n != S::zero() {
            for c in &mut self.data {
                *c /= n;
            }
        }
    }

    /// Returns a unit-length copy (see [`Vector3::normalize`]).
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    fn map(self, f: impl Fn(S) -> S) -> Self {
        Self::new(f(self.x()), f(self.y()), f(self.z()))
    }

    fn zip(self, other: Self, f: impl Fn(S, S) -> S) -> Self {
        Self::new(
            f(self.x(), other.x()),
            f(self.y(), other.y()),
            f(self.z(), other.z()),
        )
    }
}

impl<S: Scalar> PartialEq for Vector3<S> {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| nearly_equal(*a, *b))
    }
}

impl<S: Scalar> From<[S; 3]> for Vector3<S> {
    fn from(value: [S; 3]) -> Self {
        Self { data: value }
    }
}

impl<S: Scalar> Add for Vector3<S> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl<S: Scalar> Sub for Vector3<S> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl<S: Scalar> Neg for Vector3<S> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<S: Scalar> Mul<S> for Vector3<S> {
    type Output = Self;
    fn mul(self, rhs: S) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<S: Scalar> Div<S> for Vector3<S> {
    type Output = Self;
    fn div(self, rhs: S) -> Self {
        self.map(|a| a / rhs)
    }
}

impl<S: Scalar> AddAssign for Vector3<S> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Vector3<S> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign<S> for Vector3<S> {
    fn mul_assign(&mut self, rhs: S) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign<S> for Vector3<S> {
    fn div_assign(&mut self, rhs: S) {
        *self = *self / rhs;
    }
}

macro_rules! scalar_times_vector {
    ($($t:ty),*) => {$(
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;
            fn mul(self, rhs: Vector3<$t>) -> Vector3<$t> {
                rhs * self
            }
        }
    )*};
}

scalar_times_vector!(f32, f64);
