// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::scalar::{nearly_equal, Scalar};
use crate::vector::Vector3;

/// Position in 3D space.
///
/// Points only translate by vectors; the difference of two points is a
/// [`Vector3`]. Equality uses the same epsilon tolerance as vectors.
#[derive(Debug, Copy, Clone, Default)]
pub struct Point3<S = f64> {
    data: [S; 3],
}

impl<S: Scalar> Point3<S> {
    /// Creates a point from coordinates.
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self { data: [x, y, z] }
    }

    /// The origin `(0, 0, 0)`.
    pub fn origin() -> Self {
        Self::new(S::zero(), S::zero(), S::zero())
    }

    /// Returns the coordinates as an array.
    pub fn to_array(self) -> [S; 3] {
        self.data
    }

    /// X coordinate.
    pub fn x(&self) -> S {
        self.data[0]
    }

    /// Y coordinate.
    pub fn y(&self) -> S {
        self.data[1]
    }

    /// Z coordinate.
    pub fn z(&self) -> S {
        self.data[2]
    }

    /// Overwrites all three coordinates.
    pub fn set(&mut self, x: S, y: S, z: S) {
        self.data = [x, y, z];
    }

    /// Moves the point by `v`.
    pub fn translate(&mut self, v: &Vector3<S>) {
        self.data[0] += v.x();
        self.data[1] += v.y();
        self.data[2] += v.z();
    }

    /// Position vector from the origin to this point.
    pub fn to_vector(self) -> Vector3<S> {
        Vector3::from(self.data)
    }
}

impl<S: Scalar> PartialEq for Point3<S> {
    fn eq(&self, other: &Self) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| nearly_equal(*a, *b))
    }
}

impl<S: Scalar> From<[S; 3]> for Point3<S> {
    fn from(value: [S; 3]) -> Self {
        Self { data: value }
    }
}

impl<S: Scalar> Add<Vector3<S>> for Point3<S> {
    type Output = Self;
    fn add(mut self, rhs: Vector3<S>) -> Self {
        self.translate(&rhs);
        self
    }
}

impl<S: Scalar> Sub for Point3<S> {
    type Output = Vector3<S>;
    fn sub(self, rhs: Self) -> Vector3<S> {
        Vector3::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl<S: Scalar> AddAssign<Vector3<S>> for Point3<S> {
    fn add_assign(&mut self, rhs: Vector3<S>) {
        self.translate(&rhs);
    }
}

impl<S: Scalar> SubAssign<Vector3<S>> for Point3<S> {
    fn sub_assign(&mut self, rhs: Vector3<S>) {
        self.translate(&-rhs);
    }
}
