// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Conversion between an orthonormal axis triad and a unit quaternion.

use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::Vector3;

/// Three axis vectors of a frame, i.e. the rows of its rotation matrix.
///
/// [`AxisTriad::from_quaternion`] and [`AxisTriad::to_quaternion`] are inverse
/// to each other for unit quaternions with a non-negative real part.
#[derive(Debug, Copy, Clone)]
pub struct AxisTriad<S = f64> {
    /// Local X axis expressed in world coordinates.
    pub x: Vector3<S>,
    /// Local Y axis expressed in world coordinates.
    pub y: Vector3<S>,
    /// Local Z axis expressed in world coordinates.
    pub z: Vector3<S>,
}

impl<S: Scalar> AxisTriad<S> {
    /// World axes `(e_x, e_y, e_z)`.
    pub fn canonical() -> Self {
        Self {
            x: Vector3::unit_x(),
            y: Vector3::unit_y(),
            z: Vector3::unit_z(),
        }
    }

    /// Closed-form rotation-matrix rows of `q`.
    ///
    /// `q` is used as given; it should be a unit quaternion.
    pub fn from_quaternion(q: &Quaternion<S>) -> Self {
        let two = S::one() + S::one();
        let one = S::one();
        let (r, i, j, k) = (q.real(), q.i(), q.j(), q.k());
        Self {
            x: Vector3::new(
                one - two * j * j - two * k * k,
                two * i * j + two * k * r,
                two * i * k - two * j * r,
            ),
            y: Vector3::new(
                two * i * j - two * k * r,
                one - two * i * i - two * k * k,
                two * j * k + two * i * r,
            ),
            z: Vector3::new(
                two * i * k + two * j * r,
                two * j * k - two * i * r,
                one - two * j * j - two * i * i,
            ),
        }
    }

    /// Recovers the unit quaternion whose rotation matrix has these rows.
    ///
    /// Each imaginary magnitude comes from the diagonal alone, so the
    /// extraction has no branch on the trace. Components whose square falls
    /// below `max_square · ε` are flushed to zero to cancel quadratic
    /// round-off; signs are then taken from the skew-symmetric part. The
    /// returned quaternion always has a non-negative real part.
    pub fn to_quaternion(&self) -> Quaternion<S> {
        let (e1, e2, e3) = (&self.x, &self.y, &self.z);
        let zero = S::zero();
        let one = S::one();
        let four = S::from_f64(4.0);

        let mut q1 = (zero.max(-(e2.y() + e3.z() - e1.x() - one)) / four).sqrt();
        let mut q2 = (zero.max(-(-e2.y() + e3.z() + e1.x() - one)) / four).sqrt();
        let mut q3 = (zero.max(-(e2.y() - e3.z() + e1.x() - one)) / four).sqrt();
        let mut q0 = zero.max(one - q1 * q1 - q2 * q2 - q3 * q3).sqrt();

        let max_square = [q1, q2, q3]
            .iter()
            .fold(q0 * q0, |acc, q| acc.max(*q * *q));
        let tolerance = max_square * S::epsilon();
        for q in [&mut q0, &mut q1, &mut q2, &mut q3] {
            if *q * *q < tolerance {
                *q = zero;
            }
        }

        if e2.z() - e3.y() < zero {
            q1 = -q1;
        }
        if e3.x() - e1.z() < zero {
            q2 = -q2;
        }
        if e1.y() - e2.x() < zero {
            q3 = -q3;
        }
        Quaternion::new(q0, q1, q2, q3)
    }
}

impl<S: Scalar> Default for AxisTriad<S> {
    fn default() -> Self {
        Self::canonical()
    }
}

impl<S: Scalar> PartialEq for AxisTriad<S> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl<S: Scalar> From<&Quaternion<S>> for AxisTriad<S> {
    fn from(q: &Quaternion<S>) -> Self {
        Self::from_quaternion(q)
    }
}
