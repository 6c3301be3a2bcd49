// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Mul, MulAssign};

use crate::converter::AxisTriad;
use crate::point::Point3;
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::Vector3;

/// Rigid reference frame: origin, orientation and the derived axis triad.
///
/// The triad is derived from the orientation on every path that sets or
/// composes the orientation ([`Basis::set_orientation`], [`Basis::rotate`],
/// `*`, `*=`).
///
/// [`Basis::set_axis_x`] is the one path that goes the other way: it builds
/// the triad from a single direction and leaves the orientation untouched,
/// so [`Basis::orientation`] is stale until
/// [`Basis::sync_orientation_from_axes`] is called.
#[derive(Debug, Copy, Clone)]
pub struct Basis<S = f64> {
    origin: Point3<S>,
    orientation: Quaternion<S>,
    axes: AxisTriad<S>,
}

impl<S: Scalar> Basis<S> {
    /// Frame at `origin` with the given orientation; axes are derived.
    pub fn new(origin: Point3<S>, orientation: Quaternion<S>) -> Self {
        Self {
            origin,
            orientation,
            axes: AxisTriad::from_quaternion(&orientation),
        }
    }

    /// Origin of the frame in world coordinates.
    pub fn origin(&self) -> Point3<S> {
        self.origin
    }

    /// Orientation quaternion.
    pub fn orientation(&self) -> Quaternion<S> {
        self.orientation
    }

    /// The axis triad.
    pub fn axes(&self) -> AxisTriad<S> {
        self.axes
    }

    /// Local X axis.
    pub fn axis_x(&self) -> Vector3<S> {
        self.axes.x
    }

    /// Local Y axis.
    pub fn axis_y(&self) -> Vector3<S> {
        self.axes.y
    }

    /// Local Z axis.
    pub fn axis_z(&self) -> Vector3<S> {
        self.axes.z
    }

    /// Moves the origin to `origin`.
    pub fn set_origin(&mut self, origin: Point3<S>) {
        self.origin = origin;
    }

    /// Replaces the orientation and re-derives the axes.
    pub fn set_orientation(&mut self, orientation: Quaternion<S>) {
        self.orientation = orientation;
        self.axes = AxisTriad::from_quaternion(&orientation);
    }

    /// Builds the triad from a new X direction.
    ///
    /// `e1` is normalised; Y is chosen perpendicular to it by the
    /// zero-component rule below and normalised; Z is `X × Y`. The
    /// orientation quaternion is **not** updated.
    ///
    /// Y rule, with `(x, y, z)` the normalised X axis:
    /// - at most one component zero: `(y·z, x·z, −2·x·y)`
    /// - only `x` non-zero: `(0, x, 0)`
    /// - only `y` non-zero: `(0, 0, y)`
    /// - otherwise (only `z` non-zero, or all zero): `(z, 0, 0)`
    pub fn set_axis_x(&mut self, e1: &Vector3<S>) {
        let ex = e1.normalized();
        let zero = S::zero();
        let (x, y, z) = (ex.x(), ex.y(), ex.z());
        let zeros = [x, y, z].iter().filter(|c| **c == zero).count();
        let mut ey = if zeros <= 1 {
            let two = S::one() + S::one();
            Vector3::new(y * z, x * z, -two * x * y)
        } else if x != zero {
            Vector3::new(zero, x, zero)
        } else if y != zero {
            Vector3::new(zero, zero, y)
        } else {
            Vector3::new(z, zero, zero)
        };
        ey.normalize();
        self.axes = AxisTriad {
            x: ex,
            y: ey,
            z: ex.cross(&ey),
        };
    }

    /// Re-derives the orientation from the current axis triad.
    ///
    /// The explicit axes→quaternion path; needed after
    /// [`Basis::set_axis_x`] when the orientation is read afterwards.
    pub fn sync_orientation_from_axes(&mut self) {
        self.orientation = self.axes.to_quaternion();
    }

    /// Moves the origin by `v`.
    pub fn translate(&mut self, v: &Vector3<S>) {
        self.origin.translate(v);
    }

    /// Right-multiplies the orientation by `q` (a rotation in the frame's own
    /// axes) and re-derives the axes.
    pub fn rotate(&mut self, q: &Quaternion<S>) {
        self.orientation *= *q;
        self.axes = AxisTriad::from_quaternion(&self.orientation);
    }

    /// Components of world vector `v` in this frame.
    pub fn local_vector(&self, v: &Vector3<S>) -> Vector3<S> {
        Vector3::new(v.dot(&self.axes.x), v.dot(&self.axes.y), v.dot(&self.axes.z))
    }

    /// World vector whose components in this frame are `v`.
    pub fn global_vector(&self, v: &Vector3<S>) -> Vector3<S> {
        self.axes.x * v.x() + self.axes.y * v.y() + self.axes.z * v.z()
    }

    /// Coordinates of world point `p` in this frame.
    pub fn local_point(&self, p: &Point3<S>) -> Point3<S> {
        let v = *p - self.origin;
        Point3::new(self.axes.x.dot(&v), self.axes.y.dot(&v), self.axes.z.dot(&v))
    }

    /// World point whose coordinates in this frame are `p`.
    pub fn global_point(&self, p: &Point3<S>) -> Point3<S> {
        self.origin + self.global_vector(&p.to_vector())
    }
}

impl<S: Scalar> Default for Basis<S> {
    fn default() -> Self {
        Self::new(Point3::origin(), Quaternion::identity())
    }
}

impl<S: Scalar> PartialEq for Basis<S> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.orientation == other.orientation
            && self.axes == other.axes
    }
}

impl<S: Scalar> Add<Vector3<S>> for Basis<S> {
    type Output = Self;
    fn add(mut self, rhs: Vector3<S>) -> Self {
        self.translate(&rhs);
        self
    }
}

impl<S: Scalar> AddAssign<Vector3<S>> for Basis<S> {
    fn add_assign(&mut self, rhs: Vector3<S>) {
        self.translate(&rhs);
    }
}

impl<S: Scalar> Mul<Quaternion<S>> for Basis<S> {
    type Output = Self;
    fn mul(mut self, rhs: Quaternion<S>) -> Self {
        self.rotate(&rhs);
        self
    }
}

impl<S: Scalar> MulAssign<Quaternion<S>> for Basis<S> {
    fn mul_assign(&mut self, rhs: Quaternion<S>) {
        self.rotate(&rhs);
    }
}
