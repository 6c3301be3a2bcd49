// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Rigid body state and the time-stepping protocol.

use core::mem;

use kinema_math::{Basis, Matrix3, Quaternion, Scalar, Vector3};
use tracing::trace;

use crate::integrator::Integrator;
use crate::shape::Shape;

/// Body axis selector for lock queries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// World X (translation) or local X (rotation).
    X,
    /// World Y (translation) or local Y (rotation).
    Y,
    /// World Z (translation) or local Z (rotation).
    Z,
}

/// Kinematic state of a [`Solid`] without its shape.
///
/// This is what the text layout carries; see [`crate::SolidCodec`].
#[derive(Debug, Copy, Clone)]
pub struct SolidState<S = f64> {
    /// Position and orientation.
    pub basis: Basis<S>,
    /// Linear velocity, world frame.
    pub velocity: Vector3<S>,
    /// Angular velocity, body frame.
    pub angular_velocity: Vector3<S>,
    /// Accumulated force, world frame.
    pub force: Vector3<S>,
    /// Accumulated momentum (torque), world frame.
    pub momentum: Vector3<S>,
}

impl<S: Scalar> Default for SolidState<S> {
    fn default() -> Self {
        Self {
            basis: Basis::default(),
            velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            force: Vector3::zero(),
            momentum: Vector3::zero(),
        }
    }
}

/// A rigid body: one owned [`Shape`], a frame, velocities, force/momentum
/// accumulators and per-axis locks.
///
/// A step is `add_force`/`add_momentum`, then [`Solid::update_velocities`],
/// then [`Solid::update_position`], then
/// [`Solid::reset_force_and_momentum`]; [`Solid::step`] runs that sequence.
/// The ordering is the caller's contract when driving the pieces directly.
#[derive(Debug)]
pub struct Solid<S = f64> {
    shape: Shape<S>,
    state: SolidState<S>,
    // 1 = free, 0 = locked; multiplied into the velocities.
    translation_lock: Vector3<S>,
    rotation_lock: Vector3<S>,
}

impl<S: Scalar> Solid<S> {
    /// Solid at rest at the world origin with identity orientation.
    pub fn new(shape: Shape<S>) -> Self {
        Self::with_state(shape, SolidState::default())
    }

    /// Solid with the given kinematic state; all axes free.
    pub fn with_state(shape: Shape<S>, state: SolidState<S>) -> Self {
        let free = Vector3::new(S::one(), S::one(), S::one());
        Self {
            shape,
            state,
            translation_lock: free,
            rotation_lock: free,
        }
    }

    /// The owned shape.
    pub fn shape(&self) -> &Shape<S> {
        &self.shape
    }

    /// Swaps in a new shape and hands back the previous one.
    pub fn set_shape(&mut self, shape: Shape<S>) -> Shape<S> {
        mem::replace(&mut self.shape, shape)
    }

    /// Consumes the solid and returns its shape.
    pub fn into_shape(self) -> Shape<S> {
        self.shape
    }

    /// Mass of the shape.
    pub fn mass(&self) -> S {
        self.shape.mass()
    }

    /// Inertia tensor of the shape.
    pub fn inertia(&self) -> &Matrix3<S> {
        self.shape.inertia()
    }

    /// Inverse inertia tensor of the shape.
    pub fn inverted_inertia(&self) -> &Matrix3<S> {
        self.shape.inverted_inertia()
    }

    /// Snapshot of the kinematic state.
    pub fn state(&self) -> SolidState<S> {
        self.state
    }

    /// Replaces the whole kinematic state. Locks and shape are kept.
    pub fn restore(&mut self, state: SolidState<S>) {
        self.state = state;
    }

    /// Position and orientation.
    pub fn basis(&self) -> &Basis<S> {
        &self.state.basis
    }

    /// Mutable access to the frame.
    pub fn basis_mut(&mut self) -> &mut Basis<S> {
        &mut self.state.basis
    }

    /// Replaces the frame.
    pub fn set_basis(&mut self, basis: Basis<S>) {
        self.state.basis = basis;
    }

    /// Linear velocity.
    pub fn velocity(&self) -> Vector3<S> {
        self.state.velocity
    }

    /// Sets the linear velocity.
    pub fn set_velocity(&mut self, velocity: Vector3<S>) {
        self.state.velocity = velocity;
    }

    /// Angular velocity in body axes.
    pub fn angular_velocity(&self) -> Vector3<S> {
        self.state.angular_velocity
    }

    /// Sets the angular velocity (body axes).
    pub fn set_angular_velocity(&mut self, angular_velocity: Vector3<S>) {
        self.state.angular_velocity = angular_velocity;
    }

    /// Accumulated force.
    pub fn force(&self) -> Vector3<S> {
        self.state.force
    }

    /// Overwrites the force accumulator.
    pub fn set_force(&mut self, force: Vector3<S>) {
        self.state.force = force;
    }

    /// Accumulated momentum.
    pub fn momentum(&self) -> Vector3<S> {
        self.state.momentum
    }

    /// Overwrites the momentum accumulator.
    pub fn set_momentum(&mut self, momentum: Vector3<S>) {
        self.state.momentum = momentum;
    }

    /// Adds `f` to the force accumulator.
    pub fn add_force(&mut self, f: &Vector3<S>) {
        self.state.force += *f;
    }

    /// Adds `m` to the momentum accumulator.
    pub fn add_momentum(&mut self, m: &Vector3<S>) {
        self.state.momentum += *m;
    }

    /// Zeroes both accumulators.
    pub fn reset_force_and_momentum(&mut self) {
        self.state.force = Vector3::zero();
        self.state.momentum = Vector3::zero();
    }

    /// Locks (`true`) or frees (`false`) translation per world axis.
    ///
    /// Locks act on the velocity after it is integrated, so the locked
    /// component reads zero after the next [`Solid::update_velocities`].
    pub fn lock_translation(&mut self, x: bool, y: bool, z: bool) {
        self.translation_lock = lock_mask(x, y, z);
    }

    /// Locks (`true`) or frees (`false`) rotation per body axis.
    pub fn lock_rotation(&mut self, x: bool, y: bool, z: bool) {
        self.rotation_lock = lock_mask(x, y, z);
    }

    /// Whether translation along `axis` is locked.
    pub fn is_translation_locked(&self, axis: Axis) -> bool {
        component(&self.translation_lock, axis) == S::zero()
    }

    /// Whether rotation about `axis` is locked.
    pub fn is_rotation_locked(&self, axis: Axis) -> bool {
        component(&self.rotation_lock, axis) == S::zero()
    }

    /// Integrates the accumulators into the velocities over `dt`.
    pub fn update_velocities(&mut self, dt: S) {
        trace!(?dt, "update velocities");
        let st = &mut self.state;
        st.velocity += st.force * dt / self.shape.mass();
        let local = st.basis.local_vector(&st.momentum);
        st.angular_velocity += (*self.shape.inverted_inertia() * local) * dt;
        st.velocity = apply_lock(&st.velocity, &self.translation_lock);
        st.angular_velocity = apply_lock(&st.angular_velocity, &self.rotation_lock);
    }

    /// Moves the frame by the current velocities over `dt`.
    pub fn update_position(&mut self, dt: S) {
        trace!(?dt, "update position");
        let st = &mut self.state;
        st.basis += st.velocity * dt;
        st.basis *= Quaternion::from_angular_velocity(&(st.angular_velocity * dt));
    }

    /// One full step with `integrator`, then clears the accumulators.
    pub fn step(&mut self, dt: S, integrator: Integrator) {
        match integrator {
            Integrator::SemiImplicitEuler => {
                self.update_velocities(dt);
                self.update_position(dt);
            }
            Integrator::Midpoint => {
                let half = dt / (S::one() + S::one());
                self.update_position(half);
                self.update_velocities(dt);
                self.update_position(half);
            }
        }
        self.reset_force_and_momentum();
    }
}

fn lock_mask<S: Scalar>(x: bool, y: bool, z: bool) -> Vector3<S> {
    let factor = |locked: bool| if locked { S::zero() } else { S::one() };
    Vector3::new(factor(x), factor(y), factor(z))
}

fn component<S: Scalar>(v: &Vector3<S>, axis: Axis) -> S {
    match axis {
        Axis::X => v.x(),
        Axis::Y => v.y(),
        Axis::Z => v.z(),
    }
}

fn apply_lock<S: Scalar>(v: &Vector3<S>, lock: &Vector3<S>) -> Vector3<S> {
    Vector3::new(v.x() * lock.x(), v.y() * lock.y(), v.z() * lock.z())
}
