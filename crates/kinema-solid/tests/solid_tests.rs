// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
use core::f64::consts::PI;

use kinema_math::{Basis, Matrix3, Point3, Quaternion, Vector3};
use kinema_solid::{Axis, Form, Integrator, Nature, Shape, Solid};
use proptest::prelude::*;

const MASS: f64 = 10.0;

fn any_shape() -> Shape {
    Shape::custom(MASS, Matrix3::diagonal(PI, PI, PI), Nature::Unknown, Form::Unknown)
        .expect("isotropic inertia is invertible")
}

fn close(a: f64, b: f64, tol: f64) {
    let diff = (a - b).abs();
    assert!(diff <= tol, "expected {b}, got {a} (diff {diff})");
}

fn close_vec(a: Vector3, b: Vector3, tol: f64) {
    for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
        close(x, y, tol);
    }
}

fn close_quat(a: Quaternion, b: Quaternion, tol: f64) {
    for (x, y) in a.to_array().into_iter().zip(b.to_array()) {
        close(x, y, tol);
    }
}

fn force() -> Vector3 {
    Vector3::new(PI, PI / 2.0, PI / 4.0)
}

#[test]
fn new_solid_is_at_rest() {
    let solid = Solid::new(any_shape());
    assert_eq!(*solid.basis(), Basis::default());
    assert_eq!(solid.velocity().to_array(), [0.0; 3]);
    assert_eq!(solid.angular_velocity().to_array(), [0.0; 3]);
    assert_eq!(solid.force().to_array(), [0.0; 3]);
    assert_eq!(solid.momentum().to_array(), [0.0; 3]);
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        assert!(!solid.is_translation_locked(axis));
        assert!(!solid.is_rotation_locked(axis));
    }
    assert_eq!(solid.mass(), MASS);
    assert_eq!(*solid.inertia(), Matrix3::diagonal(PI, PI, PI));
    assert_eq!(*solid.inverted_inertia(), Matrix3::diagonal(1.0 / PI, 1.0 / PI, 1.0 / PI));
}

#[test]
fn position_follows_velocity() {
    let mut solid = Solid::new(any_shape());
    let dt = 1e-4;
    solid.set_velocity(force());
    solid.update_position(dt);
    let o = solid.basis().origin();
    assert_eq!(o.to_array(), [PI * dt, PI / 2.0 * dt, PI / 4.0 * dt]);
    assert_eq!(solid.basis().orientation(), Quaternion::identity());
}

#[test]
fn velocity_follows_force() {
    let mut solid = Solid::new(any_shape());
    let dt = 1e-4;
    solid.set_force(force());
    solid.update_velocities(dt);
    close_vec(solid.velocity(), force() * dt / MASS, 1e-20);
    assert_eq!(solid.basis().origin(), Point3::origin());

    solid.update_position(dt);
    close_vec(solid.basis().origin().to_vector(), force() * dt * dt / MASS, 1e-24);
}

#[test]
fn midpoint_scheme_is_exact_for_constant_force() {
    let mut solid = Solid::new(any_shape());
    let dt = 1e-4;
    let mut t = 0.0;
    for _ in 0..10 {
        t += dt;
        solid.add_force(&force());
        solid.step(dt, Integrator::Midpoint);
    }
    close_vec(solid.velocity(), force() * t / MASS, 1e-18);
    close_vec(solid.basis().origin().to_vector(), force() * t * t / 2.0 / MASS, 1e-21);
}

#[test]
fn semi_implicit_euler_overshoots_by_half_a_step() {
    let mut solid = Solid::new(any_shape());
    let dt = 1e-3;
    let n = 10;
    for _ in 0..n {
        solid.add_force(&force());
        solid.step(dt, Integrator::SemiImplicitEuler);
    }
    let t = dt * f64::from(n);
    // Σ k·dt² = T·(T + dt)/2
    close_vec(solid.basis().origin().to_vector(), force() * (t * (t + dt) / 2.0) / MASS, 1e-17);
}

#[test]
fn step_resets_accumulators() {
    let mut solid = Solid::new(any_shape());
    solid.add_force(&force());
    solid.add_momentum(&Vector3::new(1.0, 0.0, 0.0));
    solid.step(1e-3, Integrator::default());
    assert_eq!(solid.force(), Vector3::zero());
    assert_eq!(solid.momentum(), Vector3::zero());
    assert_ne!(solid.velocity(), Vector3::zero());
}

#[test]
fn single_axis_rotations() {
    let c6 = (PI / 6.0).cos();
    let s6 = (PI / 6.0).sin();
    let cases = [
        (
            Vector3::new(PI / 6.0, 0.0, 0.0),
            Quaternion::new((PI / 12.0).cos(), (PI / 12.0).sin(), 0.0, 0.0),
            [Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, c6, s6), Vector3::new(0.0, -s6, c6)],
        ),
        (
            Vector3::new(0.0, PI / 6.0, 0.0),
            Quaternion::new((PI / 12.0).cos(), 0.0, (PI / 12.0).sin(), 0.0),
            [Vector3::new(c6, 0.0, -s6), Vector3::new(0.0, 1.0, 0.0), Vector3::new(s6, 0.0, c6)],
        ),
        (
            Vector3::new(0.0, 0.0, PI / 6.0),
            Quaternion::new((PI / 12.0).cos(), 0.0, 0.0, (PI / 12.0).sin()),
            [Vector3::new(c6, s6, 0.0), Vector3::new(-s6, c6, 0.0), Vector3::new(0.0, 0.0, 1.0)],
        ),
    ];
    for (w, orientation, [ex, ey, ez]) in cases {
        let mut solid = Solid::new(any_shape());
        solid.set_angular_velocity(w);
        solid.update_position(1.0);
        assert_eq!(solid.angular_velocity(), w);
        close_quat(solid.basis().orientation(), orientation, 1e-15);
        close_vec(solid.basis().axis_x(), ex, 1e-15);
        close_vec(solid.basis().axis_y(), ey, 1e-15);
        close_vec(solid.basis().axis_z(), ez, 1e-15);
    }
}

#[test]
fn half_turns_about_each_axis_return_to_world_axes() {
    let mut solid = Solid::new(any_shape());
    for w in [
        Vector3::new(PI, 0.0, 0.0),
        Vector3::new(0.0, PI, 0.0),
        Vector3::new(0.0, 0.0, PI),
    ] {
        solid.set_angular_velocity(w);
        solid.update_position(1.0);
    }
    close_vec(solid.basis().axis_x(), Vector3::unit_x(), 1e-14);
    close_vec(solid.basis().axis_y(), Vector3::unit_y(), 1e-14);
    close_vec(solid.basis().axis_z(), Vector3::unit_z(), 1e-14);
}

#[test]
fn angular_velocity_follows_momentum() {
    let mut solid = Solid::new(any_shape());
    let m = Vector3::new(PI, -PI / 2.0, PI / 5.0);
    solid.set_momentum(m);
    solid.update_velocities(1.0);
    close_vec(solid.angular_velocity(), m / PI, 1e-15);
}

#[test]
fn momentum_is_taken_in_body_axes() {
    let mut solid = Solid::new(any_shape());
    // Body X points along world Y.
    solid
        .basis_mut()
        .rotate(&Quaternion::from_angular_velocity(&Vector3::new(0.0, 0.0, PI / 2.0)));
    solid.add_momentum(&Vector3::new(0.0, PI, 0.0));
    solid.update_velocities(1.0);
    close_vec(solid.angular_velocity(), Vector3::new(1.0, 0.0, 0.0), 1e-15);
}

#[test]
fn translation_locks_zero_velocity_components() {
    let mut solid = Solid::new(any_shape());
    solid.lock_translation(true, false, true);
    assert!(solid.is_translation_locked(Axis::X));
    assert!(!solid.is_translation_locked(Axis::Y));
    assert!(solid.is_translation_locked(Axis::Z));
    assert!(!solid.is_rotation_locked(Axis::X));

    solid.set_velocity(Vector3::new(1.0, 1.0, 1.0));
    solid.add_force(&force());
    solid.update_velocities(1e-2);
    assert_eq!(solid.velocity().x(), 0.0);
    assert_eq!(solid.velocity().z(), 0.0);
    close(solid.velocity().y(), 1.0 + PI / 2.0 * 1e-2 / MASS, 1e-15);

    solid.lock_translation(false, false, false);
    assert!(!solid.is_translation_locked(Axis::X));
}

#[test]
fn rotation_locks_zero_angular_components() {
    let mut solid = Solid::new(any_shape());
    solid.lock_rotation(false, true, false);
    assert!(solid.is_rotation_locked(Axis::Y));
    solid.add_momentum(&Vector3::new(PI, PI, PI));
    solid.step(1.0, Integrator::SemiImplicitEuler);
    close_vec(solid.angular_velocity(), Vector3::new(1.0, 0.0, 1.0), 1e-15);
}

#[test]
fn reset_is_idempotent() {
    let mut solid = Solid::new(any_shape());
    solid.add_force(&force());
    solid.add_force(&force());
    assert_eq!(solid.force(), force() * 2.0);
    solid.add_momentum(&force());
    solid.reset_force_and_momentum();
    let once = (solid.force(), solid.momentum());
    solid.reset_force_and_momentum();
    assert_eq!((solid.force(), solid.momentum()), once);
    assert_eq!(once, (Vector3::zero(), Vector3::zero()));
}

#[test]
fn shape_can_be_swapped_and_recovered() {
    let mut solid = Solid::new(any_shape());
    let sphere = Shape::sphere(0.01, 2500.0).expect("valid sphere");
    let sphere_mass = sphere.mass();
    let previous = solid.set_shape(sphere);
    assert_eq!(previous.mass(), MASS);
    assert_eq!(solid.mass(), sphere_mass);
    assert_eq!(solid.shape().form(), Form::Sphere);

    let shape = solid.into_shape();
    assert!(shape.as_sphere().is_some());
}

#[test]
fn state_snapshot_and_restore() {
    let mut solid = Solid::new(any_shape());
    solid.add_force(&force());
    solid.step(1e-2, Integrator::Midpoint);
    let snapshot = solid.state();

    solid.add_force(&force());
    solid.step(1e-2, Integrator::Midpoint);
    assert_ne!(solid.velocity(), snapshot.velocity);

    solid.restore(snapshot);
    assert_eq!(solid.velocity(), snapshot.velocity);
    assert_eq!(*solid.basis(), snapshot.basis);

    let mut basis = Basis::default();
    basis.translate(&Vector3::new(1.0, 2.0, 3.0));
    solid.set_basis(basis);
    assert_eq!(solid.basis().origin(), Point3::new(1.0, 2.0, 3.0));
}

proptest! {
    #[test]
    fn locked_components_stay_zero(
        fx in -1.0e3f64..1.0e3,
        fy in -1.0e3f64..1.0e3,
        fz in -1.0e3f64..1.0e3,
        lx: bool,
        ly: bool,
        lz: bool
    ) {
        let mut solid = Solid::new(any_shape());
        solid.lock_translation(lx, ly, lz);
        solid.lock_rotation(lx, ly, lz);
        let v = Vector3::new(fx, fy, fz);
        solid.add_force(&v);
        solid.add_momentum(&v);
        solid.step(1e-3, Integrator::SemiImplicitEuler);

        let lin = solid.velocity().to_array();
        let ang = solid.angular_velocity().to_array();
        for (i, locked) in [lx, ly, lz].into_iter().enumerate() {
            if locked {
                prop_assert_eq!(lin[i], 0.0);
                prop_assert_eq!(ang[i], 0.0);
            }
        }
        prop_assert_eq!(solid.force(), Vector3::zero());
    }
}
