// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]
use core::f64::consts::PI;

use kinema_math::{Matrix3, ParseError, TextCodec, Vector3};
use kinema_solid::{Axis, Form, Nature, Shape, Solid, SolidCodec, SolidState};

const SOLID_GOLDEN: &str = "3.1415926535897932e-09\t1.5707963267948966e-09\t7.8539816339744829e-10\n\
1.0000000000000000e+00\t5.0000000000000001e-09\t-2.5000000000000001e-09\t1.0000000000000001e-09\n\
3.1415926535897928e-05\t1.5707963267948964e-05\t7.8539816339744820e-06\n\
1.0000000000000000e-04\t-5.0000000000000002e-05\t2.0000000000000002e-05\n\
3.1415926535897931e+00\t1.5707963267948966e+00\t7.8539816339744828e-01\n\
3.1415926535897931e+00\t-1.5707963267948966e+00\t6.2831853071795862e-01";

fn any_shape() -> Shape {
    Shape::custom(10.0, Matrix3::diagonal(PI, PI, PI), Nature::Unknown, Form::Unknown)
        .expect("isotropic inertia is invertible")
}

/// One semi-implicit step without clearing the accumulators.
fn stepped_solid() -> Solid {
    let mut s = Solid::new(any_shape());
    s.set_force(Vector3::new(PI, PI / 2.0, PI / 4.0));
    s.set_momentum(Vector3::new(PI, -PI / 2.0, PI / 5.0));
    s.update_velocities(1e-4);
    s.update_position(1e-4);
    s
}

fn assert_same_state(a: &SolidState, b: &SolidState) {
    assert_eq!(a.basis.origin().to_array(), b.basis.origin().to_array());
    assert_eq!(a.basis.orientation().to_array(), b.basis.orientation().to_array());
    assert_eq!(a.velocity.to_array(), b.velocity.to_array());
    assert_eq!(a.angular_velocity.to_array(), b.angular_velocity.to_array());
    assert_eq!(a.force.to_array(), b.force.to_array());
    assert_eq!(a.momentum.to_array(), b.momentum.to_array());
}

#[test]
fn solid_golden() {
    let text = TextCodec::default().format(&stepped_solid());
    assert_eq!(text, SOLID_GOLDEN);
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn solid_golden_parses_back() {
    let parsed = TextCodec::default()
        .parse_solid(SOLID_GOLDEN, any_shape())
        .expect("golden parses");
    assert_same_state(&parsed.state(), &stepped_solid().state());
    assert_eq!(parsed.mass(), 10.0);
}

#[test]
fn compact_round_trip_is_close() {
    let codec = TextCodec::compact();
    let stepped = stepped_solid();
    let parsed = codec
        .parse_solid(&codec.format(&stepped), any_shape())
        .expect("round trip");
    let (a, b) = (parsed.state(), stepped.state());
    assert!((a.velocity - b.velocity).norm() <= 1e-19);
    assert!((a.force - b.force).norm() <= 1e-14);
    assert_eq!(a.basis, b.basis);
}

#[test]
fn load_overwrites_state_but_keeps_locks() {
    let mut solid = Solid::new(any_shape());
    solid.lock_translation(true, false, false);
    TextCodec::default()
        .load_solid(&mut solid, SOLID_GOLDEN)
        .expect("golden loads");
    assert_same_state(&solid.state(), &stepped_solid().state());
    assert!(solid.is_translation_locked(Axis::X));
}

#[test]
fn failed_load_leaves_solid_untouched() {
    let mut solid = stepped_solid();
    let before = solid.state();

    // Valid basis and velocity, then the input stops.
    let truncated: String = SOLID_GOLDEN.lines().take(3).collect::<Vec<_>>().join("\n");
    let err = TextCodec::default()
        .load_solid(&mut solid, &truncated)
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEnd {
            entity: "vector",
            expected: 3,
            found: 0
        }
    );
    assert_same_state(&solid.state(), &before);

    let garbage = SOLID_GOLDEN.replace("6.2831853071795862e-01", "six");
    let err = TextCodec::default().load_solid(&mut solid, &garbage).unwrap_err();
    assert!(matches!(err, ParseError::InvalidScalar { index: 18, .. }));
    assert_same_state(&solid.state(), &before);

    let trailing = format!("{SOLID_GOLDEN}\n1.0");
    let err = TextCodec::default().load_solid(&mut solid, &trailing).unwrap_err();
    assert!(matches!(err, ParseError::TrailingInput { index: 19, .. }));
    assert_same_state(&solid.state(), &before);
}

#[test]
fn state_text_matches_solid_text() {
    let solid = stepped_solid();
    let codec = TextCodec::default();
    assert_eq!(codec.format(&solid.state()), codec.format(&solid));
    let state: SolidState = codec.parse(SOLID_GOLDEN).expect("golden parses");
    assert_same_state(&state, &solid.state());
}
