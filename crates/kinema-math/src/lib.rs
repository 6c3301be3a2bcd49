// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! kinema-math: algebra for rigid-body kinematics.
//!
//! Vectors, points, quaternions and 3×3 matrices generic over a [`Scalar`],
//! the axis-triad/quaternion converter, rigid frames ([`Basis`]) and the
//! fixed-layout text codec used for persistence and golden tests.
//!
//! Conventions:
//! - Quaternions are `(real, i, j, k)`; the default is the identity.
//! - Rotations compose by right-multiplication (`orientation * q` applies `q`
//!   in the body's current frame).
//! - Degenerate normalisations are silent no-ops; singular inversions and
//!   exact-zero matrix divisions return [`MathError`].
#![forbid(unsafe_code)]

/// Fixed-layout text formatter and parser.
pub mod codec;

mod basis;
mod converter;
mod error;
mod matrix;
mod point;
mod quaternion;
mod scalar;
mod vector;

pub use basis::Basis;
pub use codec::{TextCodec, TextDecode, TextEncode, TextWriter, TokenReader};
pub use converter::AxisTriad;
pub use error::{MathError, ParseError};
pub use matrix::Matrix3;
pub use point::Point3;
pub use quaternion::Quaternion;
pub use scalar::Scalar;
pub use vector::Vector3;
