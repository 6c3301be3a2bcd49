// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! kinema-solid: rigid bodies on top of `kinema-math`.
//!
//! A [`Shape`] fixes mass and inertia; a [`Solid`] owns one shape and
//! integrates forces and momenta into motion of its [`kinema_math::Basis`].
//!
//! ```
//! use kinema_math::{Matrix3, Vector3};
//! use kinema_solid::{Form, Integrator, Nature, Shape, Solid};
//!
//! let shape = Shape::custom(2.0, Matrix3::identity(), Nature::Unknown, Form::Unknown)?;
//! let mut solid = Solid::new(shape);
//! solid.add_force(&Vector3::new(4.0, 0.0, 0.0));
//! solid.step(0.5, Integrator::SemiImplicitEuler);
//! assert_eq!(solid.velocity(), Vector3::new(1.0, 0.0, 0.0));
//! assert_eq!(solid.force(), Vector3::zero());
//! # Ok::<(), kinema_solid::ShapeError>(())
//! ```
#![forbid(unsafe_code)]

mod codec;
/// Kernel configuration and its storage port.
pub mod config;
mod error;
mod integrator;
mod shape;
mod solid;

pub use codec::SolidCodec;
pub use config::{ConfigService, ConfigStore, FsConfigStore, KernelConfig, MemoryConfigStore};
pub use error::{ConfigError, ShapeError};
pub use integrator::Integrator;
pub use shape::{Disk, Form, Nature, Primitive, Rectangle, Shape, Sphere};
pub use solid::{Axis, Solid, SolidState};
