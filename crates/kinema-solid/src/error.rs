// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use kinema_math::MathError;
use thiserror::Error;

/// Errors raised while building a [`crate::Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The inertia tensor could not be inverted.
    #[error("inertia tensor cannot be inverted: {0}")]
    Inertia(#[from] MathError),
    /// A custom shape was given a mass of exactly zero.
    #[error("shape mass is zero")]
    ZeroMass,
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A loaded value is outside its accepted range.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}
