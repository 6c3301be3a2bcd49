// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised by fallible algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// Matrix inversion attempted on a matrix whose determinant is exactly zero.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,
    /// Matrix divided by a scalar that is exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors raised while reading the text layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input ended before all scalars of an entity were read.
    #[error("unexpected end of input while reading {entity}: expected {expected} scalars, found {found}")]
    UnexpectedEnd {
        /// Entity being decoded (e.g. `"quaternion"`).
        entity: &'static str,
        /// Scalars that entity needs.
        expected: usize,
        /// Scalars actually available.
        found: usize,
    },
    /// A token could not be read as a scalar.
    #[error("invalid scalar {token:?} at token {index}")]
    InvalidScalar {
        /// Offending token.
        token: String,
        /// Zero-based position of the token in the input.
        index: usize,
    },
    /// Tokens remain after the entity was fully read.
    #[error("unexpected trailing input at token {index}: {token:?}")]
    TrailingInput {
        /// First unread token.
        token: String,
        /// Zero-based position of that token.
        index: usize,
    },
}
