// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Solid text layout: origin, orientation, velocity, angular velocity,
//! force, momentum (six lines). The shape is not part of the text.

use kinema_math::{
    Basis, ParseError, Scalar, TextCodec, TextDecode, TextEncode, TextWriter, TokenReader, Vector3,
};
use tracing::debug;

use crate::shape::Shape;
use crate::solid::{Solid, SolidState};

impl<S: Scalar> TextEncode for SolidState<S> {
    fn encode(&self, w: &mut TextWriter) {
        self.basis.encode(w);
        self.velocity.encode(w);
        self.angular_velocity.encode(w);
        self.force.encode(w);
        self.momentum.encode(w);
    }
}

impl<S: Scalar> TextDecode for SolidState<S> {
    fn decode(r: &mut TokenReader<'_>) -> Result<Self, ParseError> {
        Ok(Self {
            basis: Basis::decode(r)?,
            velocity: Vector3::decode(r)?,
            angular_velocity: Vector3::decode(r)?,
            force: Vector3::decode(r)?,
            momentum: Vector3::decode(r)?,
        })
    }
}

impl<S: Scalar> TextEncode for Solid<S> {
    fn encode(&self, w: &mut TextWriter) {
        self.state().encode(w);
    }
}

/// Reading solids through a [`TextCodec`].
///
/// A solid's text carries no shape, so decoding needs either a shape for a
/// fresh solid or an existing solid to load into.
pub trait SolidCodec {
    /// Parses `text` into a new solid owning `shape`, all axes free.
    ///
    /// # Errors
    /// Any [`ParseError`]; `shape` is dropped in that case.
    fn parse_solid<S: Scalar>(&self, text: &str, shape: Shape<S>) -> Result<Solid<S>, ParseError>;

    /// Overwrites the kinematic state of `solid` from `text`.
    ///
    /// Shape and locks are kept. On error `solid` is left unchanged.
    ///
    /// # Errors
    /// Any [`ParseError`].
    fn load_solid<S: Scalar>(&self, solid: &mut Solid<S>, text: &str) -> Result<(), ParseError>;
}

impl SolidCodec for TextCodec {
    fn parse_solid<S: Scalar>(&self, text: &str, shape: Shape<S>) -> Result<Solid<S>, ParseError> {
        let state = self.parse::<SolidState<S>>(text)?;
        debug!(form = ?shape.form(), "solid parsed");
        Ok(Solid::with_state(shape, state))
    }

    fn load_solid<S: Scalar>(&self, solid: &mut Solid<S>, text: &str) -> Result<(), ParseError> {
        let state = self.parse::<SolidState<S>>(text)?;
        solid.restore(state);
        debug!(form = ?solid.shape().form(), "solid state loaded");
        Ok(())
    }
}
