// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-layout text codec.
//!
//! Layout rules:
//! - scalars are written in scientific notation with an explicitly signed,
//!   at least two-digit exponent (`-2.500000000000000e-09`);
//! - scalars on a line are separated by `\t`, lines by `\n`, no trailing
//!   newline;
//! - a vector or point is one line `x y z`, a quaternion one line
//!   `real i j k`, a matrix three lines (one per row), a basis two lines
//!   (origin, orientation).
//!
//! Parsing reads whitespace-delimited scalars in the same order, so line
//! structure is not significant on input.

use crate::basis::Basis;
use crate::error::ParseError;
use crate::matrix::Matrix3;
use crate::point::Point3;
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::Vector3;

/// Default digits after the decimal point: lossless for `f64`.
pub const DEFAULT_PRECISION: usize = 16;

/// Digits after the decimal point of the compact (`%.15e`) layout.
pub const COMPACT_PRECISION: usize = 15;

/// Formats a single scalar with `precision` mantissa digits.
///
/// # Examples
/// ```
/// use kinema_math::codec::format_scalar;
/// assert_eq!(format_scalar(1.0e-4_f64, 3), "1.000e-04");
/// assert_eq!(format_scalar(-31.5_f64, 2), "-3.15e+01");
/// ```
pub fn format_scalar<S: Scalar>(value: S, precision: usize) -> String {
    let raw = format!("{value:.precision$e}");
    // NaN and infinities have no exponent.
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Line-oriented sink used by [`TextEncode`] implementations.
#[derive(Debug)]
pub struct TextWriter {
    out: String,
    precision: usize,
}

impl TextWriter {
    /// Empty writer producing `precision` mantissa digits per scalar.
    pub fn new(precision: usize) -> Self {
        Self {
            out: String::new(),
            precision,
        }
    }

    /// Appends one line of tab-separated scalars.
    pub fn line<S: Scalar>(&mut self, values: &[S]) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for (n, v) in values.iter().enumerate() {
            if n > 0 {
                self.out.push('\t');
            }
            self.out.push_str(&format_scalar(*v, self.precision));
        }
    }

    /// Consumes the writer and returns the text.
    pub fn finish(self) -> String {
        self.out
    }
}

/// Cursor over the whitespace-delimited tokens of an input.
#[derive(Debug)]
pub struct TokenReader<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> TokenReader<'a> {
    /// Splits `text` on whitespace.
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace().collect(),
            pos: 0,
        }
    }

    /// Reads `N` scalars for `entity`.
    ///
    /// # Errors
    /// [`ParseError::UnexpectedEnd`] when fewer than `N` tokens remain;
    /// [`ParseError::InvalidScalar`] when a token is not a number. The cursor
    /// does not advance on error.
    pub fn scalars<S: Scalar, const N: usize>(
        &mut self,
        entity: &'static str,
    ) -> Result<[S; N], ParseError> {
        let remaining = self.tokens.len() - self.pos;
        if remaining < N {
            return Err(ParseError::UnexpectedEnd {
                entity,
                expected: N,
                found: remaining,
            });
        }
        let mut out = [S::zero(); N];
        for (n, slot) in out.iter_mut().enumerate() {
            let index = self.pos + n;
            let token = self.tokens[index];
            *slot = token.parse().map_err(|_| ParseError::InvalidScalar {
                token: token.to_owned(),
                index,
            })?;
        }
        self.pos += N;
        Ok(out)
    }

    /// Succeeds when every token has been consumed.
    ///
    /// # Errors
    /// [`ParseError::TrailingInput`] naming the first unread token.
    pub fn finish(&self) -> Result<(), ParseError> {
        match self.tokens.get(self.pos) {
            Some(token) => Err(ParseError::TrailingInput {
                token: (*token).to_owned(),
                index: self.pos,
            }),
            None => Ok(()),
        }
    }
}

/// Types with a text layout.
pub trait TextEncode {
    /// Appends this value's lines to `w`.
    fn encode(&self, w: &mut TextWriter);
}

/// Types that can be read back from their text layout.
pub trait TextDecode: Sized {
    /// Reads one value from `r`.
    fn decode(r: &mut TokenReader<'_>) -> Result<Self, ParseError>;
}

/// Formatter/parser pair parameterised by mantissa precision.
///
/// # Examples
/// ```
/// use kinema_math::{TextCodec, Vector3};
/// let codec = TextCodec::compact();
/// let text = codec.format(&Vector3::new(1.0, -0.5, 0.0));
/// assert_eq!(text, "1.000000000000000e+00\t-5.000000000000000e-01\t0.000000000000000e+00");
/// let back: Vector3 = codec.parse(&text).unwrap();
/// assert_eq!(back, Vector3::new(1.0, -0.5, 0.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextCodec {
    precision: usize,
}

impl TextCodec {
    /// Codec writing `precision` digits after the decimal point.
    pub const fn with_precision(precision: usize) -> Self {
        Self { precision }
    }

    /// The `%.15e` layout (16 significant digits).
    pub const fn compact() -> Self {
        Self::with_precision(COMPACT_PRECISION)
    }

    /// Mantissa digits after the decimal point.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Fresh writer configured with this codec's precision.
    pub fn writer(&self) -> TextWriter {
        TextWriter::new(self.precision)
    }

    /// Formats `value` in its text layout.
    pub fn format<T: TextEncode + ?Sized>(&self, value: &T) -> String {
        let mut w = self.writer();
        value.encode(&mut w);
        w.finish()
    }

    /// Parses a complete value; trailing tokens are an error.
    ///
    /// # Errors
    /// Any [`ParseError`] raised while decoding, or
    /// [`ParseError::TrailingInput`].
    pub fn parse<T: TextDecode>(&self, text: &str) -> Result<T, ParseError> {
        let mut r = TokenReader::new(text);
        let value = T::decode(&mut r)?;
        r.finish()?;
        Ok(value)
    }
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }
}

impl<S: Scalar> TextEncode for Vector3<S> {
    fn encode(&self, w: &mut TextWriter) {
        w.line(&self.to_array());
    }
}

impl<S: Scalar> TextDecode for Vector3<S> {
    fn decode(r: &mut TokenReader<'_>) -> Result<Self, ParseError> {
        r.scalars::<S, 3>("vector").map(Self::from)
    }
}

impl<S: Scalar> TextEncode for Point3<S> {
    fn encode(&self, w: &mut TextWriter) {
        w.line(&self.to_array());
    }
}

impl<S: Scalar> TextDecode for Point3<S> {
    fn decode(r: &mut TokenReader<'_>) -> Result<Self, ParseError> {
        r.scalars::<S, 3>("point").map(Self::from)
    }
}

impl<S: Scalar> TextEncode for Quaternion<S> {
    fn encode(&self, w: &mut TextWriter) {
        w.line(&self.to_array());
    }
}

impl<S: Scalar> TextDecode for Quaternion<S> {
    fn decode(r: &mut TokenReader<'_>) -> Result<Self, ParseError> {
        r.scalars::<S, 4>("quaternion").map(Self::from)
    }
}

impl<S: Scalar> TextEncode for Matrix3<S> {
    fn encode(&self, w: &mut TextWriter) {
        for row in self.to_rows() {
            w.line(&row);
        }
    }
}

impl<S: Scalar> TextDecode for Matrix3<S> {
    fn decode(r: &mut TokenReader<'_>) -> Result<Self, ParseError> {
        let flat = r.scalars::<S, 9>("matrix")?;
        let mut rows = [[S::zero(); 3]; 3];
        for (n, v) in flat.into_iter().enumerate() {
            rows[n / 3][n % 3] = v;
        }
        Ok(Self::from_rows(rows))
    }
}

impl<S: Scalar> TextEncode for Basis<S> {
    fn encode(&self, w: &mut TextWriter) {
        self.origin().encode(w);
        self.orientation().encode(w);
    }
}

/// Reads origin then orientation; the axes are re-derived from the
/// orientation.
impl<S: Scalar> TextDecode for Basis<S> {
    fn decode(r: &mut TokenReader<'_>) -> Result<Self, ParseError> {
        let origin = Point3::decode(r)?;
        let orientation = Quaternion::decode(r)?;
        Ok(Self::new(origin, orientation))
    }
}
