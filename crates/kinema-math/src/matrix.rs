// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Mul, MulAssign};

use crate::error::MathError;
use crate::scalar::{nearly_equal, Scalar};
use crate::vector::Vector3;

/// Row-major 3×3 matrix, identity by default.
///
/// Holds inertia tensors and their inverses. No invariant is kept beyond
/// storage: arithmetic may produce a singular matrix, which only surfaces
/// when [`Matrix3::inverse`] is called.
///
/// # Examples
/// ```
/// use kinema_math::{Matrix3, Vector3};
/// let m = Matrix3::diagonal(2.0, 4.0, 8.0);
/// let inv = m.inverse().unwrap();
/// assert_eq!(inv * Vector3::new(2.0, 4.0, 8.0), Vector3::new(1.0, 1.0, 1.0));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Matrix3<S = f64> {
    rows: [[S; 3]; 3],
}

impl<S: Scalar> Matrix3<S> {
    /// Creates a matrix from rows.
    pub const fn from_rows(rows: [[S; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        Self::diagonal(S::one(), S::one(), S::one())
    }

    /// Matrix with all nine elements zero.
    pub fn zero() -> Self {
        Self::from_rows([[S::zero(); 3]; 3])
    }

    /// Diagonal matrix `diag(a, b, c)`.
    pub fn diagonal(a: S, b: S, c: S) -> Self {
        let z = S::zero();
        Self::from_rows([[a, z, z], [z, b, z], [z, z, c]])
    }

    /// Returns the rows as nested arrays.
    pub fn to_rows(self) -> [[S; 3]; 3] {
        self.rows
    }

    /// Element at `(row, col)`. Panics when an index is out of `0..3`.
    pub fn element(&self, row: usize, col: usize) -> S {
        self.rows[row][col]
    }

    /// Overwrites element `(row, col)`. Panics when an index is out of `0..3`.
    pub fn set_element(&mut self, row: usize, col: usize, value: S) {
        self.rows[row][col] = value;
    }

    /// Row `i` as a vector.
    pub fn row(&self, i: usize) -> Vector3<S> {
        Vector3::from(self.rows[i])
    }

    /// Column `j` as a vector.
    pub fn column(&self, j: usize) -> Vector3<S> {
        Vector3::new(self.rows[0][j], self.rows[1][j], self.rows[2][j])
    }

    /// Overwrites row `i`.
    pub fn set_row(&mut self, i: usize, v: &Vector3<S>) {
        self.rows[i] = v.to_array();
    }

    /// Overwrites column `j`.
    pub fn set_column(&mut self, j: usize, v: &Vector3<S>) {
        let [x, y, z] = v.to_array();
        self.rows[0][j] = x;
        self.rows[1][j] = y;
        self.rows[2][j] = z;
    }

    /// Determinant by cofactor expansion (rule of Sarrus).
    pub fn determinant(&self) -> S {
        let m = &self.rows;
        m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
            - m[0][2] * m[1][1] * m[2][0]
            - m[1][2] * m[2][1] * m[0][0]
            - m[2][2] * m[1][0] * m[0][1]
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut t = *self;
        for i in 0..3 {
            t.set_column(i, &self.row(i));
        }
        t
    }

    /// Matrix of cofactors: element `(i, j)` is `(-1)^(i+j)` times the minor
    /// obtained by deleting row `i` and column `j`.
    pub fn cofactor(&self) -> Self {
        let m = &self.rows;
        Self::from_rows([
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                -(m[1][0] * m[2][2] - m[1][2] * m[2][0]),
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
            ],
            [
                -(m[0][1] * m[2][2] - m[0][2] * m[2][1]),
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                -(m[0][0] * m[2][1] - m[0][1] * m[2][0]),
            ],
            [
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
                -(m[0][0] * m[1][2] - m[0][2] * m[1][0]),
                m[0][0] * m[1][1] - m[1][0] * m[0][1],
            ],
        ])
    }

    /// Adjugate: the transposed cofactor matrix.
    pub fn adjugate(&self) -> Self {
        self.cofactor().transpose()
    }

    /// Inverse as `adjugate / determinant`.
    ///
    /// # Errors
    /// Returns [`MathError::SingularMatrix`] when the determinant is exactly
    /// zero. Nearly singular matrices are inverted as-is.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == S::zero() {
            return Err(MathError::SingularMatrix);
        }
        self.adjugate().checked_div(det)
    }

    /// Divides every element by `divisor`.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] when `divisor` is exactly zero.
    pub fn checked_div(&self, divisor: S) -> Result<Self, MathError> {
        if divisor == S::zero() {
            return Err(MathError::DivisionByZero);
        }
        let mut out = *self;
        for row in &mut out.rows {
            for e in row.iter_mut() {
                *e /= divisor;
            }
        }
        Ok(out)
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                out.rows[i][j] = self.row(i).dot(&rhs.column(j));
            }
        }
        out
    }

    /// Row-times-vector product `self * v`.
    pub fn transform(&self, v: &Vector3<S>) -> Vector3<S> {
        let m = &self.rows;
        Vector3::new(
            m[0][0] * v.x() + m[0][1] * v.y() + m[0][2] * v.z(),
            m[1][0] * v.x() + m[1][1] * v.y() + m[1][2] * v.z(),
            m[2][0] * v.x() + m[2][1] * v.y() + m[2][2] * v.z(),
        )
    }
}

impl<S: Scalar> Default for Matrix3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> PartialEq for Matrix3<S> {
    fn eq(&self, other: &Self) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| nearly_equal(*a, *b))
    }
}

impl<S: Scalar> From<[[S; 3]; 3]> for Matrix3<S> {
    fn from(rows: [[S; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl<S: Scalar> Mul for Matrix3<S> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<S: Scalar> Mul<Vector3<S>> for Matrix3<S> {
    type Output = Vector3<S>;
    fn mul(self, rhs: Vector3<S>) -> Vector3<S> {
        self.transform(&rhs)
    }
}

impl<S: Scalar> Mul<S> for Matrix3<S> {
    type Output = Self;
    fn mul(mut self, rhs: S) -> Self {
        self *= rhs;
        self
    }
}

impl<S: Scalar> MulAssign<S> for Matrix3<S> {
    fn mul_assign(&mut self, rhs: S) {
        for row in &mut self.rows {
            for e in row.iter_mut() {
                *e *= rhs;
            }
        }
    }
}
