// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Index, IndexMut, Mul, MulAssign};

use crate::error::{DomainError, ShapeError};
use crate::math::{Tolerance, Vector};

/// Square `N`×`N` matrix stored as `N` row vectors.
///
/// - Row-major: [`Matrix::iter`] and the per-size `to_array` flatten rows
///   left-to-right, top-to-bottom, the order graphics interop expects from
///   this crate.
/// - Acts on column vectors: `m.transform(v)` is `M * v`, and
///   `a.matmul(&b)` applied to a vector runs `b` first, then `a`.
/// - [`Matrix::matmul`] is the linear-algebra product; the element-wise
///   product is the separately named [`Matrix::hadamard`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix<const N: usize> {
    rows: [Vector<N>; N],
}

/// 2×2 matrix.
pub type Mat2 = Matrix<2>;
/// 3×3 matrix.
pub type Mat3 = Matrix<3>;
/// 4×4 matrix; also carries the transform and projection builders.
pub type Mat4 = Matrix<4>;

/// Determinant and inverse, implemented per size with closed-form (2×2,
/// 3×3) or elimination (4×4) formulas.
pub trait SquareMatrix: Sized + Copy {
    /// Determinant by explicit cofactor expansion.
    fn determinant(&self) -> f32;

    /// Inverse matrix.
    ///
    /// When [`SquareMatrix::determinant`] is exactly zero the matrix is
    /// returned unchanged; callers that must detect this use
    /// [`SquareMatrix::checked_inverse`] or test the determinant first.
    fn inverse(&self) -> Self;

    /// Inverse, or [`DomainError::Singular`] when the determinant is zero.
    fn checked_inverse(&self) -> Result<Self, DomainError> {
        if self.determinant() == 0.0 {
            return Err(DomainError::Singular);
        }
        Ok(self.inverse())
    }

    /// Returns `true` when the determinant is non-zero.
    fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }
}

impl<const N: usize> Matrix<N> {
    /// Matrix with every element zero.
    pub const ZERO: Self = Self { rows: [Vector::ZERO; N] };

    /// Returns the zero matrix.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns the identity matrix: ones on the diagonal, zero elsewhere.
    pub fn identity() -> Self {
        Self::from_fn(|r, c| if r == c { 1.0 } else { 0.0 })
    }

    /// Builds a matrix from row vectors.
    pub const fn from_rows(rows: [Vector<N>; N]) -> Self {
        Self { rows }
    }

    /// Builds a matrix from nested row arrays.
    pub fn from_row_arrays(rows: [[f32; N]; N]) -> Self {
        Self { rows: rows.map(Vector::from_array) }
    }

    /// Builds a matrix whose element `(r, c)` is `f(r, c)`.
    pub fn from_fn(f: impl Fn(usize, usize) -> f32) -> Self {
        Self {
            rows: core::array::from_fn(|r| Vector::from_array(core::array::from_fn(|c| f(r, c)))),
        }
    }

    /// Builds a matrix from `N * N` row-major values.
    pub fn from_slice(values: &[f32]) -> Result<Self, ShapeError> {
        if values.len() != N * N {
            return Err(ShapeError::LengthMismatch { expected: N * N, actual: values.len() });
        }
        Ok(Self::from_fn(|r, c| values[r * N + c]))
    }

    /// Row `r`.
    pub fn row(&self, r: usize) -> Vector<N> {
        self.rows[r]
    }

    /// All rows.
    pub fn rows(&self) -> &[Vector<N>; N] {
        &self.rows
    }

    /// Column `c`.
    pub fn column(&self, c: usize) -> Vector<N> {
        Vector::from_array(core::array::from_fn(|r| self.rows[r][c]))
    }

    /// Copy with row `r` replaced.
    pub fn with_row(mut self, r: usize, row: Vector<N>) -> Self {
        self.rows[r] = row;
        self
    }

    /// Replaces row `r` in place.
    pub fn set_row(&mut self, r: usize, row: Vector<N>) {
        self.rows[r] = row;
    }

    /// Element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    /// Sets the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.rows[row][col] = value;
    }

    /// Iterates over all elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Flattened row-major elements.
    pub fn data(&self) -> Vec<f32> {
        self.iter().collect()
    }

    /// Swaps rows and columns. Pure permutation, so exact.
    pub fn transpose(&self) -> Self {
        Self::from_fn(|r, c| self.rows[c][r])
    }

    fn map_rows(&self, f: impl Fn(&Vector<N>) -> Vector<N>) -> Self {
        Self { rows: core::array::from_fn(|r| f(&self.rows[r])) }
    }

    fn zip_rows(&self, other: &Self, f: impl Fn(&Vector<N>, &Vector<N>) -> Vector<N>) -> Self {
        Self { rows: core::array::from_fn(|r| f(&self.rows[r], &other.rows[r])) }
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_rows(other, Vector::add)
    }

    /// Element-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_rows(other, Vector::sub)
    }

    /// Element-wise (Hadamard) product. Not the matrix product; see
    /// [`Matrix::matmul`].
    pub fn hadamard(&self, other: &Self) -> Self {
        self.zip_rows(other, Vector::mul_elementwise)
    }

    /// Element-wise quotient.
    pub fn hadamard_div(&self, other: &Self) -> Self {
        self.zip_rows(other, Vector::div_elementwise)
    }

    /// Adds `scalar` to every element.
    pub fn add_scalar(&self, scalar: f32) -> Self {
        self.map_rows(|row| row.add_scalar(scalar))
    }

    /// Subtracts `scalar` from every element.
    pub fn sub_scalar(&self, scalar: f32) -> Self {
        self.map_rows(|row| row.sub_scalar(scalar))
    }

    /// Multiplies every element by `scalar`.
    pub fn scale_elements(&self, scalar: f32) -> Self {
        self.map_rows(|row| row.scale(scalar))
    }

    /// Divides every element by `scalar`.
    pub fn div_scalar(&self, scalar: f32) -> Self {
        self.map_rows(|row| row.div_scalar(scalar))
    }

    /// Element-wise linear interpolation toward `target`.
    pub fn lerp(&self, target: &Self, alpha: f32) -> Self {
        self.zip_rows(target, |a, b| a.lerp(b, alpha))
    }

    /// Matrix product `self * rhs`: element `(r, c)` is the dot product of
    /// row `r` of `self` with column `c` of `rhs`.
    ///
    /// # Examples
    /// ```
    /// use lin_core::math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scaling(2.0, 3.0, 4.0);
    /// assert_eq!(a.matmul(&b), b);
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Self {
        let cols: [Vector<N>; N] = core::array::from_fn(|c| rhs.column(c));
        Self::from_fn(|r, c| self.rows[r].dot(&cols[c]))
    }

    /// Matrix-vector product `M * v`.
    pub fn transform(&self, v: &Vector<N>) -> Vector<N> {
        Vector::from_array(core::array::from_fn(|r| self.rows[r].dot(v)))
    }

    /// Returns `true` when every element is finite.
    pub fn is_finite(&self) -> bool {
        self.rows.iter().all(Vector::is_finite)
    }

    /// Element-wise comparison under `tol`.
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.approx_eq(b, tol))
    }
}

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[[f32; N]; N]> for Matrix<N> {
    fn from(rows: [[f32; N]; N]) -> Self {
        Self::from_row_arrays(rows)
    }
}

impl<const N: usize> TryFrom<&[f32]> for Matrix<N> {
    type Error = ShapeError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = Vector<N>;
    fn index(&self, row: usize) -> &Vector<N> {
        &self.rows[row]
    }
}

impl<const N: usize> IndexMut<usize> for Matrix<N> {
    fn index_mut(&mut self, row: usize) -> &mut Vector<N> {
        &mut self.rows[row]
    }
}

impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.matmul(&rhs)
    }
}

impl<const N: usize> Mul<&Matrix<N>> for Matrix<N> {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self::Output {
        self.matmul(rhs)
    }
}

impl<const N: usize> MulAssign for Matrix<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.matmul(&rhs);
    }
}

impl<const N: usize> MulAssign<&Matrix<N>> for Matrix<N> {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.matmul(rhs);
    }
}

impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        self.transform(&rhs)
    }
}

/// `Mat(a b, c d)`; `{:#}` puts each row on its own line and a precision
/// (`{:.2}`) applies to every element.
impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let multiline = f.alternate();
        f.write_str("Mat(")?;
        if multiline {
            f.write_str("\n")?;
        }
        for (r, row) in self.rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{value:.p$}")?,
                    None => write!(f, "{value}")?,
                }
            }
            if r + 1 < N {
                f.write_str(if multiline { "\n" } else { ", " })?;
            }
        }
        if multiline {
            f.write_str("\n")?;
        }
        f.write_str(")")
    }
}
