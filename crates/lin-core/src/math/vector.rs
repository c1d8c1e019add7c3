// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use tracing::trace;

use crate::error::{DomainError, ShapeError};
use crate::math::{Tolerance, EPSILON};

/// Fixed-size vector of `N` `f32` components.
///
/// * Components `0..N` alias the named accessors `x`, `y`, `z`, `w` on the
///   dimension-specific aliases [`Vec2`], [`Vec3`] and [`Vec4`].
/// * Values are `Copy`; every method returns a new vector and leaves the
///   receiver untouched. Use the compound assignment operators to update a
///   vector in place.
/// * Points and directions share this type; [`crate::math::Mat4`] offers
///   `transform_point` (`w = 1`) and `transform_direction` (`w = 0`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<const N: usize> {
    pub(crate) data: [f32; N],
}

/// Two-component vector `(x, y)`.
pub type Vec2 = Vector<2>;
/// Three-component vector `(x, y, z)`.
pub type Vec3 = Vector<3>;
/// Four-component vector `(x, y, z, w)`.
pub type Vec4 = Vector<4>;

impl<const N: usize> Vector<N> {
    /// Number of components.
    pub const DIM: usize = N;

    /// The zero vector.
    pub const ZERO: Self = Self { data: [0.0; N] };

    /// All components set to one.
    pub const ONE: Self = Self { data: [1.0; N] };

    /// Creates a vector from its component array.
    pub const fn from_array(data: [f32; N]) -> Self {
        Self { data }
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self { data: [value; N] }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f32; N] {
        self.data
    }

    /// Borrows the components as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied()
    }

    /// Component `idx`, or `None` when out of range.
    pub fn get(&self, idx: usize) -> Option<f32> {
        self.data.get(idx).copied()
    }

    pub(crate) fn component(&self, idx: usize) -> f32 {
        self.data[idx]
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self { data: self.data.map(f) }
    }

    fn zip_map(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self { data: core::array::from_fn(|i| f(self.data[i], other.data[i])) }
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a + b)
    }

    /// Subtracts another vector.
    pub fn sub(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a - b)
    }

    /// Multiplies component by component.
    pub fn mul_elementwise(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a * b)
    }

    /// Divides component by component; zero divisors follow IEEE rules.
    pub fn div_elementwise(&self, other: &Self) -> Self {
        self.zip_map(other, |a, b| a / b)
    }

    /// Adds `scalar` to every component.
    pub fn add_scalar(&self, scalar: f32) -> Self {
        self.map(|a| a + scalar)
    }

    /// Subtracts `scalar` from every component.
    pub fn sub_scalar(&self, scalar: f32) -> Self {
        self.map(|a| a - scalar)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        self.map(|a| a * scalar)
    }

    /// Divides every component by `scalar`.
    pub fn div_scalar(&self, scalar: f32) -> Self {
        self.map(|a| a / scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Distance between two points.
    pub fn distance(&self, other: &Self) -> f32 {
        self.sub(other).length()
    }

    /// Squared distance between two points.
    pub fn distance_squared(&self, other: &Self) -> f32 {
        self.sub(other).length_squared()
    }

    /// Divides every component by the length.
    ///
    /// A vector whose length is exactly zero is returned unchanged; no
    /// division takes place.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        self.div_scalar(len)
    }

    /// Linear interpolation: `self + (target - self) * alpha` per component.
    pub fn lerp(&self, target: &Self, alpha: f32) -> Self {
        self.zip_map(target, |a, b| a + (b - a) * alpha)
    }

    /// Spherical linear interpolation between two unit vectors.
    ///
    /// The angle is `acos(dot)` with the cosine clamped to `[-1, 1]`. When
    /// `sin(theta)` vanishes the vectors are collinear and the weights would
    /// divide by zero, so the result falls back to [`Self::lerp`].
    pub fn slerp(&self, target: &Self, alpha: f32) -> Self {
        let cos_theta = self.dot(target).clamp(-1.0, 1.0);
        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        if sin_theta.abs() <= EPSILON {
            trace!(theta, alpha, "vector slerp collinear, using lerp");
            return self.lerp(target, alpha);
        }
        let wa = ((1.0 - alpha) * theta).sin() / sin_theta;
        let wb = (alpha * theta).sin() / sin_theta;
        self.zip_map(target, |a, b| wa * a + wb * b)
    }

    /// Angle in radians between two vectors, in `[0, pi]`.
    ///
    /// Fails with [`DomainError::ZeroLength`] when either operand has zero
    /// length.
    pub fn angle_to(&self, other: &Self) -> Result<f32, DomainError> {
        let magnitudes = self.length() * other.length();
        if magnitudes == 0.0 {
            return Err(DomainError::ZeroLength);
        }
        Ok((self.dot(other) / magnitudes).clamp(-1.0, 1.0).acos())
    }

    /// Projects `self` onto `other`: `other * dot(self, other) / |other|^2`.
    ///
    /// Projecting onto the zero vector yields non-finite components.
    pub fn project_onto(&self, other: &Self) -> Self {
        other.scale(self.dot(other) / other.length_squared())
    }

    /// Reflects across the plane with unit `normal`: `self - 2 dot(self, n) n`.
    ///
    /// `normal` must already be unit length.
    pub fn reflect_across(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(2.0 * self.dot(normal)))
    }

    /// Reorders or duplicates components: result `i` is `self[indices[i]]`.
    ///
    /// `indices` must hold exactly `N` entries, each below `N`.
    pub fn swizzle(&self, indices: &[usize]) -> Result<Self, ShapeError> {
        if indices.len() != N {
            return Err(ShapeError::SwizzleArity { expected: N, actual: indices.len() });
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= N) {
            return Err(ShapeError::IndexOutOfRange { index, dim: N });
        }
        Ok(Self { data: core::array::from_fn(|i| self.data[indices[i]]) })
    }

    /// Absolute value of every component.
    pub fn abs(&self) -> Self {
        self.map(f32::abs)
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        self.map(|a| -a)
    }

    /// Rounds every component to the nearest integer; halves round toward
    /// positive infinity (`-1.5 -> -1`, `2.5 -> 3`).
    pub fn round(&self) -> Self {
        self.map(|a| {
            let floor = a.floor();
            if a - floor >= 0.5 {
                floor + 1.0
            } else {
                floor
            }
        })
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.zip_map(other, f32::min)
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.zip_map(other, f32::max)
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// Component-wise comparison under `tol`.
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| tol.within(*a, *b))
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    fn from(value: [f32; N]) -> Self {
        Self { data: value }
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    fn from(value: Vector<N>) -> Self {
        value.data
    }
}

impl<const N: usize> TryFrom<&[f32]> for Vector<N> {
    type Error = ShapeError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        let data: [f32; N] = values
            .try_into()
            .map_err(|_| ShapeError::LengthMismatch { expected: N, actual: values.len() })?;
        Ok(Self { data })
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    fn index(&self, idx: usize) -> &f32 {
        &self.data[idx]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, idx: usize) -> &mut f32 {
        &mut self.data[idx]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::add(&self, &rhs)
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::sub(&self, &rhs)
    }
}

/// Component-wise product.
impl<const N: usize> Mul for Vector<N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul_elementwise(&rhs)
    }
}

/// Component-wise quotient.
impl<const N: usize> Div for Vector<N> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        self.div_elementwise(&rhs)
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs.scale(self)
    }
}

impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        self.div_scalar(rhs)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(self, &rhs);
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::sub(self, &rhs);
    }
}

impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl<const N: usize> DivAssign<f32> for Vector<N> {
    fn div_assign(&mut self, rhs: f32) {
        *self = self.div_scalar(rhs);
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{N}(")?;
        for (i, c) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{c:.p$}")?,
                None => write!(f, "{c}")?,
            }
        }
        f.write_str(")")
    }
}
