// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Linear algebra primitives: scalar helpers, fixed-size vectors and square
//! matrices, and quaternions.
//!
//! All arithmetic is `f32`. Matrices are row-major and multiply column
//! vectors on the right, so `a.matmul(&b)` applied to a point runs `b` first.

use std::f32::consts::TAU;

mod mat2;
mod mat3;
mod mat4;
mod matrix;
mod quat;
mod vec2;
mod vec3;
mod vec4;
mod vector;

pub use matrix::{Mat2, Mat3, Mat4, Matrix, SquareMatrix};
pub use quat::Quat;
pub use vector::{Vec2, Vec3, Vec4, Vector};

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Canonicalizes signed zero (`-0.0`) to `+0.0` without affecting non-zero values.
#[inline]
pub(crate) fn canonicalize_zero(value: f32) -> f32 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Absolute/relative error budget for approximate comparisons.
///
/// The allowed error for a reference value `r` is
/// `max(absolute, relative * |r|)`, so small magnitudes are judged in
/// absolute terms and large ones relative to their size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Floor on the allowed error.
    pub absolute: f32,
    /// Allowed error per unit of reference magnitude.
    pub relative: f32,
}

impl Tolerance {
    /// Default absolute budget.
    pub const DEFAULT_ABSOLUTE: f32 = 1e-6;
    /// Default relative budget.
    pub const DEFAULT_RELATIVE: f32 = 1e-6;

    /// Creates a tolerance from explicit budgets.
    pub const fn new(absolute: f32, relative: f32) -> Self {
        Self { absolute, relative }
    }

    /// Tolerance with only an absolute budget.
    pub const fn absolute(absolute: f32) -> Self {
        Self::new(absolute, 0.0)
    }

    /// Allowed error when comparing against `reference`.
    pub fn allowed_error(&self, reference: f32) -> f32 {
        self.absolute.max(self.relative * reference.abs())
    }

    /// Returns `true` when `value` is within budget of `reference`.
    pub fn within(&self, value: f32, reference: f32) -> bool {
        (value - reference).abs() <= self.allowed_error(reference)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ABSOLUTE, Self::DEFAULT_RELATIVE)
    }
}
