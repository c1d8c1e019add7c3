// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Mul, MulAssign, Neg};

use tracing::trace;

use crate::math::{Mat4, Tolerance, Vec3, EPSILON};

/// Quaternion stored as `(w, x, y, z)` with `w` as the scalar part.
///
/// * All angles are expressed in radians.
/// * Unit norm is expected for rotation use but not enforced; call
///   [`Quat::normalize`] after long multiplication chains.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// The identity rotation `(1, 0, 0, 0)`.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from components, scalar part first.
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { data: [w, x, y, z] }
    }

    /// Builds a quaternion from a scalar part and a vector part.
    pub fn from_scalar_vector(w: f32, v: &Vec3) -> Self {
        Self::new(w, v.x(), v.y(), v.z())
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the components as `[w, x, y, z]`.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Scalar part.
    pub fn w(&self) -> f32 {
        self.data[0]
    }

    /// First vector component.
    pub fn x(&self) -> f32 {
        self.data[1]
    }

    /// Second vector component.
    pub fn y(&self) -> f32 {
        self.data[2]
    }

    /// Third vector component.
    pub fn z(&self) -> f32 {
        self.data[3]
    }

    /// Vector part `(x, y, z)`.
    pub fn vector_part(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self { data: self.data.map(f) }
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Squared norm.
    pub fn magnitude_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Norm `sqrt(w² + x² + y² + z²)`.
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Divides every component by the magnitude; unchanged when the
    /// magnitude is exactly zero.
    pub fn normalize(&self) -> Self {
        let len = self.magnitude();
        if len == 0.0 {
            return *self;
        }
        self.map(|c| c / len)
    }

    /// Negates the vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(self.w(), -self.x(), -self.y(), -self.z())
    }

    /// Multiplicative inverse `conjugate / |q|²`; unchanged when the
    /// magnitude is zero. Equals the conjugate for unit quaternions.
    pub fn inverse(&self) -> Self {
        let len_sq = self.magnitude_squared();
        if len_sq == 0.0 {
            return *self;
        }
        self.conjugate().map(|c| c / len_sq)
    }

    /// Hamilton product `self * other`.
    ///
    /// Operand order matters: applied to a vector, the result rotates by
    /// `other` first and then by `self`.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use lin_core::math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(&Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(&Vec3::UNIT_X, FRAC_PI_2);
    /// // Non-commutative
    /// assert_ne!(yaw.multiply(&pitch).to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [aw, ax, ay, az] = self.data;
        let [bw, bx, by, bz] = other.data;
        Self::new(
            aw * bw - ax * bx - ay * by - az * bz,
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
        )
    }

    /// Rotates `v` by computing `q * (0, v) * conjugate(q)`.
    ///
    /// The quaternion must be unit length; otherwise the result is also
    /// scaled by `|q|²`.
    pub fn rotate_vector(&self, v: &Vec3) -> Vec3 {
        self.multiply(&Self::from_scalar_vector(0.0, v))
            .multiply(&self.conjugate())
            .vector_part()
    }

    /// Rotation of `angle` radians about `axis`:
    /// `w = cos(angle / 2)`, `(x, y, z) = axis * sin(angle / 2)`.
    ///
    /// `axis` must already be unit length; it is not normalized here.
    pub fn from_axis_angle(axis: &Vec3, angle: f32) -> Self {
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        Self::from_scalar_vector(cos_half, &axis.scale(sin_half))
    }

    /// Converts to a 4×4 rotation matrix (row-major, column vectors).
    ///
    /// A normalized copy is converted, so non-unit input still yields a
    /// pure rotation.
    pub fn to_rotation_matrix(&self) -> Mat4 {
        let [w, x, y, z] = self.normalize().data;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy - wz),
            2.0 * (xz + wy),
            0.0,
            2.0 * (xy + wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz - wx),
            0.0,
            2.0 * (xz - wy),
            2.0 * (yz + wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    /// Extracts the rotation encoded in the upper-left 3×3 block of `m`.
    ///
    /// Uses the trace when it is positive, otherwise branches on the
    /// largest diagonal element so the divisor never approaches zero. The
    /// block must be a pure rotation.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        let m00 = m.get(0, 0);
        let m01 = m.get(0, 1);
        let m02 = m.get(0, 2);
        let m10 = m.get(1, 0);
        let m11 = m.get(1, 1);
        let m12 = m.get(1, 2);
        let m20 = m.get(2, 0);
        let m21 = m.get(2, 1);
        let m22 = m.get(2, 2);

        let trace = m00 + m11 + m22;
        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Self::new(0.25 / s, (m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s)
        } else if m00 > m11 && m00 > m22 {
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Self::new((m21 - m12) / s, 0.25 * s, (m01 + m10) / s, (m02 + m20) / s)
        } else if m11 > m22 {
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Self::new((m02 - m20) / s, (m01 + m10) / s, 0.25 * s, (m12 + m21) / s)
        } else {
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Self::new((m10 - m01) / s, (m02 + m20) / s, (m12 + m21) / s, 0.25 * s)
        }
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// The target is negated when the dot product is negative, and the
    /// cosine is clamped before `acos`. When `sin(theta) <= EPSILON` the
    /// inputs are (anti)parallel and the result is a normalized linear
    /// blend instead.
    pub fn slerp(&self, target: &Self, alpha: f32) -> Self {
        let mut end = *target;
        let mut cos_theta = self.dot(target);
        if cos_theta < 0.0 {
            end = -end;
            cos_theta = -cos_theta;
        }
        let theta = cos_theta.min(1.0).acos();
        let sin_theta = theta.sin();
        if sin_theta <= EPSILON {
            trace!(theta, alpha, "quat slerp near-parallel, using nlerp");
            let mut data = self.data;
            for (a, b) in data.iter_mut().zip(end.data.iter()) {
                *a += (b - *a) * alpha;
            }
            return Self { data }.normalize();
        }
        let wa = ((1.0 - alpha) * theta).sin() / sin_theta;
        let wb = (alpha * theta).sin() / sin_theta;
        Self { data: core::array::from_fn(|i| wa * self.data[i] + wb * end.data[i]) }
    }

    /// Component-wise comparison under `tol`.
    ///
    /// `q` and `-q` encode the same rotation but do not compare equal here.
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| tol.within(*a, *b))
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Components are taken verbatim in `(w, x, y, z)` order; normalization is
/// not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}
