// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Vec2, Vec3, Vec4};

impl Vec3 {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    ///
    /// Callers must ensure values are finite.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.component(0)
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.component(1)
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.component(2)
    }

    /// Copy with `x` replaced.
    pub fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y(), self.z())
    }

    /// Copy with `y` replaced.
    pub fn with_y(self, y: f32) -> Self {
        Self::new(self.x(), y, self.z())
    }

    /// Copy with `z` replaced.
    pub fn with_z(self, z: f32) -> Self {
        Self::new(self.x(), self.y(), z)
    }

    /// Cross product with another vector (right-handed).
    ///
    /// # Examples
    /// ```
    /// use lin_core::math::Vec3;
    /// assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Appends `w`.
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x(), self.y(), self.z(), w)
    }

    /// Drops `z`.
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// Homogeneous point `(x, y, z, 1)`.
    pub fn to_homogeneous(self) -> Vec4 {
        self.extend(1.0)
    }

    /// Divides `(x, y, z)` by `w`. A `w` of exactly zero marks a direction and
    /// returns `(x, y, z)` unchanged.
    pub fn from_homogeneous(v: Vec4) -> Self {
        let w = v.w();
        if w == 0.0 {
            return v.truncate();
        }
        Self::new(v.x() / w, v.y() / w, v.z() / w)
    }
}
