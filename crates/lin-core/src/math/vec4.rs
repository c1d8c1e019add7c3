// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Vec3, Vec4};

impl Vec4 {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive W axis.
    pub const UNIT_W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
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

    /// W component.
    pub fn w(&self) -> f32 {
        self.component(3)
    }

    /// Copy with `x` replaced.
    pub fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y(), self.z(), self.w())
    }

    /// Copy with `y` replaced.
    pub fn with_y(self, y: f32) -> Self {
        Self::new(self.x(), y, self.z(), self.w())
    }

    /// Copy with `z` replaced.
    pub fn with_z(self, z: f32) -> Self {
        Self::new(self.x(), self.y(), z, self.w())
    }

    /// Copy with `w` replaced.
    pub fn with_w(self, w: f32) -> Self {
        Self::new(self.x(), self.y(), self.z(), w)
    }

    /// Drops `w` without dividing.
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Cross product of the `xyz` parts; `w` of the result is zero.
    ///
    /// The 4D cross product is not defined for two operands, so the `w`
    /// components of both inputs are ignored.
    pub fn cross(&self, other: &Self) -> Self {
        self.truncate().cross(&other.truncate()).extend(0.0)
    }

    /// Adds `delta` to every component.
    pub fn translate(&self, delta: &Self) -> Self {
        self.add(delta)
    }

    /// Rotates the `yz` plane by `angle` radians (about +X); `x` and `w` are
    /// kept.
    pub fn rotate_x(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            self.x(),
            self.y() * c - self.z() * s,
            self.y() * s + self.z() * c,
            self.w(),
        )
    }

    /// Rotates the `zx` plane by `angle` radians (about +Y); `y` and `w` are
    /// kept.
    pub fn rotate_y(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            self.z() * s + self.x() * c,
            self.y(),
            self.z() * c - self.x() * s,
            self.w(),
        )
    }

    /// Rotates the `xy` plane by `angle` radians (about +Z); `z` and `w` are
    /// kept.
    pub fn rotate_z(&self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            self.x() * c - self.y() * s,
            self.x() * s + self.y() * c,
            self.z(),
            self.w(),
        )
    }
}
