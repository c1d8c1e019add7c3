// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Vec2, Vec3};

impl Vec2 {
    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { data: [x, y] }
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.component(0)
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.component(1)
    }

    /// Copy with `x` replaced.
    pub fn with_x(self, x: f32) -> Self {
        Self::new(x, self.y())
    }

    /// Copy with `y` replaced.
    pub fn with_y(self, y: f32) -> Self {
        Self::new(self.x(), y)
    }

    /// 2D cross product (perp-dot): the `z` of the 3D cross product of
    /// `(x, y, 0)` and `(ox, oy, 0)`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    pub fn cross(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    pub fn perp(&self) -> Self {
        Self::new(-self.y(), self.x())
    }

    /// Extends to a homogeneous point `(x, y, 1)`.
    pub fn to_homogeneous(self) -> Vec3 {
        Vec3::new(self.x(), self.y(), 1.0)
    }

    /// Divides `(x, y)` by `z`. A `z` of exactly zero marks a direction and
    /// returns `(x, y)` unchanged.
    pub fn from_homogeneous(v: Vec3) -> Self {
        let w = v.z();
        if w == 0.0 {
            return Self::new(v.x(), v.y());
        }
        Self::new(v.x() / w, v.y() / w)
    }
}
