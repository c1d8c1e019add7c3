// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lin_core::math::{Vec3, Vec4};
use tracing::debug;

/// Plane `{ p : normal . p + distance = 0 }`.
///
/// Points with a positive signed distance are "in front". The normal is not
/// required to be unit length; only [`Plane::normalized`] makes the signed
/// distance a metric one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    distance: f32,
}

impl Default for Plane {
    /// Plane through the origin facing `+Y`.
    fn default() -> Self {
        Self::new(Vec3::UNIT_Y, 0.0)
    }
}

impl Plane {
    /// Creates a plane from its normal and offset.
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Reads `(x, y, z)` as the normal and `w` as the offset.
    ///
    /// ```
    /// use lin_geom::math::{Vec3, Vec4};
    /// use lin_geom::Plane;
    ///
    /// let p = Plane::from_vec4(&Vec4::new(0.0, 0.0, 1.0, -2.0));
    /// assert_eq!(p.signed_distance(&Vec3::new(0.0, 0.0, 5.0)), 3.0);
    /// ```
    pub fn from_vec4(coefficients: &Vec4) -> Self {
        Self::new(coefficients.truncate(), coefficients.w())
    }

    /// Plane through `point` with the given `normal`.
    pub fn from_point_normal(point: &Vec3, normal: &Vec3) -> Self {
        Self::new(*normal, -normal.dot(point))
    }

    /// Overwrites this plane from packed `(nx, ny, nz, d)` coefficients.
    pub fn set(&mut self, coefficients: &Vec4) {
        *self = Self::from_vec4(coefficients);
    }

    /// Plane normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Plane offset along the normal.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Packs the plane as `(nx, ny, nz, d)`.
    pub fn to_vec4(&self) -> Vec4 {
        self.normal.extend(self.distance)
    }

    /// `normal . point + distance`.
    pub fn signed_distance(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Strictly in front; points on the plane are not.
    pub fn is_point_in_front(&self, point: &Vec3) -> bool {
        self.signed_distance(point) > 0.0
    }

    /// Positive-vertex test: `true` when some part of the box `[min, max]`
    /// lies in front of or on the plane.
    ///
    /// Picks, per axis, the box corner furthest along the normal and checks
    /// that corner alone.
    pub fn intersect_bounding_box(&self, min: &Vec3, max: &Vec3) -> bool {
        let positive = Vec3::from_array(core::array::from_fn(|i| {
            if self.normal[i] > 0.0 {
                max[i]
            } else {
                min[i]
            }
        }));
        self.signed_distance(&positive) >= 0.0
    }

    /// Unit-normal form with the offset scaled to match.
    ///
    /// A plane with a zero normal has no direction and is returned unchanged.
    pub fn normalized(&self) -> Self {
        let len = self.normal.length();
        if len == 0.0 {
            debug!(distance = self.distance, "plane has zero normal; not normalizing");
            return *self;
        }
        Self::new(self.normal.div_scalar(len), self.distance / len)
    }
}
