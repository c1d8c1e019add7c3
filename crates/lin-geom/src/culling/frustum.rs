// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lin_core::math::{Mat4, Vec3, Vec4};
use tracing::trace;

use crate::types::aabb::Aabb3;
use crate::types::plane::Plane;

/// Identifies one of the six frustum planes.
///
/// The discriminant is the plane's slot in [`Frustum::planes`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    /// `x <= w` in clip space.
    Right = 0,
    /// `-w <= x` in clip space.
    Left = 1,
    /// `-w <= y` in clip space.
    Bottom = 2,
    /// `y <= w` in clip space.
    Top = 3,
    /// `z <= w` in clip space.
    Far = 4,
    /// `-w <= z` in clip space.
    Near = 5,
}

impl FrustumPlane {
    /// Every plane in storage order.
    pub const ALL: [Self; 6] = [
        Self::Right,
        Self::Left,
        Self::Bottom,
        Self::Top,
        Self::Far,
        Self::Near,
    ];

    /// Slot of this plane in [`Frustum::planes`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Combination of clip-matrix rows whose coefficients form this plane,
    /// oriented so the inside has positive signed distance.
    fn coefficients(self, clip: &Mat4) -> Vec4 {
        let w = clip.row(3);
        match self {
            Self::Right => w.sub(&clip.row(0)),
            Self::Left => w.add(&clip.row(0)),
            Self::Bottom => w.add(&clip.row(1)),
            Self::Top => w.sub(&clip.row(1)),
            Self::Far => w.sub(&clip.row(2)),
            Self::Near => w.add(&clip.row(2)),
        }
    }
}

/// View volume bounded by six inward-facing planes.
///
/// Planes are taken straight from the clip matrix and are not normalized;
/// the tests below only look at the sign of each plane distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frustum {
    planes: [Plane; 6],
}

impl Frustum {
    /// Frustum of `projection * view`.
    ///
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use lin_geom::math::{Mat4, Vec3};
    /// use lin_geom::Frustum;
    ///
    /// let projection = Mat4::perspective(FRAC_PI_2, 1.0, 0.1, 100.0);
    /// let view = Mat4::look_at(&Vec3::new(0.0, 0.0, -1.0), &Vec3::ZERO, &Vec3::UNIT_Y);
    /// let frustum = Frustum::new(&projection, &view);
    /// assert!(frustum.point_in_frustum(&Vec3::ZERO));
    /// ```
    pub fn new(projection: &Mat4, view: &Mat4) -> Self {
        Self::from_matrix(&projection.matmul(view))
    }

    /// Frustum of an already combined clip matrix.
    pub fn from_matrix(clip: &Mat4) -> Self {
        Self {
            planes: FrustumPlane::ALL.map(|p| Plane::from_vec4(&p.coefficients(clip))),
        }
    }

    /// Re-extracts every plane from `projection * view`.
    pub fn set(&mut self, projection: &Mat4, view: &Mat4) {
        *self = Self::new(projection, view);
        trace!(near = ?self.plane(FrustumPlane::Near), "frustum rebuilt");
    }

    /// All planes in [`FrustumPlane::ALL`] order.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// A single plane.
    pub fn plane(&self, which: FrustumPlane) -> Plane {
        self.planes[which.index()]
    }

    /// `true` if `point` is strictly in front of all six planes.
    pub fn point_in_frustum(&self, point: &Vec3) -> bool {
        self.planes.iter().all(|p| p.is_point_in_front(point))
    }

    /// `true` unless the box `[min, max]` lies entirely behind some plane.
    ///
    /// Conservative: boxes near a frustum corner can pass without actually
    /// overlapping the volume.
    pub fn box_intersects_frustum(&self, min: &Vec3, max: &Vec3) -> bool {
        self.planes.iter().all(|p| p.intersect_bounding_box(min, max))
    }

    /// [`Frustum::box_intersects_frustum`] for a stored box.
    pub fn aabb_intersects_frustum(&self, aabb: &Aabb3) -> bool {
        self.box_intersects_frustum(&aabb.min(), &aabb.max())
    }
}

impl Default for Frustum {
    /// The clip-space cube `[-1, 1]^3`.
    fn default() -> Self {
        Self::from_matrix(&Mat4::identity())
    }
}
