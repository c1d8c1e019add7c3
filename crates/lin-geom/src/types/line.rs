// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lin_core::math::{Vec2, Vec3, Vector};

use crate::types::aabb::Aabb;
use crate::types::plane::Plane;

/// Segment from `start` to `end`, parameterized as `start + t * direction`
/// for `t` in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Line<const N: usize> {
    start: Vector<N>,
    end: Vector<N>,
}

/// Planar segment.
pub type Line2 = Line<2>;
/// Segment in space.
pub type Line3 = Line<3>;

impl<const N: usize> Line<N> {
    /// Creates a segment between two points.
    pub const fn new(start: Vector<N>, end: Vector<N>) -> Self {
        Self { start, end }
    }

    /// First endpoint (`t = 0`).
    pub fn start(&self) -> Vector<N> {
        self.start
    }

    /// Second endpoint (`t = 1`).
    pub fn end(&self) -> Vector<N> {
        self.end
    }

    /// `end - start`; not normalized.
    pub fn direction(&self) -> Vector<N> {
        self.end.sub(&self.start)
    }

    /// Point at parameter `t`; values outside `[0, 1]` extrapolate.
    pub fn point_at(&self, t: f32) -> Vector<N> {
        self.start.add(&self.direction().scale(t))
    }

    /// Distance between the endpoints.
    pub fn length(&self) -> f32 {
        self.start.distance(&self.end)
    }

    /// Slab test: `true` if any point of the segment lies in the box.
    ///
    /// Clips the parameter interval `[0, 1]` against each axis slab in
    /// turn. An axis the segment runs parallel to only constrains whether
    /// the segment lies within that slab at all.
    ///
    /// ```
    /// use lin_geom::math::Vec3;
    /// use lin_geom::{Aabb3, Line3};
    ///
    /// let unit = Aabb3::new(Vec3::ZERO, Vec3::ONE).unwrap();
    /// let through = Line3::new(Vec3::new(-1.0, 0.5, 0.5), Vec3::new(2.0, 0.5, 0.5));
    /// let short = Line3::new(Vec3::new(-1.0, 0.5, 0.5), Vec3::new(-0.5, 0.5, 0.5));
    /// assert!(through.intersects_aabb(&unit));
    /// assert!(!short.intersects_aabb(&unit));
    /// ```
    pub fn intersects_aabb(&self, aabb: &Aabb<N>) -> bool {
        let dir = self.direction();
        let (lo, hi) = (aabb.min(), aabb.max());
        let mut t_enter = 0.0_f32;
        let mut t_exit = 1.0_f32;
        for axis in 0..N {
            let origin = self.start[axis];
            let d = dir[axis];
            if d == 0.0 {
                if origin < lo[axis] || origin > hi[axis] {
                    return false;
                }
                continue;
            }
            let inv = d.recip();
            let mut t0 = (lo[axis] - origin) * inv;
            let mut t1 = (hi[axis] - origin) * inv;
            if t0 > t1 {
                core::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return false;
            }
        }
        true
    }
}

impl Line2 {
    /// Perpendicular distance from `point` to the infinite line through the
    /// segment; the endpoint distance when the segment is a single point.
    pub fn distance_to_point(&self, point: &Vec2) -> f32 {
        let dir = self.direction();
        let len = dir.length();
        if len == 0.0 {
            return self.start.distance(point);
        }
        dir.cross(&point.sub(&self.start)).abs() / len
    }
}

impl Line3 {
    /// `true` when the endpoints are on opposite sides of the plane or
    /// either endpoint lies on it.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        let d1 = plane.signed_distance(&self.start);
        let d2 = plane.signed_distance(&self.end);
        (d1 >= 0.0 && d2 <= 0.0) || (d1 <= 0.0 && d2 >= 0.0)
    }

    /// Perpendicular distance from `point` to the infinite line through the
    /// segment; the endpoint distance when the segment is a single point.
    pub fn distance_to_point(&self, point: &Vec3) -> f32 {
        let dir = self.direction();
        let len = dir.length();
        if len == 0.0 {
            return self.start.distance(point);
        }
        point.sub(&self.start).cross(&dir).length() / len
    }

    /// Point where the segment crosses `plane`, or `None` if it does not.
    ///
    /// A segment lying in the plane reports its start point.
    pub fn intersection_with_plane(&self, plane: &Plane) -> Option<Vec3> {
        if !self.intersects_plane(plane) {
            return None;
        }
        let d1 = plane.signed_distance(&self.start);
        let d2 = plane.signed_distance(&self.end);
        let denom = d1 - d2;
        if denom == 0.0 {
            return Some(self.start);
        }
        Some(self.point_at(d1 / denom))
    }
}
