// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lin_core::math::{Mat4, Vec3, Vector};
use lin_core::ShapeError;

use crate::types::line::Line;
use crate::types::plane::Plane;

/// Axis-aligned bounding box in `N` dimensions.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Faces are part of the box: touching boxes overlap and points on a face
///   are contained.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb<const N: usize> {
    min: Vector<N>,
    max: Vector<N>,
}

/// Planar bounding rectangle.
pub type Aabb2 = Aabb<2>;
/// Bounding box in world space.
pub type Aabb3 = Aabb<3>;

impl<const N: usize> Aabb<N> {
    /// Constructs a box from its minimum and maximum corners.
    ///
    /// Fails with [`ShapeError::InvertedBounds`] naming the first axis where
    /// `min` exceeds `max`.
    ///
    /// ```
    /// use lin_geom::math::Vec3;
    /// use lin_geom::Aabb3;
    ///
    /// let b = Aabb3::new(Vec3::ZERO, Vec3::ONE).unwrap();
    /// assert_eq!(b.center(), Vec3::splat(0.5));
    /// assert!(Aabb3::new(Vec3::ONE, Vec3::ZERO).is_err());
    /// ```
    pub fn new(min: Vector<N>, max: Vector<N>) -> Result<Self, ShapeError> {
        if let Some(axis) = (0..N).find(|&i| min[i] > max[i]) {
            return Err(ShapeError::InvertedBounds { axis });
        }
        Ok(Self { min, max })
    }

    /// Box centered at `center`; the sign of each half-extent is ignored.
    pub fn from_center_half_extents(center: Vector<N>, half_extents: Vector<N>) -> Self {
        let he = half_extents.abs();
        Self {
            min: center.sub(&he),
            max: center.add(&he),
        }
    }

    /// Minimal box containing all `points`, or `None` when there are none.
    pub fn from_points(points: &[Vector<N>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let seed = Self {
            min: *first,
            max: *first,
        };
        Some(rest.iter().fold(seed, |acc, p| acc.expand_to_include(p)))
    }

    /// Minimum corner.
    pub fn min(&self) -> Vector<N> {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Vector<N> {
        self.max
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> Vector<N> {
        self.min.add(&self.max).scale(0.5)
    }

    /// Edge lengths per axis.
    pub fn size(&self) -> Vector<N> {
        self.max.sub(&self.min)
    }

    /// Half of [`Aabb::size`].
    pub fn half_extents(&self) -> Vector<N> {
        self.size().scale(0.5)
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    pub fn contains_point(&self, point: &Vector<N>) -> bool {
        (0..N).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Returns `true` if the boxes overlap (inclusive on faces).
    ///
    /// Symmetric in its arguments.
    pub fn intersects_aabb(&self, other: &Self) -> bool {
        (0..N).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Smallest box containing this box and `point`.
    pub fn expand_to_include(&self, point: &Vector<N>) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Returns `true` if the segment touches the box. See
    /// [`Line::intersects_aabb`].
    pub fn intersects_line(&self, line: &Line<N>) -> bool {
        line.intersects_aabb(self)
    }
}

impl Aabb3 {
    /// The eight corners; bit `k` of the index selects `max` on axis `k`.
    pub fn corners(&self) -> [Vec3; 8] {
        core::array::from_fn(|idx| {
            Vec3::from_array(core::array::from_fn(|axis| {
                if idx & (1 << axis) == 0 {
                    self.min[axis]
                } else {
                    self.max[axis]
                }
            }))
        })
    }

    /// Separating-axis test against a plane: `true` if the plane passes
    /// through the box or touches it.
    ///
    /// The box radius along the normal is `half_extents . |normal|`.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        let radius = self.half_extents().dot(&plane.normal().abs());
        plane.signed_distance(&self.center()).abs() <= radius
    }

    /// Bounds of this box after transformation by `mat`.
    ///
    /// Evaluates the eight corners under the transform and builds a new
    /// axis-aligned box containing them.
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let [first, rest @ ..] = self.corners().map(|c| mat.transform_point(&c));
        let seed = Self {
            min: first,
            max: first,
        };
        rest.iter().fold(seed, |acc, p| acc.expand_to_include(p))
    }
}
