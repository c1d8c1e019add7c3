// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Core geometry types (plane, AABB, line segment).
//!
//! Semantics notes:
//! - Overlap and containment are inclusive on faces so touching shapes
//!   count as intersecting.
//! - Plane distances are signed; positive means in front of the plane.

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Line segments between two points."]
pub mod line;
#[doc = "Planes `normal . p + distance = 0`."]
pub mod plane;
