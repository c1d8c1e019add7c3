// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![forbid(unsafe_code)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_const_for_fn
)]
#![doc = r"Geometric predicates built on the `lin-core` kernel.

This crate provides:
- Planes in Hessian-style form (`Plane`).
- Axis-aligned bounding boxes (`Aabb`, `Aabb2`, `Aabb3`).
- Line segments (`Line`, `Line2`, `Line3`).
- Six-plane view frustums extracted from a projection-view matrix (`Frustum`).

Design notes:
- Float32 throughout; every type is `Copy` and every query is pure.
- Overlap and containment are inclusive on faces.
- Frustum planes face inward and are not normalized after extraction; only
  the sign of a plane test is meaningful.
"]

/// View-volume culling.
pub mod culling;
/// Foundational geometric types.
pub mod types;

pub use culling::frustum::{Frustum, FrustumPlane};
pub use lin_core::math;
pub use lin_core::ShapeError;
pub use types::aabb::{Aabb, Aabb2, Aabb3};
pub use types::line::{Line, Line2, Line3};
pub use types::plane::Plane;
