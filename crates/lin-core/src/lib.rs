// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! lin-core: fixed-size linear algebra kernel.
//!
//! Vectors (`Vec2`/`Vec3`/`Vec4`), square matrices (`Mat2`/`Mat3`/`Mat4`)
//! and quaternions (`Quat`) used by rendering and simulation code for
//! transforms, projections, and culling. Geometric predicates built on this
//! kernel live in `lin-geom`.
//!
//! Conventions shared by every type in this crate:
//! - Scalars are `f32`.
//! - Matrices are row-major and act on column vectors (`M * v`).
//! - Every operation is pure; in-place arithmetic goes through the compound
//!   assignment operators.
#![forbid(unsafe_code)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::should_implement_trait
)]

pub mod error;
pub mod math;

pub use error::{DomainError, MathError, ShapeError};
pub use math::{
    Mat2, Mat3, Mat4, Matrix, Quat, SquareMatrix, Tolerance, Vec2, Vec3, Vec4, Vector, EPSILON,
};
