// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Error taxonomy for the math kernel.
//!
//! Every failure is a local precondition violation detected before any
//! computation starts, so callers never observe a partially updated value.

use thiserror::Error;

/// Input whose shape (component count, index range, bounds ordering) does
/// not fit the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A swizzle was given the wrong number of indices.
    #[error("swizzle expects {expected} indices, got {actual}")]
    SwizzleArity {
        /// Number of components of the target vector.
        expected: usize,
        /// Number of indices supplied.
        actual: usize,
    },
    /// A component index does not exist on the vector.
    #[error("component index {index} out of range for {dim}-component vector")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Vector dimension.
        dim: usize,
    },
    /// A slice did not carry the number of values the target type stores.
    #[error("expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Values required.
        expected: usize,
        /// Values supplied.
        actual: usize,
    },
    /// A bounding box was given a `min` corner above its `max` corner.
    #[error("invalid bounds: min > max on axis {axis}")]
    InvertedBounds {
        /// First axis on which the ordering is violated.
        axis: usize,
    },
}

/// Input outside the mathematical domain of the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An angle was requested against a zero-length vector.
    #[error("cannot compute angle with zero-length vector")]
    ZeroLength,
    /// An inverse was requested for a matrix whose determinant is zero.
    #[error("matrix is not invertible (determinant is zero)")]
    Singular,
}

/// Umbrella error for callers mixing shape and domain checked operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// See [`ShapeError`].
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// See [`DomainError`].
    #[error(transparent)]
    Domain(#[from] DomainError),
}
