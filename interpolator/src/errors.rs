// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Contains error types returned by the interpolator.

use thiserror::Error;

// INTERPOLATION ERROR
// ================================================================================================
/// Represents an error returned while validating a requirement set or building an interpolant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// This error occurs when an interpolant is requested for an empty list of constraints.
    #[error("at least one constraint is required to build an interpolant")]
    EmptyRequirementSet,
    /// This error occurs when two constraints are placed at the same site; the indices of both
    /// constraints are reported in iteration order.
    #[error("constraints {0} and {1} are placed at the same site")]
    DuplicatePlace(usize, usize),
    /// This error occurs when a constraint does not fix the value of the polynomial at its site.
    #[error("constraint {0} does not require a value; derivative-only constraints are not supported")]
    UnsupportedConstraintShape(usize),
    /// This error occurs when a constructed polynomial fails to satisfy the constraint it was
    /// built for.
    #[error("polynomial check failed for constraint {index}: {reason}")]
    InternalInvariantViolation { index: usize, reason: String },
    /// This error occurs when the interpolant as a whole has a higher degree than the number
    /// of conditions in the requirement set allows.
    #[error("interpolant has degree {degree}, which exceeds the bound of {bound}")]
    DegreeBoundExceeded { degree: usize, bound: usize },
    /// This error occurs when a basis polynomial is requested for a non-existent constraint.
    #[error("constraint index {index} is out of bounds for a set of {len} constraints")]
    IndexOutOfBounds { index: usize, len: usize },
}
