// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains an exact mixed Lagrange/Hermite polynomial interpolator.
//!
//! Given a list of constraints, each fixing the value of a polynomial at a site and, optionally,
//! the value of its first derivative at the same site, the interpolator builds the unique
//! polynomial of minimal degree which satisfies all of them.
//!
//! # Interpolation
//! Interpolation proceeds in two steps:
//!
//! 1. For every constraint, a *basis polynomial* is built (see [build_basis()]). The basis
//!    polynomial for constraint i takes the required value (and derivative) at its own site, and
//!    vanishes at every other site. At sites which carry derivative requirements, its derivative
//!    vanishes as well.
//! 2. All basis polynomials are summed up in the order of the constraints.
//!
//! When the `concurrent` feature is enabled, basis polynomials are built in multiple threads;
//! the result does not depend on whether this feature is enabled.
//!
//! All arithmetic is exact: the interpolator is generic over [FieldElement], and the fields
//! provided by the `math` crate ([Rational](math::fields::Rational) and its extensions) never
//! round.
//!
//! # Example
//! ```
//! use hermite_interpolator::{interpolate, Constraint};
//! use hermite_interpolator::math::fields::Rational;
//!
//! // p(0) = 1, p'(0) = 2
//! let constraints = vec![Constraint::with_derivative(
//!     Rational::from(0u64),
//!     Rational::from(1u64),
//!     Rational::from(2u64),
//! )];
//! let p = interpolate(constraints).unwrap();
//! assert_eq!("2*x + 1", p.to_string());
//! ```

pub use math::{self, FieldElement};
use tracing::{event, info_span, instrument, Level};
#[cfg(feature = "concurrent")]
use utils::iterators::*;
use utils::iter;

mod basis;
pub use basis::{build_basis, build_basis_with};

mod constraint;
pub use constraint::{Constraint, RequirementSet};

mod errors;
pub use errors::InterpolationError;

mod polynomial;
pub use polynomial::Polynomial;


// INTERPOLATION OPTIONS
// ================================================================================================
/// Options which control how an interpolant is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolationOptions {
    /// When set, every basis polynomial and the final interpolant are checked against the
    /// constraints they were built for.
    pub verify: bool,
}

impl InterpolationOptions {
    /// Returns options with self-checks enabled or disabled as specified.
    pub fn new(verify: bool) -> Self {
        Self { verify }
    }
}

impl Default for InterpolationOptions {
    /// Self-checks are enabled in debug builds only.
    fn default() -> Self {
        Self { verify: cfg!(debug_assertions) }
    }
}

// INTERPOLATION
// ================================================================================================

/// Returns the minimal-degree polynomial satisfying all of the provided constraints.
///
/// # Errors
/// Returns an error if the constraints do not form a valid [RequirementSet], or if a self-check
/// fails (see [InterpolationOptions]).
pub fn interpolate<E: FieldElement>(
    constraints: Vec<Constraint<E>>,
) -> Result<Polynomial<E>, InterpolationError> {
    interpolate_with(constraints, &InterpolationOptions::default())
}

/// Returns the minimal-degree polynomial satisfying all of the provided constraints, using the
/// specified options.
pub fn interpolate_with<E: FieldElement>(
    constraints: Vec<Constraint<E>>,
    options: &InterpolationOptions,
) -> Result<Polynomial<E>, InterpolationError> {
    let requirements = RequirementSet::new(constraints)?;
    interpolate_set_with(&requirements, options)
}

/// Returns the minimal-degree polynomial satisfying all constraints in an already validated
/// requirement set.
pub fn interpolate_set<E: FieldElement>(
    requirements: &RequirementSet<E>,
) -> Result<Polynomial<E>, InterpolationError> {
    interpolate_set_with(requirements, &InterpolationOptions::default())
}

/// Returns the minimal-degree polynomial satisfying all constraints in an already validated
/// requirement set, using the specified options.
#[instrument(skip_all, fields(num_constraints = requirements.len()))]
pub fn interpolate_set_with<E: FieldElement>(
    requirements: &RequirementSet<E>,
    options: &InterpolationOptions,
) -> Result<Polynomial<E>, InterpolationError> {
    let degree_bound = requirements.degree_bound();
    event!(Level::DEBUG, "degree bound: {}", degree_bound);

    // basis polynomials are independent of each other and can be built in any order
    let bases = info_span!("build_basis_polys", num_bases = requirements.len()).in_scope(|| {
        iter!(requirements.constraints())
            .enumerate()
            .map(|(index, _)| build_basis_with(index, requirements, options))
            .collect::<Result<Vec<_>, _>>()
    })?;

    // the sum is always folded in constraint order
    let interpolant = bases.into_iter().fold(Polynomial::zero(), |acc, basis| acc + basis);
    event!(Level::DEBUG, "interpolant degree: {:?}", interpolant.degree());

    if options.verify {
        info_span!("verify_interpolant")
            .in_scope(|| verify_interpolant(&interpolant, requirements))?;
        check_degree_bound(&interpolant, degree_bound)?;
    }

    Ok(interpolant)
}

// VERIFICATION
// ================================================================================================

/// Checks that `poly` satisfies every constraint in `requirements`.
///
/// # Errors
/// Returns [InterpolationError::InternalInvariantViolation] naming the first constraint which
/// is not satisfied.
pub fn verify_interpolant<E: FieldElement>(
    poly: &Polynomial<E>,
    requirements: &RequirementSet<E>,
) -> Result<(), InterpolationError> {
    let derivative = poly.derivative();
    for (index, constraint) in requirements.iter().enumerate() {
        basis::check_constraint(index, constraint, poly, &derivative)?;
    }
    Ok(())
}

/// Makes sure that the degree of `poly` does not exceed `bound`.
fn check_degree_bound<E: FieldElement>(
    poly: &Polynomial<E>,
    bound: usize,
) -> Result<(), InterpolationError> {
    match poly.degree() {
        Some(degree) if degree > bound => {
            Err(InterpolationError::DegreeBoundExceeded { degree, bound })
        },
        _ => Ok(()),
    }
}
