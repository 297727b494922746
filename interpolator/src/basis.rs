// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use math::{polynom, FieldElement};
use tracing::{debug_span, event, Level};

use crate::{Constraint, InterpolationError, InterpolationOptions, Polynomial, RequirementSet};

// BASIS CONSTRUCTION
// ================================================================================================

/// Builds the basis polynomial for the constraint at `index` using default options.
///
/// See [build_basis_with()] for details.
pub fn build_basis<E: FieldElement>(
    index: usize,
    requirements: &RequirementSet<E>,
) -> Result<Polynomial<E>, InterpolationError> {
    build_basis_with(index, requirements, &InterpolationOptions::default())
}

/// Builds the basis polynomial for the constraint at `index`.
///
/// For a constraint (x_i, y_i, d_i), the returned polynomial p satisfies p(x_i) = y_i and, if
/// d_i is present, p'(x_i) = d_i. At every other site x_j of the set p(x_j) = 0, and if the
/// constraint at x_j carries a derivative requirement, also p'(x_j) = 0.
///
/// The polynomial is built as a product of normalized linear factors (X - x_j) / (x_i - x_j),
/// one per other site, squared for sites with derivative requirements. This product equals 1
/// at x_i; it is then scaled by y_i, or, when d_i is present, multiplied by a line through
/// (x_i, y_i) whose slope corrects the derivative at x_i.
///
/// When `options.verify` is set, the result is checked against all of the above conditions.
///
/// # Errors
/// Returns an error if:
/// * `index` is not a valid constraint index.
/// * The result fails its self-check.
pub fn build_basis_with<E: FieldElement>(
    index: usize,
    requirements: &RequirementSet<E>,
    options: &InterpolationOptions,
) -> Result<Polynomial<E>, InterpolationError> {
    let home = requirements.get(index).ok_or(InterpolationError::IndexOutOfBounds {
        index,
        len: requirements.len(),
    })?;
    let value = home.value().ok_or(InterpolationError::UnsupportedConstraintShape(index))?;
    let place = home.place();

    debug_span!("build_basis", index).in_scope(|| {
        let mut accumulator = vec![E::one()];
        for (j, other) in requirements.iter().enumerate() {
            if j == index {
                continue;
            }

            // (X - x_j) / (x_i - x_j) in coefficient form
            let scale = (place.clone() - other.place().clone()).inv();
            let factor = [-other.place().clone() * scale.clone(), scale];

            accumulator = polynom::mul(&accumulator, &factor);
            if other.has_derivative() {
                accumulator = polynom::mul(&accumulator, &factor);
            }
        }

        if options.verify && !polynom::eval(&accumulator, place).is_one() {
            return Err(InterpolationError::InternalInvariantViolation {
                index,
                reason: format!("vanishing product is not normalized at site {place}"),
            });
        }

        let coefficients = match home.derivative() {
            None => polynom::mul_by_const(&accumulator, value),
            Some(derivative) => {
                let slope = polynom::eval(&polynom::derivative(&accumulator), place);
                let slope = derivative.clone() - slope * value.clone();
                let line = [value.clone() - place.clone() * slope.clone(), slope];
                polynom::mul(&accumulator, &line)
            },
        };
        let basis = Polynomial::from_coefficients(coefficients);
        event!(Level::TRACE, "basis {}: degree {:?}", index, basis.degree());

        if options.verify {
            check_basis(index, requirements, &basis)?;
        }
        Ok(basis)
    })
}

// SELF-CHECKS
// ================================================================================================

/// Makes sure that `basis` has the one-hot shape required for the constraint at `index`.
fn check_basis<E: FieldElement>(
    index: usize,
    requirements: &RequirementSet<E>,
    basis: &Polynomial<E>,
) -> Result<(), InterpolationError> {
    let derivative = basis.derivative();
    for (j, constraint) in requirements.iter().enumerate() {
        if j == index {
            check_constraint(index, constraint, basis, &derivative)?;
            continue;
        }

        let place = constraint.place();
        if !basis.eval(place).is_zero() {
            return Err(InterpolationError::InternalInvariantViolation {
                index,
                reason: format!("basis polynomial does not vanish at site {place}"),
            });
        }
        if constraint.has_derivative() && !derivative.eval(place).is_zero() {
            return Err(InterpolationError::InternalInvariantViolation {
                index,
                reason: format!("basis polynomial does not have a double root at site {place}"),
            });
        }
    }

    Ok(())
}

/// Makes sure that `poly` (with pre-computed `derivative`) satisfies `constraint`.
pub(crate) fn check_constraint<E: FieldElement>(
    index: usize,
    constraint: &Constraint<E>,
    poly: &Polynomial<E>,
    derivative: &Polynomial<E>,
) -> Result<(), InterpolationError> {
    let place = constraint.place();
    if let Some(expected) = constraint.value() {
        let actual = poly.eval(place);
        if &actual != expected {
            return Err(InterpolationError::InternalInvariantViolation {
                index,
                reason: format!("expected value {expected} at site {place}, but was {actual}"),
            });
        }
    }

    if let Some(expected) = constraint.derivative() {
        let actual = derivative.eval(place);
        if &actual != expected {
            return Err(InterpolationError::InternalInvariantViolation {
                index,
                reason: format!("expected derivative {expected} at site {place}, but was {actual}"),
            });
        }
    }

    Ok(())
}
