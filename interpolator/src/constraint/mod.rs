// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::{fmt, slice};

use math::FieldElement;

use crate::InterpolationError;


// CONSTRAINT
// ================================================================================================
/// A single interpolation requirement: the value of a polynomial at a site and, optionally, the
/// value of its first derivative at the same site.
///
/// The value is optional at the type level only so that derivative-only requirements can be
/// expressed and rejected by [RequirementSet::new()].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint<E: FieldElement> {
    place: E,
    value: Option<E>,
    derivative: Option<E>,
}

impl<E: FieldElement> Constraint<E> {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a constraint requiring `p(place) = value`.
    pub fn new(place: E, value: E) -> Self {
        Self { place, value: Some(value), derivative: None }
    }

    /// Returns a constraint requiring `p(place) = value` and `p'(place) = derivative`.
    pub fn with_derivative(place: E, value: E, derivative: E) -> Self {
        Self {
            place,
            value: Some(value),
            derivative: Some(derivative),
        }
    }

    /// Returns a constraint requiring only `p'(place) = derivative`.
    ///
    /// Such constraints cannot be interpolated; they exist so that requirement lists read from
    /// external sources can be represented faithfully before validation.
    pub fn derivative_only(place: E, derivative: E) -> Self {
        Self { place, value: None, derivative: Some(derivative) }
    }

    /// Returns a constraint with arbitrary optional requirements.
    pub fn from_parts(place: E, value: Option<E>, derivative: Option<E>) -> Self {
        Self { place, value, derivative }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the site at which this constraint applies.
    pub fn place(&self) -> &E {
        &self.place
    }

    /// Returns the required value, if any.
    pub fn value(&self) -> Option<&E> {
        self.value.as_ref()
    }

    /// Returns the required first derivative, if any.
    pub fn derivative(&self) -> Option<&E> {
        self.derivative.as_ref()
    }

    /// Returns true if this constraint also fixes the first derivative.
    pub fn has_derivative(&self) -> bool {
        self.derivative.is_some()
    }
}

impl<E: FieldElement> fmt::Display for Constraint<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, ", self.place)?;
        match &self.value {
            Some(value) => write!(f, "{value}, ")?,
            None => write!(f, "-, ")?,
        }
        match &self.derivative {
            Some(derivative) => write!(f, "{derivative})"),
            None => write!(f, "-)"),
        }
    }
}

// REQUIREMENT SET
// ================================================================================================
/// A validated, non-empty and ordered list of constraints.
///
/// Every constraint in the set requires a value, and no two constraints share a site. The order
/// of constraints does not affect the interpolant, but fixes the order in which basis
/// polynomials are built and summed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementSet<E: FieldElement> {
    constraints: Vec<Constraint<E>>,
}

impl<E: FieldElement> RequirementSet<E> {
    /// Validates the provided constraints and wraps them into a requirement set.
    ///
    /// # Errors
    /// Returns an error if:
    /// * `constraints` is empty.
    /// * Any constraint does not require a value; the first such constraint is reported.
    /// * Two constraints share a site; the first such pair in iteration order is reported.
    pub fn new(constraints: Vec<Constraint<E>>) -> Result<Self, InterpolationError> {
        if constraints.is_empty() {
            return Err(InterpolationError::EmptyRequirementSet);
        }

        if let Some(index) = constraints.iter().position(|c| c.value.is_none()) {
            return Err(InterpolationError::UnsupportedConstraintShape(index));
        }

        for (second, constraint) in constraints.iter().enumerate().skip(1) {
            if let Some(first) = constraints[..second].iter().position(|c| c.place == constraint.place)
            {
                return Err(InterpolationError::DuplicatePlace(first, second));
            }
        }

        Ok(Self { constraints })
    }

    /// Returns the number of constraints in this set.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Always returns false; requirement sets cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Returns the constraints in this set in their original order.
    pub fn constraints(&self) -> &[Constraint<E>] {
        &self.constraints
    }

    /// Returns the constraint at the specified index, if it exists.
    pub fn get(&self, index: usize) -> Option<&Constraint<E>> {
        self.constraints.get(index)
    }

    /// Returns an upper bound on the degree of the interpolant for this set.
    ///
    /// Every constraint contributes one condition, and every derivative requirement contributes
    /// one more; the bound is the number of conditions minus one.
    pub fn degree_bound(&self) -> usize {
        let num_derivatives = self.constraints.iter().filter(|c| c.has_derivative()).count();
        self.constraints.len() + num_derivatives - 1
    }

    /// Returns an iterator over the constraints in this set.
    pub fn iter(&self) -> slice::Iter<'_, Constraint<E>> {
        self.constraints.iter()
    }

    /// Consumes this set and returns the underlying constraints.
    pub fn into_constraints(self) -> Vec<Constraint<E>> {
        self.constraints
    }
}

impl<E: FieldElement> TryFrom<Vec<Constraint<E>>> for RequirementSet<E> {
    type Error = InterpolationError;

    fn try_from(constraints: Vec<Constraint<E>>) -> Result<Self, Self::Error> {
        Self::new(constraints)
    }
}

impl<'a, E: FieldElement> IntoIterator for &'a RequirementSet<E> {
    type Item = &'a Constraint<E>;
    type IntoIter = slice::Iter<'a, Constraint<E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
