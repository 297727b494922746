// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use math::{polynom, FieldElement};


// POLYNOMIAL
// ================================================================================================
/// A univariate polynomial in coefficient form over field `E`.
///
/// Coefficients are stored with the constant term first and never carry leading zeros, so two
/// polynomials are equal if and only if their coefficient vectors are equal. The zero polynomial
/// has no coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<E: FieldElement> {
    coefficients: Vec<E>,
}

impl<E: FieldElement> Polynomial<E> {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns the zero polynomial.
    pub fn zero() -> Self {
        Self { coefficients: Vec::new() }
    }

    /// Returns a constant polynomial.
    pub fn constant(value: E) -> Self {
        Self::from_coefficients(vec![value])
    }

    /// Returns a polynomial with the provided coefficients, constant term first; leading zeros
    /// are dropped.
    pub fn from_coefficients(coefficients: Vec<E>) -> Self {
        let mut coefficients = coefficients;
        while coefficients.last().is_some_and(|c| c.is_zero()) {
            coefficients.pop();
        }
        Self { coefficients }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the coefficients of this polynomial, constant term first.
    pub fn coefficients(&self) -> &[E] {
        &self.coefficients
    }

    /// Consumes this polynomial and returns its coefficients.
    pub fn into_coefficients(self) -> Vec<E> {
        self.coefficients
    }

    /// Returns the degree of this polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    // EVALUATION AND DERIVATIVES
    // --------------------------------------------------------------------------------------------

    /// Evaluates this polynomial at `x`.
    pub fn eval(&self, x: &E) -> E {
        polynom::eval(&self.coefficients, x)
    }

    /// Returns the formal derivative of this polynomial.
    pub fn derivative(&self) -> Self {
        Self::from_coefficients(polynom::derivative(&self.coefficients))
    }

    // FORMATTING
    // --------------------------------------------------------------------------------------------

    /// Renders this polynomial in the variable `var`, highest power first.
    pub fn display_with(&self, var: &str) -> String {
        polynom::format(&self.coefficients, var)
    }
}

impl<E: FieldElement> Default for Polynomial<E> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<E: FieldElement> fmt::Display for Polynomial<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with("x"))
    }
}

// ARITHMETIC
// ------------------------------------------------------------------------------------------------

impl<E: FieldElement> Add for Polynomial<E> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_coefficients(polynom::add(&self.coefficients, &rhs.coefficients))
    }
}

impl<E: FieldElement> Sub for Polynomial<E> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_coefficients(polynom::sub(&self.coefficients, &rhs.coefficients))
    }
}

impl<E: FieldElement> Mul for Polynomial<E> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_coefficients(polynom::mul(&self.coefficients, &rhs.coefficients))
    }
}

impl<E: FieldElement> Mul<E> for Polynomial<E> {
    type Output = Self;

    fn mul(self, rhs: E) -> Self {
        Self::from_coefficients(polynom::mul_by_const(&self.coefficients, &rhs))
    }
}

impl<E: FieldElement> Neg for Polynomial<E> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coefficients: self.coefficients.into_iter().map(|c| -c).collect(),
        }
    }
}
