// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use super::{
    super::{ExtensionOf, FieldElement, Rational},
    Indeterminate,
};
use crate::{polynom, utils::is_compound};

// RATIONAL FUNCTION FIELD
// ================================================================================================

/// Represents an element of the purely transcendental extension B(t) of a field B.
///
/// An element is a quotient n(t) / d(t) of two polynomials over B, where t is the element named
/// by the [Indeterminate] type parameter. Elements are always kept in canonical form:
/// * n and d have no common factor of positive degree;
/// * d is monic;
/// * zero is represented as 0 / 1.
///
/// Canonical form makes structural equality coincide with equality of rational functions, which
/// is exact equality of field elements as long as t is transcendental over B.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalFunction<B: FieldElement, T: Indeterminate> {
    numerator: Vec<B>,
    denominator: Vec<B>,
    _marker: PhantomData<T>,
}

impl<B: FieldElement, T: Indeterminate> RationalFunction<B, T> {
    /// Returns the rational function `numerator / denominator`, reduced to canonical form.
    ///
    /// Polynomial coefficients are listed from the constant term upwards.
    ///
    /// # Panics
    /// Panics if `denominator` is the zero polynomial.
    pub fn new(numerator: Vec<B>, denominator: Vec<B>) -> Self {
        let denominator = polynom::remove_leading_zeros(&denominator);
        assert!(!denominator.is_empty(), "denominator cannot be the zero polynomial");
        Self::reduce(polynom::remove_leading_zeros(&numerator), denominator)
    }

    /// Returns the polynomial `coefficients` as an element of this field.
    pub fn from_polynomial(coefficients: Vec<B>) -> Self {
        Self::from_parts(polynom::remove_leading_zeros(&coefficients), vec![B::one()])
    }

    /// Returns the adjoined element t.
    pub fn indeterminate() -> Self {
        Self::from_parts(vec![B::zero(), B::one()], vec![B::one()])
    }

    /// Returns the numerator of this element in canonical form.
    pub fn numerator(&self) -> &[B] {
        &self.numerator
    }

    /// Returns the (monic) denominator of this element in canonical form.
    pub fn denominator(&self) -> &[B] {
        &self.denominator
    }

    /// Returns true if the denominator of this element is the constant one.
    pub fn is_polynomial(&self) -> bool {
        self.denominator.len() == 1
    }

    /// Returns the value of this element when it does not depend on t, and None otherwise.
    pub fn as_base(&self) -> Option<B> {
        match (self.numerator.len(), self.is_polynomial()) {
            (0, _) => Some(B::zero()),
            (1, true) => Some(self.numerator[0].clone()),
            _ => None,
        }
    }

    // HELPER FUNCTIONS
    // --------------------------------------------------------------------------------------------

    fn from_parts(numerator: Vec<B>, denominator: Vec<B>) -> Self {
        Self { numerator, denominator, _marker: PhantomData }
    }

    /// Brings `numerator / denominator` into canonical form; both inputs must be free of leading
    /// zeros and the denominator must be non-empty.
    fn reduce(numerator: Vec<B>, denominator: Vec<B>) -> Self {
        if numerator.is_empty() {
            return Self::zero();
        }

        let gcd = polynom::gcd(&numerator, &denominator);
        let (numerator, denominator) = if gcd.len() > 1 {
            (polynom::div(&numerator, &gcd), polynom::div(&denominator, &gcd))
        } else {
            (numerator, denominator)
        };

        let lead = denominator.last().cloned().unwrap_or_else(B::one);
        if lead.is_one() {
            return Self::from_parts(numerator, denominator);
        }
        let lead_inv = lead.inv();
        Self::from_parts(
            polynom::mul_by_const(&numerator, &lead_inv),
            polynom::mul_by_const(&denominator, &lead_inv),
        )
    }
}

impl<B: FieldElement, T: Indeterminate> FieldElement for RationalFunction<B, T> {
    fn zero() -> Self {
        Self::from_parts(Vec::new(), vec![B::one()])
    }

    fn one() -> Self {
        Self::from_parts(vec![B::one()], vec![B::one()])
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.numerator.is_empty()
    }

    fn inv(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        // numerator and denominator are already coprime; only the leading coefficient changes
        Self::reduce(self.denominator.clone(), self.numerator.clone())
    }
}

impl<B: FieldElement, T: Indeterminate> ExtensionOf<B> for RationalFunction<B, T> {
    fn from_base(value: B) -> Self {
        if value.is_zero() {
            Self::zero()
        } else {
            Self::from_parts(vec![value], vec![B::one()])
        }
    }

    fn mul_base(self, other: &B) -> Self {
        if other.is_zero() {
            return Self::zero();
        }
        Self::from_parts(polynom::mul_by_const(&self.numerator, other), self.denominator)
    }
}

impl<B: FieldElement, T: Indeterminate> Default for RationalFunction<B, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<B: FieldElement, T: Indeterminate> fmt::Display for RationalFunction<B, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let numerator = polynom::format(&self.numerator, T::SYMBOL);
        if self.is_polynomial() {
            return write!(f, "{numerator}");
        }

        let denominator = polynom::format(&self.denominator, T::SYMBOL);
        if is_compound(&numerator) || numerator.contains('/') {
            write!(f, "({numerator})")?;
        } else {
            write!(f, "{numerator}")?;
        }
        if is_compound(&denominator) || denominator.contains(['*', '/']) {
            write!(f, "/({denominator})")
        } else {
            write!(f, "/{denominator}")
        }
    }
}

// OVERLOADED OPERATORS
// ------------------------------------------------------------------------------------------------

impl<B: FieldElement, T: Indeterminate> Add for RationalFunction<B, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.denominator == rhs.denominator {
            let numerator = polynom::add(&self.numerator, &rhs.numerator);
            return Self::reduce(polynom::remove_leading_zeros(&numerator), self.denominator);
        }
        let numerator = polynom::add(
            &polynom::mul(&self.numerator, &rhs.denominator),
            &polynom::mul(&rhs.numerator, &self.denominator),
        );
        let denominator = polynom::mul(&self.denominator, &rhs.denominator);
        Self::reduce(polynom::remove_leading_zeros(&numerator), denominator)
    }
}

impl<B: FieldElement, T: Indeterminate> AddAssign for RationalFunction<B, T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs
    }
}

impl<B: FieldElement, T: Indeterminate> Sub for RationalFunction<B, T> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<B: FieldElement, T: Indeterminate> SubAssign for RationalFunction<B, T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl<B: FieldElement, T: Indeterminate> Mul for RationalFunction<B, T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let numerator = polynom::mul(&self.numerator, &rhs.numerator);
        let denominator = polynom::mul(&self.denominator, &rhs.denominator);
        Self::reduce(numerator, denominator)
    }
}

impl<B: FieldElement, T: Indeterminate> MulAssign for RationalFunction<B, T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs
    }
}

impl<B: FieldElement, T: Indeterminate> Div for RationalFunction<B, T> {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl<B: FieldElement, T: Indeterminate> DivAssign for RationalFunction<B, T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs
    }
}

impl<B: FieldElement, T: Indeterminate> Neg for RationalFunction<B, T> {
    type Output = Self;

    fn neg(self) -> Self {
        let numerator = self.numerator.into_iter().map(|c| -c).collect();
        Self::from_parts(numerator, self.denominator)
    }
}

// TYPE CONVERSIONS
// ------------------------------------------------------------------------------------------------

impl<B: FieldElement, T: Indeterminate> From<Rational> for RationalFunction<B, T> {
    fn from(value: Rational) -> Self {
        Self::from_base(B::from(value))
    }
}

impl<B: FieldElement, T: Indeterminate> From<i64> for RationalFunction<B, T> {
    fn from(value: i64) -> Self {
        Self::from_base(B::from(value))
    }
}

impl<B: FieldElement, T: Indeterminate> From<u64> for RationalFunction<B, T> {
    fn from(value: u64) -> Self {
        Self::from_base(B::from(value))
    }
}
