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
    Radicand,
};
use crate::utils::format_terms;

// QUADRATIC EXTENSION FIELD
// ================================================================================================

/// Represents an element in a quadratic extension B(√d) of a field B.
///
/// The extension element is defined as α + β * √d, where d is the integer named by the
/// [Radicand] type parameter, and α and β are base field elements. Since d is not a square in B,
/// the pair (α, β) is unique and equality is decided component-wise.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct QuadExtension<B: FieldElement, R: Radicand>(B, B, PhantomData<R>);

impl<B: FieldElement, R: Radicand> QuadExtension<B, R> {
    /// Returns a new extension element instantiated from the provided base elements.
    pub fn new(a: B, b: B) -> Self {
        Self(a, b, PhantomData)
    }

    /// Returns √d as an element of this field.
    pub fn root() -> Self {
        Self::new(B::zero(), B::one())
    }

    /// Returns d as an element of the base field.
    pub fn radicand() -> B {
        B::from(R::VALUE)
    }

    /// Returns α, the component of this element which lies in the base field.
    pub fn base_part(&self) -> &B {
        &self.0
    }

    /// Returns β, the coefficient of √d.
    pub fn radical_part(&self) -> &B {
        &self.1
    }

    /// Returns true if this element lies in the base field.
    pub fn is_base(&self) -> bool {
        self.1.is_zero()
    }

    /// Returns the conjugate α - β * √d of this element.
    pub fn conjugate(&self) -> Self {
        Self::new(self.0.clone(), -self.1.clone())
    }

    /// Returns the norm α^2 - d * β^2, which is the product of this element with its conjugate.
    pub fn norm(&self) -> B {
        self.0.square() - Self::radicand() * self.1.square()
    }
}

impl<B: FieldElement, R: Radicand> FieldElement for QuadExtension<B, R> {
    fn zero() -> Self {
        Self::new(B::zero(), B::zero())
    }

    fn one() -> Self {
        Self::new(B::one(), B::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero() && self.1.is_zero()
    }

    #[inline]
    fn double(&self) -> Self {
        Self::new(self.0.double(), self.1.double())
    }

    fn inv(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let norm = self.norm();
        debug_assert!(!norm.is_zero(), "norm of a non-zero element must be non-zero");
        let denom_inv = norm.inv();

        Self::new(self.0.clone() * denom_inv.clone(), -(self.1.clone() * denom_inv))
    }
}

impl<B: FieldElement, R: Radicand> ExtensionOf<B> for QuadExtension<B, R> {
    fn from_base(value: B) -> Self {
        Self::new(value, B::zero())
    }

    #[inline]
    fn mul_base(self, other: &B) -> Self {
        Self::new(self.0 * other.clone(), self.1 * other.clone())
    }
}

impl<B: FieldElement, R: Radicand> fmt::Display for QuadExtension<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let terms = [(&self.0, None), (&self.1, Some(R::SYMBOL.to_string()))];
        write!(f, "{}", format_terms(terms))
    }
}

// OVERLOADED OPERATORS
// ------------------------------------------------------------------------------------------------

impl<B: FieldElement, R: Radicand> Add for QuadExtension<B, R> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl<B: FieldElement, R: Radicand> AddAssign for QuadExtension<B, R> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl<B: FieldElement, R: Radicand> Sub for QuadExtension<B, R> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl<B: FieldElement, R: Radicand> SubAssign for QuadExtension<B, R> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl<B: FieldElement, R: Radicand> Mul for QuadExtension<B, R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        // (a0 + a1 * √d) * (b0 + b1 * √d) = (a0 * b0 + d * a1 * b1) + (a0 * b1 + a1 * b0) * √d
        let a0b0 = self.0.clone() * rhs.0.clone();
        let a1b1 = self.1.clone() * rhs.1.clone();
        let cross = self.0 * rhs.1 + self.1 * rhs.0;
        Self::new(a0b0 + Self::radicand() * a1b1, cross)
    }
}

impl<B: FieldElement, R: Radicand> MulAssign for QuadExtension<B, R> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs
    }
}

impl<B: FieldElement, R: Radicand> Div for QuadExtension<B, R> {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl<B: FieldElement, R: Radicand> DivAssign for QuadExtension<B, R> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs
    }
}

impl<B: FieldElement, R: Radicand> Neg for QuadExtension<B, R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0, -self.1)
    }
}

// TYPE CONVERSIONS
// ------------------------------------------------------------------------------------------------

impl<B: FieldElement, R: Radicand> From<Rational> for QuadExtension<B, R> {
    fn from(value: Rational) -> Self {
        Self::from_base(B::from(value))
    }
}

impl<B: FieldElement, R: Radicand> From<i64> for QuadExtension<B, R> {
    fn from(value: i64) -> Self {
        Self::from_base(B::from(value))
    }
}

impl<B: FieldElement, R: Radicand> From<u64> for QuadExtension<B, R> {
    fn from(value: u64) -> Self {
        Self::from_base(B::from(value))
    }
}
