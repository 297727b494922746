// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of the field of rational numbers backed by arbitrary-precision integers.

use core::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::FieldElement;
use crate::errors::ElementParsingError;


// FIELD ELEMENT
// ================================================================================================

/// Represents a rational number p / q with arbitrary-precision numerator and denominator.
///
/// Internal values are always kept in lowest terms with a positive denominator, so two equal
/// rationals always have identical representations.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(BigRational);

impl Rational {
    /// Creates a new rational `numer / denom` and reduces it to lowest terms.
    ///
    /// # Panics
    /// Panics if `denom` is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Self {
        let denom = denom.into();
        assert!(!denom.is_zero(), "denominator cannot be zero");
        Self(BigRational::new(numer.into(), denom))
    }

    /// Creates a new rational from an integer.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Returns the numerator of this rational in lowest terms.
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Returns the (always positive) denominator of this rational in lowest terms.
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Returns true if the denominator of this rational is one.
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Returns true if this rational is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns the absolute value of this rational.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the square root of this rational if it is itself a rational number, and None
    /// otherwise (including for negative values).
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_negative() {
            return None;
        }
        let numer_root = exact_sqrt(self.numer())?;
        let denom_root = exact_sqrt(self.denom())?;
        Some(Self(BigRational::new(numer_root, denom_root)))
    }

    /// Returns the underlying arbitrary-precision rational.
    pub fn as_big_rational(&self) -> &BigRational {
        &self.0
    }
}

impl FieldElement for Rational {
    fn zero() -> Self {
        Self(BigRational::zero())
    }

    fn one() -> Self {
        Self(BigRational::one())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn inv(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self(self.0.recip())
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Debug for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for Rational {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Rational {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl Sub for Rational {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Rational {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul for Rational {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl MulAssign for Rational {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0
    }
}

impl Div for Rational {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl DivAssign for Rational {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = self.clone() / rhs
    }
}

impl Neg for Rational {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<u64> for Rational {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl FromStr for Rational {
    type Err = ElementParsingError;

    /// Parses integers (`-3`), fractions (`7/2`) and finite decimals (`0.25`).
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let source = source.trim();
        if source.is_empty() {
            return Err(ElementParsingError::Empty);
        }

        if let Some((numer, denom)) = source.split_once('/') {
            let numer = parse_integer(numer.trim(), source)?;
            let denom = parse_integer(denom.trim(), source)?;
            if denom.is_zero() {
                return Err(ElementParsingError::ZeroDenominator(source.to_string()));
            }
            return Ok(Self(BigRational::new(numer, denom)));
        }

        if let Some((whole, fraction)) = source.split_once('.') {
            let (negative, whole) = match whole.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, whole.strip_prefix('+').unwrap_or(whole)),
            };
            let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
            if fraction.is_empty() || !is_digits(whole) || !is_digits(fraction) {
                return Err(ElementParsingError::InvalidLiteral(source.to_string()));
            }
            let digits = format!("{whole}{fraction}");
            let mut numer = parse_integer(&digits, source)?;
            if negative {
                numer = -numer;
            }
            let denom = num_traits::pow(BigInt::from(10u8), fraction.len());
            return Ok(Self(BigRational::new(numer, denom)));
        }

        parse_integer(source, source).map(Self::from_integer)
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn parse_integer(digits: &str, source: &str) -> Result<BigInt, ElementParsingError> {
    if digits.is_empty() {
        return Err(ElementParsingError::InvalidLiteral(source.to_string()));
    }
    digits
        .parse::<BigInt>()
        .map_err(|_| ElementParsingError::InvalidLiteral(source.to_string()))
}

fn exact_sqrt(value: &BigInt) -> Option<BigInt> {
    let root = value.sqrt();
    if &root * &root == *value {
        Some(root)
    } else {
        None
    }
}
