// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use super::Rational;

// FIELD ELEMENT
// ================================================================================================

/// Defines an element of an exact field of characteristic zero.
///
/// Every implementation keeps its elements in a canonical form, so `==` is semantic equality
/// and never an approximation. Since every such field contains the rationals, all elements can
/// be built from a [Rational] or from a machine integer.
pub trait FieldElement:
    Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + PartialEq
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + Neg<Output = Self>
    + From<Rational>
    + From<i64>
    + From<u64>
{
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns the multiplicative identity.
    fn one() -> Self;

    /// Returns true if this element is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this element is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == Self::one()
    }

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns this field element added to itself.
    fn double(&self) -> Self {
        self.clone() + self.clone()
    }

    /// Returns this field element raised to power 2.
    fn square(&self) -> Self {
        self.clone() * self.clone()
    }

    /// Returns this field element raised to power 3.
    fn cube(&self) -> Self {
        self.square() * self.clone()
    }

    /// Exponentiates this field element by `power` parameter.
    fn exp(&self, power: u32) -> Self {
        let mut r = Self::one();
        let mut b = self.clone();
        let mut p = power;

        if p == 0 {
            return r;
        } else if b.is_zero() {
            return b;
        }

        while p > 0 {
            if p & 1 == 1 {
                r *= b.clone();
            }
            p >>= 1;
            if p > 0 {
                b = b.square();
            }
        }

        r
    }

    /// Returns a multiplicative inverse of this field element. If this element is ZERO, ZERO is
    /// returned.
    fn inv(&self) -> Self;

    // INITIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Returns a vector initialized with all zero elements.
    fn zeroed_vector(n: usize) -> Vec<Self> {
        vec![Self::zero(); n]
    }
}

// EXTENSION OF
// ================================================================================================

/// Specifies that a field is an extension of another field.
///
/// Elements of the base field `B` embed into `Self`; multiplication by a base element is usually
/// cheaper than a full multiplication in the extension.
pub trait ExtensionOf<B: FieldElement>: FieldElement {
    /// Returns the image of the base element `value` in this field.
    fn from_base(value: B) -> Self;

    /// Returns this element multiplied by the base element `other`.
    fn mul_base(self, other: &B) -> Self;
}
