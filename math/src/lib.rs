// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains modules with mathematical operations needed for exact polynomial
//! interpolation.
//!
//! # Exact fields
//! All computations are performed over fields of characteristic zero whose elements are kept in
//! a canonical form, so equality of two elements is always decided exactly. The crate provides:
//! * [Rational](fields::Rational) - the field of rational numbers ℚ backed by arbitrary-precision
//!   integers.
//! * [QuadExtension](fields::QuadExtension) - a quadratic extension B(√d) of any field B in which
//!   d is not a square (e.g. ℚ(√2) via the [Sqrt2](fields::Sqrt2) marker).
//! * [RationalFunction](fields::RationalFunction) - the purely transcendental extension B(t) of
//!   any field B, used to represent constants such as ln 2 exactly (via the
//!   [Ln2](fields::Ln2) marker).
//!
//! These fields compose, so ℚ(√2)(ln 2) is simply
//! `RationalFunction<QuadExtension<Rational, Sqrt2>, Ln2>`.
//!
//! # Polynomials
//! The [polynom] module implements basic polynomial operations such as evaluation,
//! interpolation, addition, multiplication, division, differentiation and gcd. Polynomials are
//! represented as slices of field elements, with the coefficient of the constant term first.

pub mod polynom;
pub mod utils;

mod field;
pub use field::{ExtensionOf, FieldElement};
pub mod fields {
    //! Exact field implementations.
    //!
    //! This module contains the rational base field as well as the quadratic and transcendental
    //! extensions which can be layered on top of it.

    pub use super::field::{
        Indeterminate, Ln2, QuadExtension, Radicand, Rational, RationalFunction, Sqrt2,
    };
}

mod errors;
pub use errors::ElementParsingError;
