// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt::Debug;

mod quadratic;
pub use quadratic::QuadExtension;

mod transcendental;
pub use transcendental::RationalFunction;

#[cfg(test)]
mod tests;

// RADICAND
// ================================================================================================

/// Names the square root adjoined by a [QuadExtension].
///
/// `VALUE` must not be a square in the base field the extension is built over; otherwise the
/// extension is not a field and equality of its elements is no longer exact.
pub trait Radicand: 'static + Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync {
    /// The integer d such that the extension adjoins √d.
    const VALUE: i64;

    /// The symbol used when printing √d.
    const SYMBOL: &'static str;
}

/// Marker for √2.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sqrt2;

impl Radicand for Sqrt2 {
    const VALUE: i64 = 2;
    const SYMBOL: &'static str = "sqrt(2)";
}

// INDETERMINATE
// ================================================================================================

/// Names the element adjoined by a [RationalFunction] field.
///
/// The element is treated as transcendental over the base field: two rational functions are
/// equal only if they are equal as formal rational functions.
pub trait Indeterminate:
    'static + Copy + Clone + Debug + Default + PartialEq + Eq + Send + Sync
{
    /// The symbol used when printing the adjoined element.
    const SYMBOL: &'static str;
}

/// Marker for the natural logarithm of two, which is transcendental over ℚ(√2).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ln2;

impl Indeterminate for Ln2 {
    const SYMBOL: &'static str = "ln(2)";
}
