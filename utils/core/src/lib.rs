// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains utility macros used by other crates of the hermite interpolation
//! workspace.
//!
//! The only non-trivial piece is the [iter!] macro which switches between sequential and
//! rayon-backed parallel iteration depending on whether the `concurrent` feature of the *calling*
//! crate is enabled.

pub mod iterators;

#[cfg(test)]
mod tests;

// FEATURE-BASED RE-EXPORTS
// ================================================================================================

#[cfg(feature = "concurrent")]
pub use rayon;
