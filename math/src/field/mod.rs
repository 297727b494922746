// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

mod traits;
pub use traits::{ExtensionOf, FieldElement};

mod rational;
pub use rational::Rational;

mod extensions;
pub use extensions::{Indeterminate, Ln2, QuadExtension, Radicand, RationalFunction, Sqrt2};
