// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Defines errors which can occur while parsing a field element from its textual form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementParsingError {
    #[error("cannot parse a field element from an empty string")]
    Empty,

    #[error("'{0}' is not a valid rational literal")]
    InvalidLiteral(String),

    #[error("'{0}' has a zero denominator")]
    ZeroDenominator(String),
}
