// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Loading of interpolation requirements from TOML files and command-line arguments.
//!
//! A requirement file looks as follows:
//!
//! ```toml
//! variable = "x"
//!
//! [[requirement]]
//! place = "1"
//! value = "0"
//! derivative = "1/ln(2)"
//!
//! [[requirement]]
//! place = "sqrt(2)"
//! value = "1/2"
//! ```
//!
//! Scalars are written as expressions (see [crate::scalar]); plain TOML integers are accepted
//! as well.

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};
use interpolator::Constraint;
use serde::Deserialize;

use crate::scalar::{parse_scalar, ParseScalarError, Scalar};


/// Name of the variable used when none is specified.
pub const DEFAULT_VARIABLE: &str = "x";

// REQUIREMENT FILE
// ================================================================================================

/// Contents of a requirement file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequirementFile {
    /// Name of the variable used when printing the interpolant.
    #[serde(default)]
    pub variable: Option<String>,

    /// Requirements in the order in which they appear in the file.
    #[serde(default, rename = "requirement")]
    pub requirements: Vec<RequirementEntry>,
}

/// A single `[[requirement]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequirementEntry {
    pub place: ScalarSource,
    #[serde(default)]
    pub value: Option<ScalarSource>,
    #[serde(default)]
    pub derivative: Option<ScalarSource>,
}

/// A scalar as written in a requirement file: either an expression or a TOML integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScalarSource {
    Integer(i64),
    Expression(String),
}

impl ScalarSource {
    pub fn parse(&self) -> Result<Scalar, ParseScalarError> {
        match self {
            Self::Integer(value) => Ok(Scalar::from(*value)),
            Self::Expression(source) => parse_scalar(source),
        }
    }
}

impl fmt::Display for ScalarSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Expression(source) => write!(f, "{source}"),
        }
    }
}

impl RequirementFile {
    /// Reads and parses a requirement file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read requirement file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse requirement file {}", path.display()))
    }

    /// Parses the contents of a requirement file.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Evaluates all requirements in this file into constraints, preserving their order.
    pub fn to_constraints(&self) -> Result<Vec<Constraint<Scalar>>> {
        self.requirements
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.to_constraint().with_context(|| format!("invalid requirement {index}"))
            })
            .collect()
    }
}

impl RequirementEntry {
    /// Evaluates the scalars of this entry into a constraint.
    pub fn to_constraint(&self) -> Result<Constraint<Scalar>> {
        let place = parse_part(&self.place, "place")?;
        let value = self.value.as_ref().map(|v| parse_part(v, "value")).transpose()?;
        let derivative = self.derivative.as_ref().map(|d| parse_part(d, "derivative")).transpose()?;
        Ok(Constraint::from_parts(place, value, derivative))
    }
}

fn parse_part(source: &ScalarSource, name: &str) -> Result<Scalar> {
    source.parse().with_context(|| format!("cannot parse {name} '{source}'"))
}

// COMMAND-LINE REQUIREMENTS
// ================================================================================================

/// Parses a requirement written as `place, value[, derivative]`.
///
/// Either the value or the derivative may be written as `-` to leave it unspecified.
pub fn parse_requirement(source: &str) -> Result<Constraint<Scalar>> {
    let parts = source.split(',').map(str::trim).collect::<Vec<_>>();
    if !(2..=3).contains(&parts.len()) {
        anyhow::bail!("requirement '{source}' must have the form 'place, value[, derivative]'");
    }

    let optional = |part: Option<&&str>, name: &str| -> Result<Option<Scalar>> {
        match part {
            None | Some(&"-") => Ok(None),
            Some(part) => parse_scalar(part)
                .map(Some)
                .with_context(|| format!("cannot parse {name} '{part}' in requirement '{source}'")),
        }
    };

    let place = parse_scalar(parts[0])
        .with_context(|| format!("cannot parse place '{}' in requirement '{source}'", parts[0]))?;
    let value = optional(parts.get(1), "value")?;
    let derivative = optional(parts.get(2), "derivative")?;
    Ok(Constraint::from_parts(place, value, derivative))
}
