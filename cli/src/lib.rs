// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{Context, Result};
use interpolator::{
    interpolate_set_with, Constraint, InterpolationOptions, Polynomial, RequirementSet,
};
use structopt::StructOpt;
use tracing::{event, info_span, Level};

pub mod requirements;
pub mod scalar;

use requirements::{parse_requirement, RequirementFile, DEFAULT_VARIABLE};
use scalar::Scalar;

#[cfg(test)]
mod tests;

// CLI OPTIONS
// ================================================================================================

#[derive(StructOpt, Debug, Default)]
#[structopt(name = "hermite", about = "Exact mixed Lagrange/Hermite interpolation")]
pub struct CliOptions {
    /// TOML file with a list of requirements
    #[structopt(short = "f", long = "file", parse(from_os_str))]
    pub file: Option<PathBuf>,

    /// Requirement in the form "place, value[, derivative]"; may be repeated
    #[structopt(short = "r", long = "requirement", number_of_values = 1, allow_hyphen_values = true)]
    pub requirements: Vec<String>,

    /// Name of the variable used when printing the interpolant
    #[structopt(long = "variable")]
    pub variable: Option<String>,

    /// Check the interpolant against every requirement and print the results
    #[structopt(long = "verify")]
    pub verify: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    pub verbose: u8,
}

impl CliOptions {
    /// Collects requirements from the requirement file (if any) followed by the ones given on
    /// the command line, and returns them with the name of the variable to print.
    pub fn load_requirements(&self) -> Result<(Vec<Constraint<Scalar>>, String)> {
        let file = match &self.file {
            Some(path) => RequirementFile::load(path)?,
            None => RequirementFile::default(),
        };

        let mut constraints = file.to_constraints()?;
        for source in self.requirements.iter() {
            constraints.push(parse_requirement(source)?);
        }

        let variable = self
            .variable
            .clone()
            .or(file.variable)
            .unwrap_or_else(|| DEFAULT_VARIABLE.to_string());
        Ok((constraints, variable))
    }

    /// Returns interpolation options matching these command-line options.
    pub fn interpolation_options(&self) -> InterpolationOptions {
        if self.verify {
            InterpolationOptions::new(true)
        } else {
            InterpolationOptions::default()
        }
    }
}

// RUNNER
// ================================================================================================

/// Builds the interpolant described by `options` and returns the report to print.
pub fn run(options: &CliOptions) -> Result<String> {
    let (constraints, variable) = options.load_requirements()?;
    event!(Level::DEBUG, "loaded {} requirements", constraints.len());

    let requirements =
        RequirementSet::new(constraints).context("requirements do not describe an interpolant")?;
    let interpolant = info_span!("interpolate", num_requirements = requirements.len())
        .in_scope(|| interpolate_set_with(&requirements, &options.interpolation_options()))
        .context("failed to build the interpolant")?;

    let mut report = build_report(&interpolant, &requirements, &variable);
    if options.verify {
        report.push_str(&build_verification_report(&interpolant, &requirements));
    }
    Ok(report)
}

/// Renders the interpolant together with its degree and degree bound.
pub fn build_report(
    interpolant: &Polynomial<Scalar>,
    requirements: &RequirementSet<Scalar>,
    variable: &str,
) -> String {
    let degree = match interpolant.degree() {
        Some(degree) => degree.to_string(),
        None => "undefined (zero polynomial)".to_string(),
    };

    format!(
        "P({variable}) = {}\ndegree: {degree} (bound: {})\n",
        interpolant.display_with(variable),
        requirements.degree_bound()
    )
}

/// Renders one line per requirement showing the value (and derivative) of the interpolant at
/// its site.
pub fn build_verification_report(
    interpolant: &Polynomial<Scalar>,
    requirements: &RequirementSet<Scalar>,
) -> String {
    let derivative = interpolant.derivative();
    let mut report = String::new();
    for (index, constraint) in requirements.iter().enumerate() {
        let place = constraint.place();
        let mut checks = Vec::new();
        if let Some(expected) = constraint.value() {
            let actual = interpolant.eval(place);
            checks.push(format_check("P", place, &actual, expected));
        }
        if let Some(expected) = constraint.derivative() {
            let actual = derivative.eval(place);
            checks.push(format_check("P'", place, &actual, expected));
        }
        report.push_str(&format!("requirement {index}: {}\n", checks.join(", ")));
    }
    report
}

fn format_check(name: &str, place: &Scalar, actual: &Scalar, expected: &Scalar) -> String {
    if actual == expected {
        format!("{name}({place}) = {actual} [ok]")
    } else {
        format!("{name}({place}) = {actual}, expected {expected} [FAILED]")
    }
}

// LOGGING
// ================================================================================================

/// Installs a tracing subscriber which writes to stderr; `RUST_LOG` directives are honored on
/// top of the level selected by `verbosity`.
pub fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
