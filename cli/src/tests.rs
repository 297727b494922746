// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::{io::Write, path::PathBuf};

use interpolator::InterpolationError;
use structopt::StructOpt;

use super::{run, CliOptions};

fn demo_file() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../demos/ln2.toml")
}

// OPTIONS
// ================================================================================================

#[test]
fn parse_options() {
    let options = CliOptions::from_iter([
        "hermite",
        "-r",
        "0, 1, 0",
        "--requirement",
        "-1, 0",
        "--variable",
        "t",
        "--verify",
        "-vv",
    ]);

    assert_eq!(None, options.file);
    assert_eq!(vec!["0, 1, 0".to_string(), "-1, 0".to_string()], options.requirements);
    assert_eq!(Some("t".to_string()), options.variable);
    assert!(options.verify);
    assert_eq!(2, options.verbose);
    assert!(options.interpolation_options().verify);
}

#[test]
fn command_line_overrides_file_variable() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "variable = \"t\"\n[[requirement]]\nplace = 0\nvalue = 1").unwrap();

    let mut options = CliOptions {
        file: Some(file.path().to_path_buf()),
        requirements: vec!["1, 0".to_string()],
        ..Default::default()
    };
    let (constraints, variable) = options.load_requirements().unwrap();
    assert_eq!(2, constraints.len());
    assert_eq!("t", variable);

    options.variable = Some("s".to_string());
    assert_eq!("s", options.load_requirements().unwrap().1);
}

// RUNNER
// ================================================================================================

#[test]
fn run_with_command_line_requirements() {
    let options = CliOptions {
        requirements: vec!["4, 6".to_string(), "6, 5".to_string()],
        ..Default::default()
    };
    assert_eq!("P(x) = -1/2*x + 8\ndegree: 1 (bound: 1)\n", run(&options).unwrap());

    let options = CliOptions {
        requirements: vec!["0, 0, 0".to_string(), "1, 0, 1".to_string()],
        variable: Some("t".to_string()),
        verify: true,
        ..Default::default()
    };
    let expected = "P(t) = t^3 - t^2\n\
                    degree: 3 (bound: 3)\n\
                    requirement 0: P(0) = 0 [ok], P'(0) = 0 [ok]\n\
                    requirement 1: P(1) = 0 [ok], P'(1) = 1 [ok]\n";
    assert_eq!(expected, run(&options).unwrap());
}

#[test]
fn run_zero_interpolant() {
    let options = CliOptions { requirements: vec!["3, 0".to_string()], ..Default::default() };
    assert_eq!("P(x) = 0\ndegree: undefined (zero polynomial) (bound: 0)\n", run(&options).unwrap());
}

#[test]
fn run_demo_file() {
    let options = CliOptions {
        file: Some(demo_file()),
        verify: true,
        ..Default::default()
    };
    let report = run(&options).unwrap();

    assert!(report.starts_with("P(x) = "));
    assert!(report.contains("(bound: 4)"));
    assert_eq!(3, report.matches("requirement ").count());
    assert!(!report.contains("FAILED"));
}

#[test]
fn run_reports_invalid_requirements() {
    let options = CliOptions::default();
    let error = run(&options).unwrap_err();
    assert_eq!(
        Some(&InterpolationError::EmptyRequirementSet),
        error.downcast_ref::<InterpolationError>()
    );

    let options = CliOptions {
        requirements: vec!["1, 0".to_string(), "1, 5".to_string()],
        ..Default::default()
    };
    let error = run(&options).unwrap_err();
    assert_eq!(
        Some(&InterpolationError::DuplicatePlace(0, 1)),
        error.downcast_ref::<InterpolationError>()
    );

    let options = CliOptions {
        requirements: vec!["1, -, 2".to_string()],
        ..Default::default()
    };
    let error = run(&options).unwrap_err();
    assert_eq!(
        Some(&InterpolationError::UnsupportedConstraintShape(0)),
        error.downcast_ref::<InterpolationError>()
    );
}
