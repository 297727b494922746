// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Instant;

use hermite_cli::{run, setup_logging, CliOptions};
use structopt::StructOpt;
use tracing::info;

// INTERPOLATION RUNNER
// ================================================================================================

fn main() -> anyhow::Result<()> {
    // read command-line args
    let options = CliOptions::from_args();

    // configure logging
    setup_logging(options.verbose);

    let now = Instant::now();
    let report = run(&options)?;
    info!("interpolant built in {} ms", now.elapsed().as_millis());

    print!("{report}");
    Ok(())
}
