use clap::Parser;

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod compute;
mod demo;
mod helpers;
mod opts;
mod prelude;

fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard =
        helpers::tracing::init(opts.sentry.sentry_dsn.clone(), opts.sentry.traces_sample_rate)?;

    let result = match opts.subcommand {
        Subcommand::Compute(opts) => compute::run(opts),
        Subcommand::Demo => demo::run(),
    };
    if let Err(error) = &result {
        sentry::integrations::anyhow::capture_anyhow(error);
    }
    result
}
