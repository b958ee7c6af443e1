//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};

pub mod parsers;

#[derive(Parser)]
#[command(author, version, about)]
#[command(propagate_version = true)]
pub struct Opts {
    #[command(flatten)]
    pub sentry: SentryOpts,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(Args)]
pub struct SentryOpts {
    /// Sentry DSN
    #[arg(long, env = "SENTRY_DSN", global = true)]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(
        long,
        default_value = "0",
        env = "SENTRY_TRACES_SAMPLE_RATE",
        value_parser = parsers::sample_rate,
        global = true,
    )]
    pub traces_sample_rate: f32,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    /// Calculates the angles between the matrix rows and the all-ones vector
    Compute(ComputeOpts),

    /// Runs the built-in demonstration matrices
    Demo,
}

#[derive(Args)]
pub struct ComputeOpts {
    /// JSON file with a nested array of numbers, `-` reads from stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Angle unit
    #[arg(short, long, value_enum, default_value_t = Unit::Radians)]
    pub unit: Unit,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unit {
    Radians,
    Degrees,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    /// One angle per line, `NaN` for undefined angles
    Text,

    /// Array of `{"row": …, "angle": …}` objects, `null` for undefined angles
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_ok() {
        Opts::command().debug_assert();
    }

    #[test]
    fn compute_defaults_ok() {
        let opts = Opts::try_parse_from(["ones-angle", "compute"]).unwrap();
        match opts.subcommand {
            Subcommand::Compute(opts) => {
                assert_eq!(opts.input, PathBuf::from("-"));
                assert_eq!(opts.unit, Unit::Radians);
                assert_eq!(opts.format, Format::Text);
            }
            Subcommand::Demo => unreachable!(),
        }
    }

    #[test]
    fn compute_ok() {
        let opts = Opts::try_parse_from([
            "ones-angle",
            "compute",
            "matrix.json",
            "--unit",
            "degrees",
            "--format",
            "json",
        ])
        .unwrap();
        match opts.subcommand {
            Subcommand::Compute(opts) => {
                assert_eq!(opts.input, PathBuf::from("matrix.json"));
                assert_eq!(opts.unit, Unit::Degrees);
                assert_eq!(opts.format, Format::Json);
            }
            Subcommand::Demo => unreachable!(),
        }
    }

    #[test]
    fn invalid_sample_rate_fails() {
        assert!(
            Opts::try_parse_from(["ones-angle", "--traces-sample-rate", "2", "demo"]).is_err()
        );
    }
}
