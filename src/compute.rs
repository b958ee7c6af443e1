use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use ndarray::Array1;
use ones_angle::{angles_to_ones, to_degrees, IntoMatrix};
use serde::Serialize;
use serde_json::Value;

use crate::helpers::tracing::format_elapsed;
use crate::opts::{ComputeOpts, Format, Unit};
use crate::prelude::*;

#[instrument(skip_all, fields(input = %opts.input.display()))]
pub fn run(opts: ComputeOpts) -> Result {
    sentry::configure_scope(|scope| scope.set_tag("app", "compute"));

    let value = read_input(&opts.input)?;
    let matrix = value
        .into_matrix()
        .context("the input is not a valid numeric matrix")?;
    info!(n_rows = matrix.n_rows(), n_cols = matrix.n_cols(), "computing…");

    let start_instant = Instant::now();
    let angles = angles_to_ones(matrix)?;
    let n_undefined = angles.iter().filter(|angle| angle.is_nan()).count();
    info!(elapsed = %format_elapsed(start_instant), "computed");
    if n_undefined != 0 {
        warn!(n_undefined, "some rows have zero norm, their angles are undefined");
    }

    let angles = match opts.unit {
        Unit::Radians => angles,
        Unit::Degrees => to_degrees(&angles),
    };
    let mut stdout = io::stdout().lock();
    write_angles(&mut stdout, &angles, opts.format)?;
    stdout.flush()?;
    Ok(())
}

fn read_input(path: &Path) -> Result<Value> {
    let input = if path.as_os_str() == "-" {
        debug!("reading stdin…");
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).context("failed to read stdin")?;
        input
    } else {
        debug!(path = %path.display(), "reading the file…");
        fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?
    };
    serde_json::from_str(&input).context("the input is not valid JSON")
}

#[derive(Serialize)]
struct Entry {
    row: usize,

    /// `None` for undefined angles.
    angle: Option<f64>,
}

fn write_angles(writer: &mut impl Write, angles: &Array1<f64>, format: Format) -> Result {
    match format {
        Format::Text => {
            for angle in angles {
                writeln!(writer, "{}", angle)?;
            }
        }
        Format::Json => {
            let entries: Vec<Entry> = angles
                .iter()
                .enumerate()
                .map(|(row, angle)| Entry {
                    row,
                    angle: (!angle.is_nan()).then_some(*angle),
                })
                .collect();
            serde_json::to_writer(&mut *writer, &entries)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
