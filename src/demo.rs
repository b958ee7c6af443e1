//! Demonstration cases printed by the `demo` subcommand.

use std::io::{self, Write};

use itertools::Itertools;
use ndarray::{arr2, Array1};
use ones_angle::{angles_to_ones, to_degrees};

use crate::prelude::*;

#[instrument(skip_all)]
pub fn run() -> Result {
    sentry::configure_scope(|scope| scope.set_tag("app", "demo"));

    let mut stdout = io::stdout().lock();
    write_demo(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn write_demo(writer: &mut impl Write) -> Result {
    let basic = arr2(&[
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, -1.0],
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        // Norm 5.
        [3.0, 4.0, 0.0],
    ]);
    write_case(writer, "Basic matrix", &basic.to_string(), angles_to_ones(&basic)?)?;

    let nested = vec![vec![1.0, 1.0, 1.0], vec![1.0, 0.0, 0.0]];
    write_case(writer, "Nested list input", &format!("{:?}", nested), angles_to_ones(&nested)?)?;

    // Norm 13.
    let single_row = arr2(&[[5.0, 12.0, 0.0]]);
    write_case(writer, "Single row matrix", &single_row.to_string(), angles_to_ones(&single_row)?)?;

    Ok(())
}

fn write_case(writer: &mut impl Write, title: &str, input: &str, angles: Array1<f64>) -> Result {
    debug!(title, n_rows = angles.len(), "writing the case…");
    writeln!(writer, "--- {} ---", title)?;
    writeln!(writer, "{}", input)?;
    writeln!(writer, "Angles (radians): [{}]", format_angles(&angles))?;
    writeln!(writer, "Angles (degrees): [{}]", format_angles(&to_degrees(&angles)))?;
    writeln!(writer)?;
    Ok(())
}

fn format_angles(angles: &Array1<f64>) -> String {
    angles.iter().map(|angle| format!("{:.8}", angle)).join(", ")
}
