//! Angles between row vectors and the all-ones vector.

use ndarray::{Array1, ArrayView1, Axis};

use crate::error::Result;
use crate::math::vector::{norm, sum};
use crate::matrix::IntoMatrix;

/// Angle in radians between the row and the all-ones vector of the same length.
///
/// Returns `NaN` when the row norm is zero, since the angle is undefined there.
#[must_use]
pub fn angle_to_ones(row: ArrayView1<f64>) -> f64 {
    let norm_ones = (row.len() as f64).sqrt();
    let denominator = norm(row) * norm_ones;
    let cos_theta = if denominator > f64::EPSILON {
        sum(row) / denominator
    } else {
        f64::NAN
    };

    // The division may overshoot by an ulp, e.g. `1.0000000000000002` for `[1, 1, 1]`.
    // `clamp` keeps `NaN` as is.
    cos_theta.clamp(-1.0, 1.0).acos()
}

#[must_use]
pub fn angle_to_ones_slice(row: &[f64]) -> f64 {
    angle_to_ones(ArrayView1::from(row))
}

/// Calculates the angle for each row of the matrix.
///
/// The input is coerced first, so shape errors are reported before anything is computed.
/// Zero rows produce `NaN`, a matrix without rows produces an empty array.
pub fn angles_to_ones(matrix: impl IntoMatrix) -> Result<Array1<f64>> {
    let matrix = matrix.into_matrix()?;
    Ok(matrix.view().map_axis(Axis(1), angle_to_ones))
}

#[must_use]
pub fn to_degrees(angles: &Array1<f64>) -> Array1<f64> {
    angles.mapv(f64::to_degrees)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use ndarray::{arr2, Array2};

    use super::*;
    use crate::error::ShapeError;

    #[test]
    fn parallel_ok() {
        assert_eq!(angle_to_ones_slice(&[1.0, 1.0, 1.0]), 0.0);
        assert_eq!(angle_to_ones_slice(&[7.0]), 0.0);
    }

    #[test]
    fn opposite_ok() {
        assert!((angle_to_ones_slice(&[-1.0, -1.0, -1.0]) - PI).abs() < f64::EPSILON);
    }

    #[test]
    fn unit_axis_ok() {
        let expected = (1.0 / 3.0_f64.sqrt()).acos();
        assert_eq!(angle_to_ones_slice(&[1.0, 0.0, 0.0]), expected);
        assert!((expected - 0.9553166181245093).abs() < 1e-12);
    }

    #[test]
    fn pythagorean_ok() {
        let theta = angle_to_ones_slice(&[5.0, 12.0, 0.0]);
        let expected = (17.0 / (13.0 * 3.0_f64.sqrt())).acos();
        assert!((theta - expected).abs() < 1e-12);
        assert!((theta - 0.7151475359380054).abs() < 1e-12);
    }

    #[test]
    fn zero_row_is_nan() {
        assert!(angle_to_ones_slice(&[0.0, 0.0, 0.0]).is_nan());
        assert!(angle_to_ones_slice(&[1e-200, 0.0]).is_nan());
    }

    #[test]
    fn angles_to_ones_ok() -> crate::Result {
        let angles = angles_to_ones(&arr2(&[
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [1.0, 1.0, 1.0],
            [-1.0, -1.0, -1.0],
            [1.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [3.0, 4.0, 0.0],
        ]))?;
        assert_eq!(angles.len(), 7);
        let expected = [
            0.3875966866551805,
            0.16187055810244713,
            0.0,
            PI,
            0.9553166181245093,
            f64::NAN,
            0.629553676681549,
        ];
        for (angle, expected) in angles.iter().zip(expected) {
            if expected.is_nan() {
                assert!(angle.is_nan());
            } else {
                assert!((angle - expected).abs() < 1e-12, "{} != {}", angle, expected);
            }
        }
        Ok(())
    }

    #[test]
    fn nested_input_ok() -> crate::Result {
        let nested = angles_to_ones(vec![vec![1, 1, 1], vec![1, 0, 0]])?;
        let native = angles_to_ones(arr2(&[[1.0, 1.0, 1.0], [1.0, 0.0, 0.0]]))?;
        assert_eq!(nested, native);
        Ok(())
    }

    #[test]
    fn empty_rows_ok() -> crate::Result {
        assert!(angles_to_ones(Array2::<f64>::zeros((0, 3)))?.is_empty());
        Ok(())
    }

    #[test]
    fn no_columns_fail() {
        assert_eq!(
            angles_to_ones(Array2::<f64>::zeros((2, 0))),
            Err(ShapeError::NoColumns),
        );
    }

    #[test]
    fn matches_row_loop_bitwise() -> crate::Result {
        let matrix = arr2(&[[0.1, 0.2, 0.3], [1e-8, -3.5, 2.25], [1e300, 1e300, -1e300]]);
        let angles = angles_to_ones(&matrix)?;
        for (row, angle) in matrix.rows().into_iter().zip(&angles) {
            let looped = angle_to_ones_slice(&row.to_vec());
            assert_eq!(looped.to_bits(), angle.to_bits());
        }
        Ok(())
    }

    #[test]
    fn to_degrees_ok() {
        let degrees = to_degrees(&Array1::from(vec![0.0, PI, f64::NAN]));
        assert_eq!(degrees[0], 0.0);
        assert_eq!(degrees[1], 180.0);
        assert!(degrees[2].is_nan());
    }
}
