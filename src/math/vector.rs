//! Row reductions.
//!
//! Every reduction here is a plain left-to-right fold, so a row yields the same
//! bits regardless of how the surrounding matrix is laid out or traversed.

use ndarray::ArrayView1;

/// Dot product with the all-ones vector, which is just the sum.
#[must_use]
#[inline]
pub fn sum(x: ArrayView1<f64>) -> f64 {
    x.iter().fold(0.0, |sum, xi| sum + xi)
}

#[must_use]
#[inline]
pub fn sum_of_squares(x: ArrayView1<f64>) -> f64 {
    x.iter().fold(0.0, |sum, xi| sum + xi * xi)
}

#[must_use]
pub fn norm(x: ArrayView1<f64>) -> f64 {
    sum_of_squares(x).sqrt()
}
