//! Angles between the rows of a matrix and the all-ones vector.
//!
//! ```
//! use ones_angle::angles_to_ones;
//!
//! let angles = angles_to_ones(vec![vec![1.0, 1.0, 1.0], vec![0.0, 0.0, 0.0]]).unwrap();
//! assert_eq!(angles[0], 0.0);
//! assert!(angles[1].is_nan());
//! ```

pub mod error;
pub mod math;
pub mod matrix;

pub use crate::error::{Result, ShapeError};
pub use crate::math::angle::{angle_to_ones, angle_to_ones_slice, angles_to_ones, to_degrees};
pub use crate::matrix::{IntoMatrix, Matrix};
