use std::str::FromStr;

use crate::prelude::*;

pub fn sample_rate(value: &str) -> Result<f32> {
    match f32::from_str(value)? {
        value if (0.0..=1.0).contains(&value) => Ok(value),
        value => Err(anyhow!("{} is not in the range [0, 1]", value)),
    }
}
