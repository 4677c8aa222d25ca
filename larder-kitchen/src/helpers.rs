//! Common kitchen utilities

use larder_core::Number;
use crate::KitchenError;

/// Normalize ingredient name (lowercase, trim, standardize)
pub fn normalize_ingredient(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Factor that turns `from` servings into `to` servings
pub fn servings_factor(from: u32, to: u32) -> Result<Number, KitchenError> {
    if from == 0 || to == 0 {
        return Err(KitchenError::InvalidServings { from, to });
    }
    Number::from_ratio(i64::from(to), i64::from(from))
        .map_err(|_| KitchenError::InvalidServings { from, to })
}

/// Validate positive number
pub fn validate_positive(value: &Number, arg: &str) -> Result<(), KitchenError> {
    if value.is_negative() || value.is_zero() {
        return Err(KitchenError::InvalidFactor {
            arg: arg.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
