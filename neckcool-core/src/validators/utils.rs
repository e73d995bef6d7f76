//! Shared checks used by the reading validator
//!
//! Pure functions, no allocation, safe to call from interrupt handlers.

use crate::{
    errors::{ReadingError, ReadingResult},
    reading::Feature,
    traits::{Validatable, ValidatorConstraints},
};

/// Reject NaN and infinite values
pub fn check_finite(feature: Feature, value: f32) -> ReadingResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(ReadingError::InvalidValue { feature })
    }
}

/// Check if a value is within the channel's limits
pub fn check_range(feature: Feature, value: f32, limits: &ValidatorConstraints) -> ReadingResult<()> {
    if limits.contains(value) {
        Ok(())
    } else {
        Err(ReadingError::OutOfRange {
            feature,
            value,
            min: limits.min_value,
            max: limits.max_value,
        })
    }
}
