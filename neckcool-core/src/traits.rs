//! Core traits for validators
//!
//! These traits define the interface reading validators implement.
//! Keep them simple - embedded devices don't need complex abstractions.

use crate::{errors::ReadingResult, reading::Feature};

/// Core validator trait
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single value
    fn validate(&self, value: &Self::Value) -> ReadingResult<()>;

    /// Limits this validator enforces on one channel
    fn constraints(&self, feature: Feature) -> ValidatorConstraints;
}

/// Physical limits for one channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Minimum valid value
    pub min_value: f32,

    /// Maximum valid value
    pub max_value: f32,
}

impl ValidatorConstraints {
    /// Build a constraint pair, swapping bounds given in the wrong order
    pub fn new(min: f32, max: f32) -> Self {
        let (min_value, max_value) = if min > max { (max, min) } else { (min, max) };
        Self { min_value, max_value }
    }

    /// Check whether a value lies inside the limits (inclusive)
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min_value && value <= self.max_value
    }

    /// Clamp a value into the limits; reports whether it moved
    pub fn clamp(&self, value: f32) -> (f32, bool) {
        if value < self.min_value {
            (self.min_value, true)
        } else if value > self.max_value {
            (self.max_value, true)
        } else {
            (value, false)
        }
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swapped_bounds() {
        let c = ValidatorConstraints::new(100.0, 50.0);
        assert_eq!(c.min_value, 50.0);
        assert_eq!(c.max_value, 100.0);
    }

    #[test]
    fn clamp_reports_movement() {
        let c = ValidatorConstraints::new(0.0, 100.0);
        assert_eq!(c.clamp(50.0), (50.0, false));
        assert_eq!(c.clamp(-3.0), (0.0, true));
        assert_eq!(c.clamp(101.0), (100.0, true));
        assert!(c.contains(100.0));
        assert!(!c.contains(100.5));
    }

    #[test]
    fn validatable_floats() {
        assert!(5.0f32.is_valid());
        assert!(!f32::NAN.is_valid());
        assert!(!f32::INFINITY.is_valid());
    }
}
