//! Error Types for Reading Validation
//!
//! The predictors themselves are total functions and never fail. Errors only
//! arise in the sanitization step that sits between the sensor drivers and
//! the models:
//!
//! - `InvalidValue`: a channel is NaN or infinite (driver glitch, I2C
//!   timeout mapped to NaN, uninitialised buffer)
//! - `OutOfRange`: a channel is finite but outside what the sensor can
//!   physically report (e.g. SpO2 of 140%)
//!
//! Like the rest of the crate, errors are small and `Copy` so they can be
//! returned from interrupt handlers and stored in fixed queues without
//! allocation.
//!
//! ```rust
//! use neckcool_core::{ReadingError, ReadingValidator, SensorReading, Validator};
//!
//! let validator = ReadingValidator::default();
//! let reading = SensorReading::new(29.0, f32::NAN, 80.0, 98.0);
//!
//! match validator.validate(&reading) {
//!     Ok(()) => {}
//!     Err(ReadingError::InvalidValue { feature }) => {
//!         // Sensor bus glitch - drop the sample
//!         assert_eq!(feature.name(), "humidity");
//!     }
//!     Err(ReadingError::OutOfRange { .. }) => {
//!         // Finite but implausible - sensor needs attention
//!     }
//! }
//! ```

use thiserror_no_std::Error;

use crate::reading::Feature;

/// Result type for validation operations
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Validation errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ReadingError {
    /// Channel is NaN or infinite
    #[error("Invalid {feature} reading: not a valid number")]
    InvalidValue {
        /// Channel that carried the bad value
        feature: Feature,
    },

    /// Channel is finite but outside the sensor's plausible limits
    #[error("{feature} reading {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Channel that failed validation
        feature: Feature,
        /// The actual reading
        value: f32,
        /// Lowest plausible value
        min: f32,
        /// Highest plausible value
        max: f32,
    },
}

impl ReadingError {
    /// Channel the error refers to
    pub fn feature(&self) -> Feature {
        match *self {
            Self::InvalidValue { feature } | Self::OutOfRange { feature, .. } => feature,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReadingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidValue { feature } =>
                defmt::write!(fmt, "Invalid {} reading", feature.name()),
            Self::OutOfRange { feature, value, min, max } =>
                defmt::write!(fmt, "{} {} outside [{}, {}]", feature.name(), value, min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_accessor() {
        let err = ReadingError::OutOfRange {
            feature: Feature::Spo2,
            value: 140.0,
            min: 50.0,
            max: 100.0,
        };
        assert_eq!(err.feature(), Feature::Spo2);

        let err = ReadingError::InvalidValue { feature: Feature::HeartRate };
        assert_eq!(err.feature(), Feature::HeartRate);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_names_channel() {
        let err = ReadingError::InvalidValue { feature: Feature::Temperature };
        assert_eq!(err.to_string(), "Invalid temperature reading: not a valid number");
    }
}
