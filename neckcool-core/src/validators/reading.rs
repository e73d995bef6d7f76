//! Four-channel reading validator
//!
//! Checks every channel of a [`SensorReading`] against plausible sensor
//! limits before the sample reaches a model.

use crate::{
    constants::{calibration::*, sensors::*},
    errors::ReadingResult,
    reading::{Feature, SensorReading, FEATURE_COUNT},
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for complete sensor readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingValidator {
    /// Limits per channel, in feature order
    limits: [ValidatorConstraints; FEATURE_COUNT],
}

impl Default for ReadingValidator {
    fn default() -> Self {
        Self {
            limits: [
                ValidatorConstraints::new(TEMP_SENSOR_MIN_C, TEMP_SENSOR_MAX_C),
                ValidatorConstraints::new(HUMIDITY_SENSOR_MIN_PCT, HUMIDITY_SENSOR_MAX_PCT),
                ValidatorConstraints::new(HEART_RATE_SENSOR_MIN_BPM, HEART_RATE_SENSOR_MAX_BPM),
                ValidatorConstraints::new(SPO2_SENSOR_MIN_PCT, SPO2_SENSOR_MAX_PCT),
            ],
        }
    }
}

impl ReadingValidator {
    /// Create validator with custom limits for every channel, in feature order
    pub fn new_with_limits(limits: [(f32, f32); FEATURE_COUNT]) -> Self {
        Self {
            limits: limits.map(|(min, max)| ValidatorConstraints::new(min, max)),
        }
    }

    /// Only accept readings inside the comfort model's calibration ranges
    pub fn strict() -> Self {
        Self::new_with_limits([
            (TEMP_CAL_MIN_C, TEMP_CAL_MAX_C),
            (HUMIDITY_CAL_MIN_PCT, HUMIDITY_CAL_MAX_PCT),
            (HEART_RATE_CAL_MIN_BPM, HEART_RATE_CAL_MAX_BPM),
            (SPO2_CAL_MIN_PCT, SPO2_CAL_MAX_PCT),
        ])
    }

    /// Override the limits of one channel
    pub fn with_limits(mut self, feature: Feature, min: f32, max: f32) -> Self {
        self.limits[feature.index()] = ValidatorConstraints::new(min, max);
        self
    }

    /// Reject non-finite channels and clamp the rest into their limits
    ///
    /// Unlike [`Validator::validate`], finite out-of-range values are not an
    /// error here; they are saturated to the nearest limit.
    pub fn sanitize(&self, reading: &SensorReading) -> ReadingResult<SensorReading> {
        let mut clean = *reading;

        for feature in Feature::ALL {
            let raw = reading.get(feature);
            utils::check_finite(feature, raw)?;

            let (value, clamped) = self.limits[feature.index()].clamp(raw);
            if clamped {
                log_warn!("{} reading clamped ({} -> {})", feature, raw, value);
                clean.set(feature, value);
            }
        }

        Ok(clean)
    }
}

impl Validator for ReadingValidator {
    type Value = SensorReading;

    fn validate(&self, reading: &SensorReading) -> ReadingResult<()> {
        // NaN anywhere is worse than a range violation; report it first
        for feature in Feature::ALL {
            utils::check_finite(feature, reading.get(feature))?;
        }

        for feature in Feature::ALL {
            utils::check_range(feature, reading.get(feature), &self.limits[feature.index()])?;
        }

        Ok(())
    }

    fn constraints(&self, feature: Feature) -> ValidatorConstraints {
        self.limits[feature.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReadingError;

    #[test]
    fn typical_reading_passes() {
        let validator = ReadingValidator::default();
        let reading = SensorReading::new(31.0, 60.0, 88.0, 97.0);
        assert!(validator.validate(&reading).is_ok());
    }

    #[test]
    fn nan_reported_before_range() {
        let validator = ReadingValidator::default();
        // Temperature out of range, SpO2 NaN
        let reading = SensorReading::new(500.0, 60.0, 88.0, f32::NAN);

        assert_eq!(
            validator.validate(&reading),
            Err(ReadingError::InvalidValue { feature: Feature::Spo2 })
        );
    }

    #[test]
    fn out_of_range_channel() {
        let validator = ReadingValidator::default();
        let reading = SensorReading::new(31.0, 60.0, 88.0, 140.0);

        assert_eq!(
            validator.validate(&reading),
            Err(ReadingError::OutOfRange {
                feature: Feature::Spo2,
                value: 140.0,
                min: SPO2_SENSOR_MIN_PCT,
                max: SPO2_SENSOR_MAX_PCT,
            })
        );
    }

    #[test]
    fn sanitize_clamps_finite_values() {
        let validator = ReadingValidator::default();
        let reading = SensorReading::new(75.0, -4.0, 88.0, 97.0);

        let clean = validator.sanitize(&reading).unwrap();
        assert_eq!(clean.temperature_c, TEMP_SENSOR_MAX_C);
        assert_eq!(clean.humidity_pct, HUMIDITY_SENSOR_MIN_PCT);
        assert_eq!(clean.heart_rate_bpm, 88.0);
        assert!(validator.validate(&clean).is_ok());
    }

    #[test]
    fn sanitize_rejects_infinity() {
        let validator = ReadingValidator::default();
        let reading = SensorReading::new(31.0, 60.0, f32::INFINITY, 97.0);

        assert_eq!(
            validator.sanitize(&reading),
            Err(ReadingError::InvalidValue { feature: Feature::HeartRate })
        );
    }

    #[test]
    fn strict_uses_calibration_ranges() {
        let validator = ReadingValidator::strict();
        assert_eq!(
            validator.constraints(Feature::Temperature),
            ValidatorConstraints::new(20.0, 40.0)
        );

        // Fine for the sensor, outside calibration
        let reading = SensorReading::new(18.0, 60.0, 88.0, 97.0);
        assert!(ReadingValidator::default().validate(&reading).is_ok());
        assert!(validator.validate(&reading).is_err());
    }

    #[test]
    fn per_channel_override() {
        let validator = ReadingValidator::default().with_limits(Feature::HeartRate, 210.0, 30.0);
        let limits = validator.constraints(Feature::HeartRate);
        assert_eq!(limits.min_value, 30.0);
        assert_eq!(limits.max_value, 210.0);
        assert_eq!(validator.constraints(Feature::Spo2).max_value, SPO2_SENSOR_MAX_PCT);
    }
}
