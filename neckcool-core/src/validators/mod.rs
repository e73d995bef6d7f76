//! Reading Validators
//!
//! ## Overview
//!
//! The cooling models are total functions: they never reject input. That
//! makes them cheap, but it also means a NaN from a flaky I2C read would
//! propagate straight into the PWM duty cycle. Sanitizing inputs is the
//! caller's job, and this module is the tool for it.
//!
//! ## Validation Layers
//!
//! ### 1. Finiteness
//! NaN and ±Inf are rejected outright. There is no sensible value to
//! substitute, so the sample is dropped.
//!
//! ### 2. Plausible Range
//! Each channel has outer limits of what the sensor can physically report:
//! ```rust
//! use neckcool_core::constants::sensors::{SPO2_SENSOR_MIN_PCT, SPO2_SENSOR_MAX_PCT};
//!
//! // SpO2 above 100% is impossible; below 50% the oximeter is unreliable
//! assert!(SPO2_SENSOR_MIN_PCT < SPO2_SENSOR_MAX_PCT);
//! ```
//!
//! `validate` reports out-of-range channels as errors. `sanitize` clamps
//! them instead, which is what a control loop usually wants: a slightly
//! saturated reading is still better than skipping a cycle.
//!
//! ## Usage Example
//!
//! ```rust
//! use neckcool_core::{ReadingValidator, SensorReading};
//!
//! let validator = ReadingValidator::default();
//!
//! // Heart rate spike from motion artefact
//! let raw = SensorReading::new(33.0, 70.0, 260.0, 97.0);
//! let clean = validator.sanitize(&raw)?;
//! assert_eq!(clean.heart_rate_bpm, 230.0);
//! # Ok::<(), neckcool_core::ReadingError>(())
//! ```
//!
//! ## Customization
//!
//! ```rust
//! use neckcool_core::{Feature, ReadingValidator};
//!
//! // Athlete profile: allow very low resting heart rate
//! let athlete = ReadingValidator::default()
//!     .with_limits(Feature::HeartRate, 30.0, 210.0);
//!
//! // Only accept what the comfort model was calibrated on
//! let strict = ReadingValidator::strict();
//! ```

mod reading;
mod utils;

pub use reading::ReadingValidator;
pub use utils::{check_finite, check_range};
