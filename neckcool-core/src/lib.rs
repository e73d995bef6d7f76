//! Shared vocabulary for the NeckCool wearable cooling models
//!
//! Holds the pieces both predictors and their callers agree on: the
//! four-channel sensor reading, the feature ordering, sensor and calibration
//! constants, and a validator for sanitizing readings before inference.
//!
//! Key constraints:
//! - Runs on a neck-worn MCU with a few KB of RAM
//! - No heap allocation anywhere
//! - Everything is `Copy` and safe to use from interrupt context
//!
//! ```
//! use neckcool_core::{ReadingValidator, SensorReading, Validator};
//!
//! let validator = ReadingValidator::default();
//! let reading = SensorReading::new(31.5, 62.0, 92.0, 97.0);
//!
//! // Sensor driver glitches (NaN, wild values) must never reach a model
//! match validator.validate(&reading) {
//!     Ok(()) => {}, // Safe to run inference
//!     Err(e) => {}, // Skip this sample
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod constants;
pub mod errors;
pub mod reading;
pub mod traits;
pub mod validators;

// Public API
pub use errors::{ReadingError, ReadingResult};
pub use reading::{Feature, SensorReading, FEATURE_COUNT};
pub use traits::{Validatable, Validator, ValidatorConstraints};
pub use validators::ReadingValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
