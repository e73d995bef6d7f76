//! Constants for NeckCool
//!
//! All numeric values shared between crates live here, grouped by domain:
//! - **Sensors**: what the wearable's sensors can physically report
//! - **Calibration**: the ranges the comfort model was fitted on
//! - **Output**: the actuator command range
//!
//! Names carry their units. Model coefficients are not here; they belong to
//! the model that owns them.

/// Plausible limits for each sensor channel.
pub mod sensors;

/// Calibration ranges used for min-max scaling.
pub mod calibration;

/// Actuator output range.
pub mod output;

pub use sensors::{
    TEMP_SENSOR_MIN_C, TEMP_SENSOR_MAX_C,
    HUMIDITY_SENSOR_MIN_PCT, HUMIDITY_SENSOR_MAX_PCT,
    HEART_RATE_SENSOR_MIN_BPM, HEART_RATE_SENSOR_MAX_BPM,
    SPO2_SENSOR_MIN_PCT, SPO2_SENSOR_MAX_PCT,
};

pub use calibration::{
    TEMP_CAL_MIN_C, TEMP_CAL_MAX_C,
    HUMIDITY_CAL_MIN_PCT, HUMIDITY_CAL_MAX_PCT,
    HEART_RATE_CAL_MIN_BPM, HEART_RATE_CAL_MAX_BPM,
    SPO2_CAL_MIN_PCT, SPO2_CAL_MAX_PCT,
};

pub use output::{OUTPUT_MIN, OUTPUT_MAX, clamp_output};
