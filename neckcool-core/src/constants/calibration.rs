//! Calibration Ranges
//!
//! The comfort model was fitted on data scaled from these ranges to [-1, 1].
//! Readings outside them still produce an output, extrapolated linearly.
//! Changing any value here changes model output; they must stay
//! bit-identical to the values the coefficients were fitted against.

/// Temperature calibration range (°C)
pub const TEMP_CAL_MIN_C: f32 = 20.0;
/// Temperature calibration range (°C)
pub const TEMP_CAL_MAX_C: f32 = 40.0;

/// Humidity calibration range (%RH)
pub const HUMIDITY_CAL_MIN_PCT: f32 = 30.0;
/// Humidity calibration range (%RH)
pub const HUMIDITY_CAL_MAX_PCT: f32 = 80.0;

/// Heart rate calibration range (bpm)
pub const HEART_RATE_CAL_MIN_BPM: f32 = 60.0;
/// Heart rate calibration range (bpm)
pub const HEART_RATE_CAL_MAX_BPM: f32 = 120.0;

/// SpO2 calibration range (%)
pub const SPO2_CAL_MIN_PCT: f32 = 94.0;
/// SpO2 calibration range (%)
pub const SPO2_CAL_MAX_PCT: f32 = 100.0;
