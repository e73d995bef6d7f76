//! Sensor Limits for the Wearable
//!
//! Outer bounds of what each on-board sensor can report. Anything outside
//! these is a driver or contact fault, not a physiological state. These are
//! deliberately wider than the model calibration ranges.

// ===== TEMPERATURE =====

/// Lowest ambient temperature the neck band can report (°C).
///
/// Below the operating range of the battery; cooling is never requested here.
///
/// Source: SHT4x-class digital sensor operating range, derated
pub const TEMP_SENSOR_MIN_C: f32 = -20.0;

/// Highest ambient temperature the neck band can report (°C).
///
/// Direct sun on a dark housing can exceed 50 °C.
pub const TEMP_SENSOR_MAX_C: f32 = 60.0;

// ===== HUMIDITY =====

/// Minimum relative humidity (%).
///
/// Source: Physics (0% RH = no water vapor)
pub const HUMIDITY_SENSOR_MIN_PCT: f32 = 0.0;

/// Maximum relative humidity (%).
///
/// Source: Physics (100% RH = saturated). Sweat under the band saturates fast.
pub const HUMIDITY_SENSOR_MAX_PCT: f32 = 100.0;

// ===== HEART RATE =====

/// Lowest heart rate accepted from the PPG front end (bpm).
///
/// Below this the optical sensor is almost certainly off-skin.
pub const HEART_RATE_SENSOR_MIN_BPM: f32 = 25.0;

/// Highest heart rate accepted from the PPG front end (bpm).
///
/// Source: MAX3010x-class algorithm output ceiling
pub const HEART_RATE_SENSOR_MAX_BPM: f32 = 230.0;

// ===== SPO2 =====

/// Lowest SpO2 the pulse oximeter reports reliably (%).
pub const SPO2_SENSOR_MIN_PCT: f32 = 50.0;

/// Highest SpO2 (%). Saturation cannot exceed 100%.
pub const SPO2_SENSOR_MAX_PCT: f32 = 100.0;
