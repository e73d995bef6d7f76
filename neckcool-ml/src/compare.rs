//! Running both models side by side
//!
//! The firmware picks one model per product variant, but during field trials
//! both run on every sample so their outputs can be logged and compared.

use neckcool_core::{constants::output::clamp_output, SensorReading};

use crate::{linear::LinearComfortModel, rules::RuleBasedSpeedModel};

/// Disagreement (in percentage points) above which a debug record is logged
pub const DIVERGENCE_LOG_THRESHOLD: f32 = 25.0;

/// Outputs of both models for one reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelComparison {
    /// Linear comfort score
    pub comfort: f32,
    /// Rule-based fan speed
    pub speed: u8,
}

impl ModelComparison {
    /// Run both shipped models on a reading
    pub fn evaluate(reading: &SensorReading) -> Self {
        Self::evaluate_with(&LinearComfortModel::new(), &RuleBasedSpeedModel::new(), reading)
    }

    /// Run the given models on a reading
    pub fn evaluate_with(
        linear: &LinearComfortModel,
        rules: &RuleBasedSpeedModel,
        reading: &SensorReading,
    ) -> Self {
        let result = Self {
            comfort: linear.predict_reading(reading),
            speed: rules.predict_reading(reading),
        };

        if result.delta() > DIVERGENCE_LOG_THRESHOLD {
            log_debug!(
                "models diverge: comfort={} speed={} (T={} RH={} HR={} SpO2={})",
                result.comfort,
                result.speed,
                reading.temperature_c,
                reading.humidity_pct,
                reading.heart_rate_bpm,
                reading.spo2_pct
            );
        }

        result
    }

    /// Absolute difference between the two outputs
    pub fn delta(&self) -> f32 {
        (self.comfort - self.speed as f32).abs()
    }

    /// Average of the two outputs, in [0, 100]
    pub fn mean(&self) -> f32 {
        clamp_output((self.comfort + self.speed as f32) * 0.5)
    }

    /// Whether the models agree within `tolerance` percentage points
    pub fn agrees(&self, tolerance: f32) -> bool {
        self.delta() <= tolerance
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ModelComparison {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "comfort={} speed={}", self.comfort, self.speed)
    }
}
