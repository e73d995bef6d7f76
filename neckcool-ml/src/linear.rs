//! Linear comfort model
//!
//! A least-squares fit over min-max scaled features. The coefficients were
//! fitted offline; only inference runs on the device.
//!
//! ```text
//! feature      range        coefficient
//! temperature  20..40 °C    74.401611
//! humidity     30..80 %RH    1.042139
//! heart rate   60..120 bpm   3.152689
//! SpO2         94..100 %     0.207605
//! bias                      57.130457
//! ```
//!
//! Temperature dominates: across its calibration range it moves the score by
//! ~149 points, everything else combined by ~9.

use neckcool_core::{constants::output::clamp_output, SensorReading, FEATURE_COUNT};

use crate::scaling::{MinMaxScaler, CALIBRATION_SCALER};

/// Parameters of a linear model over scaled features
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearParams {
    /// Min-max ranges, in feature order
    pub scaler: MinMaxScaler<FEATURE_COUNT>,
    /// Intercept (output when every scaled feature is 0)
    pub bias: f32,
    /// Weights, in feature order
    pub coefficients: [f32; FEATURE_COUNT],
}

/// Shipped comfort model calibration
#[allow(clippy::excessive_precision)]
pub const COMFORT_PARAMS: LinearParams = LinearParams {
    scaler: CALIBRATION_SCALER,
    bias: 57.130457,
    coefficients: [74.401611, 1.042139, 3.152689, 0.207605],
};

/// Comfort score predictor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearComfortModel {
    params: LinearParams,
}

impl Default for LinearComfortModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearComfortModel {
    /// Model with the shipped calibration
    pub const fn new() -> Self {
        Self { params: COMFORT_PARAMS }
    }

    /// Model with a different parameter set
    pub const fn with_params(params: LinearParams) -> Self {
        Self { params }
    }

    /// Parameters in use
    pub const fn params(&self) -> &LinearParams {
        &self.params
    }

    /// Scaled feature vector
    pub fn normalize(&self, temperature: f32, humidity: f32, heart_rate: f32, spo2: f32) -> [f32; FEATURE_COUNT] {
        self.params.scaler.transform([temperature, humidity, heart_rate, spo2])
    }

    /// Score before clamping
    pub fn raw_score(&self, temperature: f32, humidity: f32, heart_rate: f32, spo2: f32) -> f32 {
        let x = self.normalize(temperature, humidity, heart_rate, spo2);

        // Accumulate in feature order; reordering changes the low bits
        let mut y = self.params.bias;
        for (coef, xi) in self.params.coefficients.iter().zip(x.iter()) {
            y += coef * xi;
        }
        y
    }

    /// Comfort score in [0, 100]
    ///
    /// Total over finite input. Out-of-calibration readings extrapolate and
    /// are then clamped.
    #[inline]
    pub fn predict(&self, temperature: f32, humidity: f32, heart_rate: f32, spo2: f32) -> f32 {
        clamp_output(self.raw_score(temperature, humidity, heart_rate, spo2))
    }

    /// [`predict`](Self::predict) on a bundled reading
    pub fn predict_reading(&self, reading: &SensorReading) -> f32 {
        self.predict(
            reading.temperature_c,
            reading.humidity_pct,
            reading.heart_rate_bpm,
            reading.spo2_pct,
        )
    }
}
