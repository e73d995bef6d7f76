//! Four-channel sensor reading
//!
//! Both predictors consume the same four inputs in the same order. Keeping
//! that order in one place avoids the classic bug of swapping heart rate and
//! SpO2 between the acquisition task and the model.

use core::fmt;

/// Number of model input channels
pub const FEATURE_COUNT: usize = 4;

/// Model input channel, in canonical feature order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Feature {
    /// Ambient temperature near the neck (°C)
    Temperature,
    /// Relative humidity (%RH)
    Humidity,
    /// Heart rate (beats per minute)
    HeartRate,
    /// Blood oxygen saturation (%SpO2)
    Spo2,
}

impl Feature {
    /// All channels in feature order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Temperature,
        Feature::Humidity,
        Feature::HeartRate,
        Feature::Spo2,
    ];

    /// Position in the model input vector
    pub const fn index(self) -> usize {
        match self {
            Feature::Temperature => 0,
            Feature::Humidity => 1,
            Feature::HeartRate => 2,
            Feature::Spo2 => 3,
        }
    }

    /// Short lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Feature::Temperature => "temperature",
            Feature::Humidity => "humidity",
            Feature::HeartRate => "heart_rate",
            Feature::Spo2 => "spo2",
        }
    }

    /// Measurement unit
    pub const fn unit(self) -> &'static str {
        match self {
            Feature::Temperature => "°C",
            Feature::Humidity => "%RH",
            Feature::HeartRate => "bpm",
            Feature::Spo2 => "%SpO2",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One synchronized sample of all four channels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    /// Ambient temperature (°C)
    pub temperature_c: f32,
    /// Relative humidity (%RH)
    pub humidity_pct: f32,
    /// Heart rate (bpm)
    pub heart_rate_bpm: f32,
    /// Blood oxygen saturation (%)
    pub spo2_pct: f32,
}

impl SensorReading {
    /// Bundle four channel values
    pub const fn new(temperature_c: f32, humidity_pct: f32, heart_rate_bpm: f32, spo2_pct: f32) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            heart_rate_bpm,
            spo2_pct,
        }
    }

    /// Build from a vector in feature order
    pub const fn from_array(values: [f32; FEATURE_COUNT]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Values in feature order
    pub const fn as_array(&self) -> [f32; FEATURE_COUNT] {
        [self.temperature_c, self.humidity_pct, self.heart_rate_bpm, self.spo2_pct]
    }

    /// Value of a single channel
    pub const fn get(&self, feature: Feature) -> f32 {
        match feature {
            Feature::Temperature => self.temperature_c,
            Feature::Humidity => self.humidity_pct,
            Feature::HeartRate => self.heart_rate_bpm,
            Feature::Spo2 => self.spo2_pct,
        }
    }

    /// Replace a single channel
    pub fn set(&mut self, feature: Feature, value: f32) {
        match feature {
            Feature::Temperature => self.temperature_c = value,
            Feature::Humidity => self.humidity_pct = value,
            Feature::HeartRate => self.heart_rate_bpm = value,
            Feature::Spo2 => self.spo2_pct = value,
        }
    }

    /// True when no channel is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }

    /// First non-finite channel, if any
    pub fn first_non_finite(&self) -> Option<Feature> {
        Feature::ALL.into_iter().find(|&f| !self.get(f).is_finite())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorReading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "T={}C RH={}% HR={}bpm SpO2={}%",
            self.temperature_c,
            self.humidity_pct,
            self.heart_rate_bpm,
            self.spo2_pct
        )
    }
}
