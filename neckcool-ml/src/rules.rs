//! Rule-based fan speed model
//!
//! A hand-tuned piecewise curve on temperature, plus independent penalties
//! for humid air, elevated heart rate and low oxygen saturation.
//!
//! ```text
//! speed
//! 100 |                             ______
//!  90 |                    ___----
//!     |                   /
//!  30 |           .      /
//!  20 |      +----+     (jump: 20 -> 30 just above 28 °C)
//!   0 |______+
//!     +------+----+-----+--------+------ t (°C)
//!           26   28    32       36
//! ```
//!
//! The step at 28 °C does not join the ramp that starts at 30. It is what the
//! deployed devices do, so it stays until product decides otherwise.
//!
//! ## Numeric behaviour
//!
//! The accumulator is `f32`. The 2.5, 0.5 and 0.7 factors are applied in
//! `f64` and the sum narrowed back to `f32` after each step; the SpO2 penalty
//! is integral. This reproduces the firmware bit for bit, which matters
//! because the final conversion truncates: 30.4999 and 30.5 both give 30,
//! but 30.9999 and 31.0 do not.

use neckcool_core::{constants::output::clamp_output, SensorReading};

/// Thresholds and weights of the rule model
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleParams {
    /// Fan stays off at or below this temperature (°C)
    pub off_max_c: f32,
    /// Upper end of the flat low band (°C)
    pub low_max_c: f32,
    /// Speed inside the flat low band
    pub low_speed: f32,
    /// Upper end of the steep ramp (°C)
    pub ramp_max_c: f32,
    /// Speed at the start of the steep ramp
    pub ramp_base: f32,
    /// Steep ramp slope (per °C)
    pub ramp_slope: f32,
    /// Upper end of the gentle ramp (°C); full speed above
    pub high_max_c: f32,
    /// Speed at the start of the gentle ramp
    pub high_base: f64,
    /// Gentle ramp slope (per °C)
    pub high_slope: f64,
    /// Speed above `high_max_c`
    pub max_speed: f32,
    /// Humidity above which the penalty applies (%RH)
    pub humidity_threshold: f32,
    /// Penalty per %RH above threshold
    pub humidity_weight: f64,
    /// Heart rate above which the penalty applies (bpm)
    pub heart_rate_threshold: i32,
    /// Penalty per bpm above threshold
    pub heart_rate_weight: f64,
    /// SpO2 below which the penalty applies (%)
    pub spo2_threshold: i32,
    /// Penalty per % below threshold
    pub spo2_weight: i32,
}

/// Shipped rule set
pub const SPEED_RULES: RuleParams = RuleParams {
    off_max_c: 26.0,
    low_max_c: 28.0,
    low_speed: 20.0,
    ramp_max_c: 32.0,
    ramp_base: 30.0,
    ramp_slope: 15.0,
    high_max_c: 36.0,
    high_base: 90.0,
    high_slope: 2.5,
    max_speed: 100.0,
    humidity_threshold: 70.0,
    humidity_weight: 0.5,
    heart_rate_threshold: 85,
    heart_rate_weight: 0.7,
    spo2_threshold: 96,
    spo2_weight: 2,
};

/// Segment of the temperature curve a reading falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureBand {
    /// t ≤ 26: fan off
    Off,
    /// 26 < t ≤ 28: flat 20
    Low,
    /// 28 < t ≤ 32: 30 + (t-28)·15
    Ramp,
    /// 32 < t ≤ 36: 90 + (t-32)·2.5
    High,
    /// t > 36 (or NaN): full speed
    Max,
}

impl TemperatureBand {
    /// Short lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            TemperatureBand::Off => "off",
            TemperatureBand::Low => "low",
            TemperatureBand::Ramp => "ramp",
            TemperatureBand::High => "high",
            TemperatureBand::Max => "max",
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TemperatureBand {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.name())
    }
}

/// Fan speed predictor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleBasedSpeedModel {
    params: RuleParams,
}

impl Default for RuleBasedSpeedModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedSpeedModel {
    /// Model with the shipped rule set
    pub const fn new() -> Self {
        Self { params: SPEED_RULES }
    }

    /// Model with a different rule set
    pub const fn with_params(params: RuleParams) -> Self {
        Self { params }
    }

    /// Rules in use
    pub const fn params(&self) -> &RuleParams {
        &self.params
    }

    /// Which curve segment a temperature falls into
    pub fn band(&self, temperature: f32) -> TemperatureBand {
        let p = &self.params;
        if temperature <= p.off_max_c {
            TemperatureBand::Off
        } else if temperature <= p.low_max_c {
            TemperatureBand::Low
        } else if temperature <= p.ramp_max_c {
            TemperatureBand::Ramp
        } else if temperature <= p.high_max_c {
            TemperatureBand::High
        } else {
            TemperatureBand::Max
        }
    }

    /// Speed from temperature alone, before penalties
    pub fn base_speed(&self, temperature: f32) -> f32 {
        let p = &self.params;
        match self.band(temperature) {
            TemperatureBand::Off => 0.0,
            TemperatureBand::Low => p.low_speed,
            TemperatureBand::Ramp => p.ramp_base + (temperature - p.low_max_c) * p.ramp_slope,
            TemperatureBand::High => {
                (p.high_base + (temperature - p.ramp_max_c) as f64 * p.high_slope) as f32
            }
            TemperatureBand::Max => p.max_speed,
        }
    }

    /// Speed with penalties, before clamping and truncation
    pub fn raw_speed(&self, temperature: f32, humidity: f32, heart_rate: i32, spo2: i32) -> f32 {
        let p = &self.params;
        let mut speed = self.base_speed(temperature);

        if humidity > p.humidity_threshold {
            let penalty = (humidity - p.humidity_threshold) as f64 * p.humidity_weight;
            speed = (speed as f64 + penalty) as f32;
        }
        if heart_rate > p.heart_rate_threshold {
            let penalty = (heart_rate - p.heart_rate_threshold) as f64 * p.heart_rate_weight;
            speed = (speed as f64 + penalty) as f32;
        }
        if spo2 < p.spo2_threshold {
            // i64 so a garbage SpO2 of i32::MIN cannot overflow
            let deficit = p.spo2_threshold as i64 - spo2 as i64;
            speed += (deficit * p.spo2_weight as i64) as f32;
        }

        speed
    }

    /// Fan speed in [0, 100], truncated toward zero
    pub fn predict(&self, temperature: f32, humidity: f32, heart_rate: i32, spo2: i32) -> u8 {
        let speed = clamp_output(self.raw_speed(temperature, humidity, heart_rate, spo2));
        // Always finite here: NaN temperature lands in Max, NaN penalties fail their comparisons
        libm::truncf(speed) as u8
    }

    /// [`predict`](Self::predict) on a bundled reading
    ///
    /// Heart rate and SpO2 are truncated toward zero to whole numbers first,
    /// matching how the PPG driver reports them.
    pub fn predict_reading(&self, reading: &SensorReading) -> u8 {
        self.predict(
            reading.temperature_c,
            reading.humidity_pct,
            reading.heart_rate_bpm as i32,
            reading.spo2_pct as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALM_HUMIDITY: f32 = 50.0;
    const RESTING_HR: i32 = 70;
    const NORMAL_SPO2: i32 = 98;

    fn base_only(t: f32) -> u8 {
        RuleBasedSpeedModel::new().predict(t, CALM_HUMIDITY, RESTING_HR, NORMAL_SPO2)
    }

    #[test]
    fn fan_off_when_cool() {
        assert_eq!(base_only(20.0), 0);
        assert_eq!(base_only(26.0), 0);
        assert_eq!(base_only(-40.0), 0);
    }

    #[test]
    fn flat_low_band() {
        assert_eq!(base_only(26.5), 20);
        assert_eq!(base_only(27.0), 20);
        assert_eq!(base_only(28.0), 20);
    }

    #[test]
    fn step_at_28_degrees_is_kept() {
        let model = RuleBasedSpeedModel::new();

        assert_eq!(model.base_speed(28.0), 20.0);
        let just_above = model.base_speed(28.0001);
        assert!((just_above - 30.0015).abs() < 1e-3, "base = {}", just_above);
        assert_eq!(base_only(28.0001), 30);
    }

    #[test]
    fn steep_ramp() {
        assert_eq!(base_only(30.0), 60);
        assert_eq!(base_only(31.0), 75);
        assert_eq!(base_only(32.0), 90);
    }

    #[test]
    fn gentle_ramp_and_full_speed() {
        assert_eq!(base_only(34.0), 95);
        assert_eq!(base_only(36.0), 100);
        assert_eq!(base_only(36.1), 100);
        assert_eq!(base_only(55.0), 100);
    }

    #[test]
    fn bands() {
        let model = RuleBasedSpeedModel::new();
        assert_eq!(model.band(26.0), TemperatureBand::Off);
        assert_eq!(model.band(28.0), TemperatureBand::Low);
        assert_eq!(model.band(29.0), TemperatureBand::Ramp);
        assert_eq!(model.band(32.5), TemperatureBand::High);
        assert_eq!(model.band(36.5), TemperatureBand::Max);
        assert_eq!(model.band(f32::NAN), TemperatureBand::Max);
    }

    #[test]
    fn band_names() {
        let model = RuleBasedSpeedModel::new();
        assert_eq!(model.band(20.0).name(), "off");
        assert_eq!(model.band(27.0).name(), "low");
        assert_eq!(model.band(30.0).name(), "ramp");
        assert_eq!(model.band(34.0).name(), "high");
        assert_eq!(model.band(40.0).name(), "max");
    }

    #[test]
    fn humidity_penalty() {
        let model = RuleBasedSpeedModel::new();
        // 20 + (80-70)*0.5
        assert_eq!(model.predict(27.0, 80.0, RESTING_HR, NORMAL_SPO2), 25);
        // Exactly at threshold: no penalty
        assert_eq!(model.predict(27.0, 70.0, RESTING_HR, NORMAL_SPO2), 20);
    }

    #[test]
    fn heart_rate_penalty_truncates() {
        let model = RuleBasedSpeedModel::new();
        // 20 + 5*0.7 = 23.5 -> 23
        assert_eq!(model.predict(27.0, CALM_HUMIDITY, 90, NORMAL_SPO2), 23);
        assert_eq!(model.predict(27.0, CALM_HUMIDITY, 85, NORMAL_SPO2), 20);
    }

    #[test]
    fn spo2_penalty() {
        let model = RuleBasedSpeedModel::new();
        // 0 + (96-93)*2
        assert_eq!(model.predict(25.0, CALM_HUMIDITY, RESTING_HR, 93), 6);
        assert_eq!(model.predict(25.0, CALM_HUMIDITY, RESTING_HR, 96), 0);
    }

    #[test]
    fn penalties_stack_then_clamp() {
        let model = RuleBasedSpeedModel::new();

        // 100 + 5 + 10.5 + 12
        let raw = model.raw_speed(40.0, 80.0, 100, 90);
        assert!((raw - 127.5).abs() < 1e-4);
        assert_eq!(model.predict(40.0, 80.0, 100, 90), 100);
    }

    #[test]
    fn extreme_integers_do_not_overflow() {
        let model = RuleBasedSpeedModel::new();
        assert_eq!(model.predict(20.0, 0.0, i32::MAX, i32::MIN), 100);
        assert_eq!(model.predict(20.0, 0.0, i32::MIN, i32::MAX), 0);
    }

    #[test]
    fn reading_wrapper_truncates_vitals() {
        let model = RuleBasedSpeedModel::new();
        // 90.9 bpm -> 90, 95.9% -> 95
        let reading = SensorReading::new(27.0, CALM_HUMIDITY, 90.9, 95.9);
        assert_eq!(model.predict_reading(&reading), model.predict(27.0, CALM_HUMIDITY, 90, 95));
    }
}
