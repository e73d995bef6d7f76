//! Min-max feature scaling
//!
//! Maps each raw reading from its calibration range onto [-1, 1]. Values
//! outside the range are not clipped; they land beyond ±1 on the same line.

use neckcool_core::constants::calibration::*;

/// Calibration range of one feature
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeatureRange {
    /// Raw value mapped to -1
    pub lo: f32,
    /// Raw value mapped to +1
    pub hi: f32,
}

impl FeatureRange {
    /// Create a range; `lo` and `hi` must differ
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Width of the range
    pub fn span(&self) -> f32 {
        self.hi - self.lo
    }

    /// Whether a raw value lies inside the calibration range
    pub fn contains(&self, raw: f32) -> bool {
        raw >= self.lo && raw <= self.hi
    }

    /// Scale a raw value to [-1, 1]
    ///
    /// Evaluated as `(raw - lo) / (hi - lo) * 2 - 1`, left to right, so the
    /// result is bit-identical to the firmware the coefficients shipped with.
    #[inline]
    pub fn normalize(&self, raw: f32) -> f32 {
        (raw - self.lo) / (self.hi - self.lo) * 2.0 - 1.0
    }
}

/// One [`FeatureRange`] per input feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxScaler<const N: usize> {
    ranges: [FeatureRange; N],
}

impl<const N: usize> MinMaxScaler<N> {
    /// Create a scaler from per-feature ranges
    pub const fn new(ranges: [FeatureRange; N]) -> Self {
        Self { ranges }
    }

    /// Per-feature ranges
    pub const fn ranges(&self) -> &[FeatureRange; N] {
        &self.ranges
    }

    /// Scale every feature
    pub fn transform(&self, raw: [f32; N]) -> [f32; N] {
        let mut x = [0.0; N];
        for (i, (value, range)) in raw.iter().zip(self.ranges.iter()).enumerate() {
            x[i] = range.normalize(*value);
        }
        x
    }
}

/// Calibration ranges the comfort model was fitted on, in feature order
pub const CALIBRATION_SCALER: MinMaxScaler<4> = MinMaxScaler::new([
    FeatureRange::new(TEMP_CAL_MIN_C, TEMP_CAL_MAX_C),
    FeatureRange::new(HUMIDITY_CAL_MIN_PCT, HUMIDITY_CAL_MAX_PCT),
    FeatureRange::new(HEART_RATE_CAL_MIN_BPM, HEART_RATE_CAL_MAX_BPM),
    FeatureRange::new(SPO2_CAL_MIN_PCT, SPO2_CAL_MAX_PCT),
]);
