//! Actuator Output Range
//!
//! Both models emit a percentage: a comfort score or a fan duty cycle.

/// Lowest model output (fan off)
pub const OUTPUT_MIN: f32 = 0.0;

/// Highest model output (fan at full duty)
pub const OUTPUT_MAX: f32 = 100.0;

/// Clamp a model output into [`OUTPUT_MIN`], [`OUTPUT_MAX`]
///
/// NaN passes through unchanged; callers sanitize inputs first.
#[inline]
pub fn clamp_output(value: f32) -> f32 {
    if value < OUTPUT_MIN {
        OUTPUT_MIN
    } else if value > OUTPUT_MAX {
        OUTPUT_MAX
    } else {
        value
    }
}
