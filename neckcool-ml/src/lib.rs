//! TinyML Cooling Models for the NeckCool Wearable
//!
//! ## Overview
//!
//! Two tiny, stateless predictors turn four readings (ambient temperature,
//! humidity, heart rate, SpO2) into a single percentage the firmware drives
//! the neck fan with:
//!
//! | Model | Output | Character |
//! |-------|--------|-----------|
//! | [`LinearComfortModel`] | `f32` comfort score in [0,100] | smooth, fitted |
//! | [`RuleBasedSpeedModel`] | `u8` fan duty in [0,100] | piecewise, hand-tuned |
//!
//! Neither model allocates, holds state, or can fail. Both clamp their
//! output, so any finite input yields a valid duty cycle.
//!
//! ## Linear Comfort Model
//!
//! ```text
//! x_i   = (raw_i - lo_i) / (hi_i - lo_i) * 2 - 1     (min-max to [-1, 1])
//! score = bias + Σ coef_i * x_i                       (feature order)
//! out   = clamp(score, 0, 100)
//! ```
//!
//! Readings outside the calibration range extrapolate linearly.
//!
//! ## Rule-Based Speed Model
//!
//! ```text
//! base(t):   ≤26 → 0 | ≤28 → 20 | ≤32 → 30+(t-28)·15 | ≤36 → 90+(t-32)·2.5 | >36 → 100
//! + humidity > 70  → (h-70)·0.5
//! + heart rate > 85 → (hr-85)·0.7
//! + SpO2 < 96      → (96-s)·2
//! out = trunc(clamp(speed, 0, 100))
//! ```
//!
//! The base curve jumps from 20 to 30 just above 28 °C. That step is part of
//! the shipped behaviour and is kept as-is.
//!
//! ## Usage
//!
//! ```rust
//! use neckcool_ml::{LinearComfortModel, RuleBasedSpeedModel};
//!
//! let comfort = LinearComfortModel::new().predict(30.0, 55.0, 90.0, 97.0);
//! assert_eq!(comfort, 57.130457);
//!
//! let duty = RuleBasedSpeedModel::new().predict(27.0, 50.0, 70, 98);
//! assert_eq!(duty, 20);
//! ```
//!
//! ## Memory Model
//!
//! ```text
//! LinearComfortModel:  4 ranges + 4 coefficients + bias = 52 bytes (const)
//! RuleBasedSpeedModel: zero-sized, parameters in flash
//! Per call:            one [f32; 4] on the stack
//! ```
//!
//! ## Inputs
//!
//! Neither model defends against NaN or infinity. Run readings through
//! [`neckcool_core::ReadingValidator`] first.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod compare;
pub mod linear;
pub mod rules;
pub mod scaling;

pub use compare::{ModelComparison, DIVERGENCE_LOG_THRESHOLD};
pub use linear::{LinearComfortModel, LinearParams, COMFORT_PARAMS};
pub use rules::{RuleBasedSpeedModel, RuleParams, TemperatureBand, SPEED_RULES};
pub use scaling::{FeatureRange, MinMaxScaler};

pub use neckcool_core::{Feature, SensorReading, FEATURE_COUNT};
