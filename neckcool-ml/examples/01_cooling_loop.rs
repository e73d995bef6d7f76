//! NeckCool Control Loop Example
//!
//! Walks a simulated afternoon walk through both models:
//! - Raw readings are sanitized first (the models never check for NaN)
//! - Both models run on every sample, as in field trials
//! - The rule model's output is the fan duty cycle
//!
//! ## Scenario
//!
//! Leaving an air-conditioned building into summer heat, walking uphill,
//! with one glitched sample from the PPG sensor along the way.

use neckcool_core::{ReadingValidator, SensorReading};
use neckcool_ml::ModelComparison;

fn main() {
    let validator = ReadingValidator::default();

    let samples = [
        SensorReading::new(23.5, 45.0, 72.0, 98.0),  // indoors
        SensorReading::new(27.0, 58.0, 78.0, 98.0),  // doorway
        SensorReading::new(30.5, 66.0, 88.0, 97.0),  // street
        SensorReading::new(33.0, 74.0, f32::NAN, 97.0), // PPG glitch
        SensorReading::new(34.5, 78.0, 112.0, 95.0), // uphill
        SensorReading::new(37.0, 81.0, 128.0, 93.0), // peak heat
        SensorReading::new(29.0, 60.0, 95.0, 97.0),  // shade
    ];

    println!("{:>6} {:>6} {:>6} {:>6} | {:>7} {:>5} {:>6}", "T", "RH", "HR", "SpO2", "comfort", "duty", "delta");

    for raw in &samples {
        let reading = match validator.sanitize(raw) {
            Ok(r) => r,
            Err(e) => {
                println!("skipped sample: {}", e);
                continue;
            }
        };

        let cmp = ModelComparison::evaluate(&reading);
        println!(
            "{:>6.1} {:>6.1} {:>6.0} {:>6.0} | {:>7.2} {:>5} {:>6.2}",
            reading.temperature_c,
            reading.humidity_pct,
            reading.heart_rate_bpm,
            reading.spo2_pct,
            cmp.comfort,
            cmp.speed,
            cmp.delta(),
        );
    }
}
