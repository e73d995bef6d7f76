//! Property tests for reading validation

use neckcool_core::{
    constants::sensors::*, Feature, ReadingError, ReadingValidator, SensorReading, Validator,
};
use proptest::prelude::*;

fn any_reading() -> impl Strategy<Value = SensorReading> {
    (any::<f32>(), any::<f32>(), any::<f32>(), any::<f32>())
        .prop_map(|(t, h, hr, s)| SensorReading::new(t, h, hr, s))
}

proptest! {
    #[test]
    fn sanitize_is_ok_iff_finite(reading in any_reading()) {
        let validator = ReadingValidator::default();
        let result = validator.sanitize(&reading);

        match reading.first_non_finite() {
            Some(feature) => prop_assert_eq!(result, Err(ReadingError::InvalidValue { feature })),
            None => {
                let clean = result.unwrap();
                prop_assert!(validator.validate(&clean).is_ok());
            }
        }
    }

    #[test]
    fn sanitize_keeps_in_range_values(
        t in TEMP_SENSOR_MIN_C..=TEMP_SENSOR_MAX_C,
        h in HUMIDITY_SENSOR_MIN_PCT..=HUMIDITY_SENSOR_MAX_PCT,
        hr in HEART_RATE_SENSOR_MIN_BPM..=HEART_RATE_SENSOR_MAX_BPM,
        s in SPO2_SENSOR_MIN_PCT..=SPO2_SENSOR_MAX_PCT,
    ) {
        let reading = SensorReading::new(t, h, hr, s);
        let validator = ReadingValidator::default();

        prop_assert!(validator.validate(&reading).is_ok());
        prop_assert_eq!(validator.sanitize(&reading), Ok(reading));
    }

    #[test]
    fn sanitize_is_idempotent(reading in any_reading()) {
        let validator = ReadingValidator::default();
        if let Ok(clean) = validator.sanitize(&reading) {
            prop_assert_eq!(validator.sanitize(&clean), Ok(clean));
        }
    }
}

#[test]
fn range_errors_name_the_channel() {
    let validator = ReadingValidator::default();
    let reading = SensorReading::new(30.0, 55.0, 12.0, 97.0);

    let err = validator.validate(&reading).unwrap_err();
    assert_eq!(err.feature(), Feature::HeartRate);
    assert!(matches!(err, ReadingError::OutOfRange { value, .. } if value == 12.0));
}
