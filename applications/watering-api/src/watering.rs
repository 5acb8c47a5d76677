//! Watering threshold policy.
//!
//! A pot needs water when it is both much hotter than its plant's ideal
//! temperature and noticeably drier than its ideal humidity.

use crate::repositories::plants::Plant;
use crate::repositories::telemetry::SensorReading;

/// Temperature must exceed this multiple of the ideal temperature.
pub const TEMPERATURE_FACTOR: f64 = 2.0;
/// Humidity must fall below this fraction of the ideal humidity.
pub const HUMIDITY_FACTOR: f64 = 0.8;
/// Seconds the pump runs when the policy fires.
pub const PUMP_DURATION_SECS: i64 = 5;

pub fn needs_water(plant: &Plant, reading: &SensorReading) -> bool {
    reading.temperature > TEMPERATURE_FACTOR * plant.ideal_temperature
        && reading.humidity < HUMIDITY_FACTOR * plant.ideal_humidity
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant() -> Plant {
        Plant {
            name: "Samambaia".to_string(),
            ideal_temperature: 20.0,
            ideal_humidity: 50.0,
        }
    }

    fn reading(temperature: f64, humidity: f64) -> SensorReading {
        SensorReading {
            pot_id: 1,
            temperature,
            humidity,
        }
    }

    #[test]
    fn test_hot_and_dry_needs_water() {
        assert!(needs_water(&plant(), &reading(41.0, 39.0)));
    }

    #[test]
    fn test_not_hot_enough() {
        assert!(!needs_water(&plant(), &reading(39.0, 39.0)));
    }

    #[test]
    fn test_not_dry_enough() {
        assert!(!needs_water(&plant(), &reading(41.0, 41.0)));
    }

    #[test]
    fn test_thresholds_are_strict() {
        // 40 is exactly 2 x 20, 40 is exactly 0.8 x 50
        assert!(!needs_water(&plant(), &reading(40.0, 30.0)));
        assert!(!needs_water(&plant(), &reading(45.0, 40.0)));
    }

    #[test]
    fn test_one_condition_alone_is_not_enough() {
        assert!(!needs_water(&plant(), &reading(80.0, 60.0)));
        assert!(!needs_water(&plant(), &reading(10.0, 5.0)));
    }
}
