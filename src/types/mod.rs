mod display;

pub use uom::si::f64::{Length, TemperatureInterval, ThermodynamicTemperature, Time, Volume};

pub use uom::si::{
    length::{foot, kilometer, meter, mile, yard},
    thermodynamic_temperature::{degree_celsius, kelvin},
    time::{hour, minute, second},
    volume::{liter, milliliter},
};

/// Interval units, used for the scale part of affine temperature rules
pub mod interval {
    pub use uom::si::temperature_interval::{
        degree_celsius, degree_fahrenheit, kelvin,
    };
}

pub use display::{DisplayMeasurement, DisplayValue};

// Pivot units every category converts through (just documentation)
/// Internal standard: meters
pub const BASE_LENGTH_UNIT: &str = "meters";
/// Internal standard: kelvin
pub const BASE_TEMPERATURE_UNIT: &str = "kelvin";
/// Internal standard: seconds
pub const BASE_TIME_UNIT: &str = "seconds";
/// Internal standard: liters
pub const BASE_VOLUME_UNIT: &str = "liters";

/// Convert a UOM Length to the base coordinate (meters)
#[inline]
pub fn in_meters(length: Length) -> f64 {
    length.get::<meter>()
}

/// Convert a UOM Volume to the base coordinate (liters)
#[inline]
pub fn in_liters(volume: Volume) -> f64 {
    volume.get::<liter>()
}

/// Convert a UOM Time to the base coordinate (seconds)
#[inline]
pub fn in_seconds(time: Time) -> f64 {
    time.get::<second>()
}

/// Convert a UOM absolute temperature to the base coordinate (kelvin)
#[inline]
pub fn in_kelvin(temperature: ThermodynamicTemperature) -> f64 {
    temperature.get::<kelvin>()
}

/// Width of a temperature interval in kelvin
#[inline]
pub fn interval_in_kelvin(interval: TemperatureInterval) -> f64 {
    interval.get::<interval::kelvin>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_factors() {
        assert_eq!(in_meters(Length::new::<meter>(1.0)), 1.0);
        assert_relative_eq!(in_meters(Length::new::<foot>(1.0)), 0.3048, epsilon = 1e-12);
        assert_relative_eq!(in_meters(Length::new::<mile>(1.0)), 1609.344, epsilon = 1e-9);
    }

    #[test]
    fn test_volume_factors() {
        assert_relative_eq!(in_liters(Volume::new::<milliliter>(1.0)), 0.001, epsilon = 1e-12);
        assert_eq!(in_liters(Volume::new::<liter>(2.5)), 2.5);
    }

    #[test]
    fn test_time_factors() {
        assert_eq!(in_seconds(Time::new::<second>(1.0)), 1.0);
        assert_relative_eq!(in_seconds(Time::new::<hour>(1.0)), 3600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_temperature_coordinates() {
        let freezing = ThermodynamicTemperature::new::<degree_celsius>(0.0);
        assert_relative_eq!(in_kelvin(freezing), 273.15, epsilon = 1e-9);

        let one_f = TemperatureInterval::new::<interval::degree_fahrenheit>(1.0);
        assert_relative_eq!(interval_in_kelvin(one_f), 5.0 / 9.0, epsilon = 1e-12);
    }
}
