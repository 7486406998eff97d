use std::fmt;

use crate::conversion::UnitDefinition;

/// A converted value, printed the way the form shows it
///
/// Shortest round-trip decimal, whole numbers keep a trailing `.0`.
/// Magnitudes from 1e16 up (and below 1e-4) use Rust's exponent form, e.g. `1e16`.
#[derive(Debug, Clone, Copy)]
pub struct DisplayValue(pub f64);

/// A value followed by the symbol of its unit, e.g. `32.0 °F`
#[derive(Debug, Clone, Copy)]
pub struct DisplayMeasurement<'a>(pub f64, pub &'a UnitDefinition);

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug on f64 is the shortest representation that round-trips
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for DisplayMeasurement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", DisplayValue(self.0), self.1.symbol)
    }
}
