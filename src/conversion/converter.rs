use crate::config::{ConfigError, ConverterConfig};

use super::{Category, ConversionError, UnitDefinition, UnitError, UnitTable};

/// Parse raw input text, falling back to `0.0` when it is not a number
///
/// Empty text is the "nothing typed yet" state of a live form, so it is not
/// treated as an error here. Use [`try_parse_input`] to reject it instead.
pub fn parse_input(text: &str) -> f64 {
    match try_parse_input(text) {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(input = text, "input is not a number, using 0.0");
            0.0
        }
    }
}

/// Parse raw input text as an `f64`, rejecting anything that is not a number
pub fn try_parse_input(text: &str) -> Result<f64, ConversionError> {
    text.parse::<f64>()
        .map_err(|_| ConversionError::InvalidInput(text.to_string()))
}

/// Convert raw input text between two units of a built-in table
///
/// Panics if either index is outside the category's table.
pub fn convert(category: Category, from: usize, to: usize, text: &str) -> f64 {
    UnitTable::builtin(category).convert(from, to, parse_input(text))
}

/// Converter over one table per category, optionally extended with custom units
#[derive(Debug, Clone, PartialEq)]
pub struct UnitConverter {
    tables: [UnitTable; 4],
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self {
            tables: Category::ALL.map(|c| UnitTable::builtin(c).clone()),
        }
    }
}

impl UnitConverter {
    /// Converter over the built-in tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in tables plus every custom unit in `config`, in file order
    pub fn from_config(config: &ConverterConfig) -> Result<Self, ConfigError> {
        let mut converter = Self::new();
        config.apply(&mut converter)?;
        Ok(converter)
    }

    /// Register a custom unit and return its index in the category's table
    pub fn add_unit(&mut self, category: Category, unit: UnitDefinition) -> Result<usize, UnitError> {
        self.tables[category.index()].push(unit)
    }

    pub fn table(&self, category: Category) -> &UnitTable {
        &self.tables[category.index()]
    }

    /// Convert raw input text; unparseable input converts as `0.0`
    ///
    /// Panics if either index is outside the category's table.
    pub fn convert(&self, category: Category, from: usize, to: usize, text: &str) -> f64 {
        self.convert_value(category, from, to, parse_input(text))
    }

    /// Convert a value the caller already parsed
    pub fn convert_value(&self, category: Category, from: usize, to: usize, value: f64) -> f64 {
        self.table(category).convert(from, to, value)
    }

    /// Checked conversion: both indices must exist and the text must parse
    pub fn try_convert(
        &self,
        category: Category,
        from: usize,
        to: usize,
        text: &str,
    ) -> Result<f64, ConversionError> {
        let table = self.table(category);
        for index in [from, to] {
            if index >= table.len() {
                return Err(ConversionError::UnitIndexOutOfRange {
                    category,
                    index,
                    len: table.len(),
                });
            }
        }

        let value = try_parse_input(text)?;
        Ok(table.convert(from, to, value))
    }

    /// Convert between units given by name, symbol or alias
    pub fn convert_by_name(
        &self,
        category: Category,
        from: &str,
        to: &str,
        text: &str,
    ) -> Result<f64, ConversionError> {
        let table = self.table(category);
        let from = table.lookup(from)?;
        let to = table.lookup(to)?;

        Ok(table.convert(from, to, parse_input(text)))
    }

    /// Every table as pretty-printed JSON
    pub fn catalog_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::ConversionRule;
    use approx::assert_relative_eq;

    const METERS: usize = 0;
    const FEET: usize = 2;
    const CELSIUS: usize = 0;
    const FAHRENHEIT: usize = 1;
    const KELVIN: usize = 2;
    const SECONDS: usize = 0;
    const DAYS: usize = 3;
    const MILLILITERS: usize = 0;
    const LITERS: usize = 1;
    const CUPS: usize = 2;

    #[test]
    fn test_meters_to_feet() {
        assert_relative_eq!(convert(Category::Length, METERS, FEET, "1"), 3.28084, epsilon = 1e-4);
    }

    #[test]
    fn test_freezing_point() {
        assert_relative_eq!(
            convert(Category::Temperature, CELSIUS, FAHRENHEIT, "0"),
            32.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            convert(Category::Temperature, CELSIUS, KELVIN, "0"),
            273.15,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_metric_cup() {
        assert_relative_eq!(convert(Category::Volume, CUPS, LITERS, "1"), 0.24, epsilon = 1e-15);
        assert_relative_eq!(convert(Category::Volume, CUPS, MILLILITERS, "2"), 480.0, epsilon = 1e-9);
    }

    #[test]
    fn test_celsius_fahrenheit_fixed_point() {
        assert_relative_eq!(
            convert(Category::Temperature, CELSIUS, FAHRENHEIT, "-40"),
            -40.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_seconds_to_days() {
        assert_relative_eq!(convert(Category::Time, SECONDS, DAYS, "86400"), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_input_falls_back_to_zero() {
        assert_eq!(convert(Category::Volume, LITERS, MILLILITERS, ""), 0.0);
        assert_eq!(convert(Category::Volume, LITERS, MILLILITERS, "abc"), 0.0);
    }

    #[test]
    fn test_same_unit_is_exact_identity() {
        let inputs = ["0", "1", "-40", "0.1", "1e-300", "123456.789", "", "twelve"];

        for category in Category::ALL {
            let table = UnitTable::builtin(category);
            for unit in 0..table.len() {
                for text in inputs {
                    let expected = text.parse::<f64>().unwrap_or(0.0);
                    assert_eq!(convert(category, unit, unit, text), expected);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_every_pair() {
        let inputs = ["1", "-40", "0.125", "98.6", "1000000"];

        for category in Category::ALL {
            let table = UnitTable::builtin(category);
            for a in 0..table.len() {
                for b in 0..table.len() {
                    for text in inputs {
                        let original = parse_input(text);
                        let there = convert(category, a, b, text);
                        let back = table.convert(b, a, there);
                        assert_relative_eq!(back, original, epsilon = 1e-9, max_relative = 1e-9);
                    }
                }
            }
        }
    }

    #[test]
    fn test_non_base_pairs_compose_through_base() {
        // 1 mile = 1760 yards
        assert_relative_eq!(convert(Category::Length, 4, 3, "1"), 1760.0, epsilon = 1e-9);
        // 1 gallon = 8 pints
        assert_relative_eq!(convert(Category::Volume, 4, 3, "1"), 8.0, epsilon = 1e-9);
        // 212 °F = 373.15 K
        assert_relative_eq!(
            convert(Category::Temperature, FAHRENHEIT, KELVIN, "212"),
            373.15,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_try_parse_rejects_garbage() {
        assert!(matches!(try_parse_input(""), Err(ConversionError::InvalidInput(_))));
        assert!(matches!(try_parse_input("1,5"), Err(ConversionError::InvalidInput(_))));
        assert_eq!(try_parse_input("-2.5").unwrap(), -2.5);
    }

    #[test]
    fn test_try_convert_checks_indices() {
        let converter = UnitConverter::new();

        let err = converter
            .try_convert(Category::Temperature, CELSIUS, 3, "10")
            .unwrap_err();
        assert!(matches!(
            err,
            ConversionError::UnitIndexOutOfRange { index: 3, len: 3, .. }
        ));

        let err = converter.try_convert(Category::Time, 0, 1, "").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput(_)));

        let minutes = converter.try_convert(Category::Time, 2, 1, "1.5").unwrap();
        assert_relative_eq!(minutes, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_convert_by_name() {
        let converter = UnitConverter::new();
        let feet = converter
            .convert_by_name(Category::Length, "km", "feet", "1")
            .unwrap();
        assert_relative_eq!(feet, 3280.839895, epsilon = 1e-5);

        let err = converter
            .convert_by_name(Category::Length, "furlong", "m", "1")
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnitError(UnitError::UnknownUnit { .. })));
    }

    #[test]
    fn test_custom_unit_on_converter() {
        let mut converter = UnitConverter::new();
        let fortnight = UnitDefinition::new("Fortnights", "fn", ConversionRule::linear(1_209_600.0));
        let index = converter.add_unit(Category::Time, fortnight).unwrap();

        assert_relative_eq!(converter.convert(Category::Time, index, DAYS, "1"), 14.0, epsilon = 1e-12);
        // Built-in tables stay untouched
        assert_eq!(UnitTable::builtin(Category::Time).len(), 4);
    }

    #[test]
    fn test_catalog_json_lists_every_category() {
        let json = UnitConverter::new().catalog_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let categories: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["category"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(categories, vec!["length", "temperature", "time", "volume"]);
        assert_eq!(value[2]["units"][3]["rule"]["factor"], 86400.0);
    }
}
