use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::types::*;

use super::{Category, ConversionRule, UnitError};

/// A unit the caller can pick, with the rule that maps it onto the base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Picker label, e.g. "Feet"
    pub name: String,

    /// Short symbol, e.g. "ft"
    pub symbol: String,

    /// Extra names accepted by lookup
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    pub rule: ConversionRule,
}

impl UnitDefinition {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, rule: ConversionRule) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            aliases: Vec::new(),
            rule,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Name, symbol and aliases
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.symbol.as_str()]
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
    }

    /// Case-insensitive match against any label
    pub fn matches(&self, name: &str) -> bool {
        self.labels().any(|label| label.eq_ignore_ascii_case(name))
    }

    fn conflicts_with(&self, other: &UnitDefinition) -> bool {
        self.labels().any(|label| other.matches(label))
    }
}

/// Ordered units of one category. Indices are stable; index 0 is the default pick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitTable {
    category: Category,
    units: Vec<UnitDefinition>,
}

static BUILTIN_TABLES: LazyLock<[UnitTable; 4]> =
    LazyLock::new(|| Category::ALL.map(builtin_table));

impl UnitTable {
    /// The built-in table for a category
    pub fn builtin(category: Category) -> &'static UnitTable {
        &BUILTIN_TABLES[category.index()]
    }

    /// Build a table, checking every rule and the single-base-unit invariant
    pub fn new(category: Category, units: Vec<UnitDefinition>) -> Result<Self, UnitError> {
        if units.is_empty() {
            return Err(UnitError::EmptyTable(category));
        }

        for (i, unit) in units.iter().enumerate() {
            check_rule(category, unit)?;
            if units[..i].iter().any(|earlier| unit.conflicts_with(earlier)) {
                return Err(UnitError::DuplicateUnit {
                    category,
                    name: unit.name.clone(),
                });
            }
        }

        let count = units.iter().filter(|u| u.rule.is_identity()).count();
        if count != 1 {
            return Err(UnitError::BaseUnitCount { category, count });
        }

        Ok(Self { category, units })
    }

    /// Append a custom unit and return its index
    pub fn push(&mut self, unit: UnitDefinition) -> Result<usize, UnitError> {
        check_rule(self.category, &unit)?;

        if self.units.iter().any(|existing| unit.conflicts_with(existing)) {
            return Err(UnitError::DuplicateUnit {
                category: self.category,
                name: unit.name,
            });
        }

        // The table already has its base unit
        if unit.rule.is_identity() {
            return Err(UnitError::BaseUnitCount {
                category: self.category,
                count: 2,
            });
        }

        tracing::debug!(category = %self.category, unit = %unit.name, "registered custom unit");
        self.units.push(unit);
        Ok(self.units.len() - 1)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&UnitDefinition> {
        self.units.get(index)
    }

    pub fn units(&self) -> &[UnitDefinition] {
        &self.units
    }

    /// Index of the pivot unit
    pub fn base_index(&self) -> usize {
        self.units
            .iter()
            .position(|u| u.rule.is_identity())
            .unwrap_or(0)
    }

    pub fn base_unit(&self) -> &UnitDefinition {
        &self.units[self.base_index()]
    }

    /// Picker labels in index order
    pub fn names(&self) -> Vec<&str> {
        self.units.iter().map(|u| u.name.as_str()).collect()
    }

    /// Index of the unit with this name, symbol or alias
    pub fn position(&self, name: &str) -> Option<usize> {
        self.units.iter().position(|u| u.matches(name))
    }

    pub fn lookup(&self, name: &str) -> Result<usize, UnitError> {
        self.position(name).ok_or_else(|| UnitError::UnknownUnit {
            category: self.category,
            name: name.to_string(),
        })
    }

    /// Convert `value` from unit `from` to unit `to` through the base unit
    ///
    /// Panics if either index is out of range.
    pub fn convert(&self, from: usize, to: usize, value: f64) -> f64 {
        let from_unit = &self.units[from];
        let to_unit = &self.units[to];

        if from == to {
            return value;
        }

        let base = from_unit.rule.to_base(value);
        to_unit.rule.from_base(base)
    }
}

fn check_rule(category: Category, unit: &UnitDefinition) -> Result<(), UnitError> {
    unit.rule.validate(&unit.name)?;

    if unit.rule.is_affine() && !category.allows_affine() {
        return Err(UnitError::AffineNotAllowed {
            category,
            unit: unit.name.clone(),
        });
    }

    Ok(())
}

fn unit(name: &str, symbol: &str, aliases: &[&str], rule: ConversionRule) -> UnitDefinition {
    UnitDefinition::new(name, symbol, rule).with_aliases(aliases.iter().copied())
}

/// Affine rule into kelvin: scale is the width of one degree, offset is where zero sits
fn kelvin_rule(one_degree: TemperatureInterval, zero: ThermodynamicTemperature) -> ConversionRule {
    ConversionRule::affine(interval_in_kelvin(one_degree), in_kelvin(zero))
}

/// US liquid gallon, 231 cubic inches
const LITERS_PER_GALLON: f64 = 3.785411784;

/// Metric cup
const LITERS_PER_CUP: f64 = 0.24;

fn builtin_table(category: Category) -> UnitTable {
    let units = match category {
        Category::Length => vec![
            unit("Meters", "m", &["meter", "metre", "metres"], ConversionRule::IDENTITY),
            unit(
                "Kilometers",
                "km",
                &["kilometer", "kilometre", "kilometres"],
                ConversionRule::linear(in_meters(Length::new::<kilometer>(1.0))),
            ),
            unit("Feet", "ft", &["foot"], ConversionRule::linear(in_meters(Length::new::<foot>(1.0)))),
            unit("Yards", "yd", &["yard"], ConversionRule::linear(in_meters(Length::new::<yard>(1.0)))),
            unit("Miles", "mi", &["mile"], ConversionRule::linear(in_meters(Length::new::<mile>(1.0)))),
        ],
        Category::Temperature => vec![
            unit(
                "Celsius",
                "°C",
                &["C", "degC"],
                kelvin_rule(
                    TemperatureInterval::new::<interval::degree_celsius>(1.0),
                    ThermodynamicTemperature::new::<degree_celsius>(0.0),
                ),
            ),
            unit(
                "Fahrenheit",
                "°F",
                &["F", "degF"],
                // 0 °F sits 459.67 degrees above absolute zero
                ConversionRule::affine(
                    interval_in_kelvin(TemperatureInterval::new::<interval::degree_fahrenheit>(1.0)),
                    459.67 * 5.0 / 9.0,
                ),
            ),
            unit("Kelvin", "K", &[], ConversionRule::affine(1.0, 0.0)),
        ],
        Category::Time => vec![
            unit("Seconds", "s", &["sec", "second"], ConversionRule::IDENTITY),
            unit("Minutes", "min", &["minute"], ConversionRule::linear(in_seconds(Time::new::<minute>(1.0)))),
            unit("Hours", "h", &["hr", "hour"], ConversionRule::linear(in_seconds(Time::new::<hour>(1.0)))),
            // Not taken from uom: a day is defined here as 24 hours of 3600 s
            unit("Days", "d", &["day"], ConversionRule::linear(3600.0 * 24.0)),
        ],
        Category::Volume => vec![
            unit(
                "Milliliters",
                "mL",
                &["milliliter", "millilitre", "millilitres"],
                ConversionRule::linear(in_liters(Volume::new::<milliliter>(1.0))),
            ),
            unit("Liters", "L", &["liter", "litre", "litres"], ConversionRule::IDENTITY),
            unit("Cups", "cup", &[], ConversionRule::linear(LITERS_PER_CUP)),
            unit("Pints", "pt", &["pint"], ConversionRule::linear(LITERS_PER_GALLON / 8.0)),
            unit("Gallons", "gal", &["gallon"], ConversionRule::linear(LITERS_PER_GALLON)),
        ],
    };

    UnitTable { category, units }
}
