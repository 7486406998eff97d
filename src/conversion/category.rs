use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{BASE_LENGTH_UNIT, BASE_TEMPERATURE_UNIT, BASE_TIME_UNIT, BASE_VOLUME_UNIT};

use super::UnitError;

/// Measurement domain with its own closed set of convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Temperature,
    Time,
    Volume,
}

impl Category {
    /// Every category, in picker order
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Temperature,
        Category::Time,
        Category::Volume,
    ];

    /// Position of this category in [`Category::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Category::Length => 0,
            Category::Temperature => 1,
            Category::Time => 2,
            Category::Volume => 3,
        }
    }

    /// Short segment label
    pub const fn label(self) -> &'static str {
        match self {
            Category::Length => "Len",
            Category::Temperature => "Temp",
            Category::Time => "Time",
            Category::Volume => "Vol",
        }
    }

    /// Name of the pivot unit all conversions pass through
    pub const fn base_unit_name(self) -> &'static str {
        match self {
            Category::Length => BASE_LENGTH_UNIT,
            Category::Temperature => BASE_TEMPERATURE_UNIT,
            Category::Time => BASE_TIME_UNIT,
            Category::Volume => BASE_VOLUME_UNIT,
        }
    }

    /// Only temperature scales carry an offset
    pub const fn allows_affine(self) -> bool {
        matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Length => "length",
            Category::Temperature => "temperature",
            Category::Time => "time",
            Category::Volume => "volume",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "length" | "len" => Ok(Category::Length),
            "temperature" | "temp" => Ok(Category::Temperature),
            "time" => Ok(Category::Time),
            "volume" | "vol" => Ok(Category::Volume),
            _ => Err(UnitError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_parse_names_and_labels() {
        assert_eq!("Temperature".parse::<Category>().unwrap(), Category::Temperature);
        assert_eq!("vol".parse::<Category>().unwrap(), Category::Volume);
        assert_eq!(Category::Length.label().parse::<Category>().unwrap(), Category::Length);
    }

    #[test]
    fn test_unknown_category() {
        let err = "mass".parse::<Category>().unwrap_err();
        assert!(matches!(err, UnitError::UnknownCategory(ref name) if name == "mass"));
    }

    #[test]
    fn test_only_temperature_is_affine() {
        let affine: Vec<_> = Category::ALL.into_iter().filter(|c| c.allows_affine()).collect();
        assert_eq!(affine, vec![Category::Temperature]);
    }

    #[test]
    fn test_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }
}
