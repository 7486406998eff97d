use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::conversion::{Category, ConversionRule, UnitConverter, UnitDefinition, UnitError};

/// Error types for loading custom unit definitions
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unit {0} needs a `factor`, or a `scale` and `offset`")]
    MissingRule(String),

    #[error("Unit {0} mixes `factor` with `scale`/`offset`")]
    AmbiguousRule(String),

    #[error("Unit error: {0}")]
    UnitError(#[from] UnitError),
}

/// Custom units appended to the built-in tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    #[serde(default)]
    pub units: Vec<CustomUnit>,
}

/// One `[[units]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomUnit {
    pub category: Category,

    pub name: String,

    /// Defaults to the name
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default)]
    pub aliases: Vec<String>,

    /// Linear rule: base units per unit
    #[serde(default)]
    pub factor: Option<f64>,

    /// Affine rule: base units per degree
    #[serde(default)]
    pub scale: Option<f64>,

    /// Affine rule: base value at zero
    #[serde(default)]
    pub offset: Option<f64>,
}

impl CustomUnit {
    pub fn rule(&self) -> Result<ConversionRule, ConfigError> {
        match (self.factor, self.scale, self.offset) {
            (Some(factor), None, None) => Ok(ConversionRule::linear(factor)),
            (None, Some(scale), offset) => Ok(ConversionRule::affine(scale, offset.unwrap_or(0.0))),
            (None, None, Some(offset)) => Ok(ConversionRule::affine(1.0, offset)),
            (None, None, None) => Err(ConfigError::MissingRule(self.name.clone())),
            _ => Err(ConfigError::AmbiguousRule(self.name.clone())),
        }
    }

    pub fn to_definition(&self) -> Result<UnitDefinition, ConfigError> {
        let symbol = self.symbol.as_deref().unwrap_or(&self.name);
        Ok(UnitDefinition::new(&self.name, symbol, self.rule()?)
            .with_aliases(self.aliases.iter().cloned()))
    }
}

impl ConverterConfig {
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a `.json` file, or TOML for any other extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("json") {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };

        tracing::info!(path = %path.display(), units = config.units.len(), "loaded unit config");
        Ok(config)
    }

    /// Register every entry on `converter`, stopping at the first bad one
    pub fn apply(&self, converter: &mut UnitConverter) -> Result<(), ConfigError> {
        for unit in &self.units {
            converter.add_unit(unit.category, unit.to_definition()?)?;
        }
        Ok(())
    }
}
