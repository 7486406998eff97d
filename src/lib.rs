pub mod types;
pub mod conversion;
pub mod config;

pub use conversion::*;
pub use config::{ConfigError, ConverterConfig, CustomUnit};
