pub mod category;
pub mod converter;
pub mod error;
pub mod rule;
pub mod table;

pub use category::Category;
pub use converter::{convert, parse_input, try_parse_input, UnitConverter};
pub use error::{ConversionError, UnitError};
pub use rule::ConversionRule;
pub use table::{UnitDefinition, UnitTable};
