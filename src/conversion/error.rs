use super::Category;

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown {category} unit: {name}")]
    UnknownUnit { category: Category, name: String },

    #[error("Unit table for {0} has no units")]
    EmptyTable(Category),

    #[error("Unit table for {category} needs exactly one base unit, found {count}")]
    BaseUnitCount { category: Category, count: usize },

    #[error("Unit {name} conflicts with an existing {category} unit")]
    DuplicateUnit { category: Category, name: String },

    #[error("Invalid conversion rule for {unit}: {reason}")]
    InvalidRule { unit: String, reason: String },

    #[error("Unit {unit} uses an affine rule, which {category} units cannot have")]
    AffineNotAllowed { category: Category, unit: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("Input is not a number: {0:?}")]
    InvalidInput(String),

    #[error("Unit index {index} out of range for {category} (table has {len} units)")]
    UnitIndexOutOfRange {
        category: Category,
        index: usize,
        len: usize,
    },

    #[error("Unit lookup error: {0}")]
    UnitError(#[from] UnitError),
}
