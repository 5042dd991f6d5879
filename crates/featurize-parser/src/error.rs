//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Field present with the wrong shape (e.g. a string where a list is expected)
    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    ConfigType {
        field: String,
        expected: String,
        actual: String,
    },

    /// Operation name outside the supported set
    #[error("Unsupported operation: {0}")]
    UnsupportedOperator(String),

    /// `apply` function name outside the allow-list
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Invalid field value
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
