//! Runtime error types

use featurize_core::CoreError;
use featurize_parser::ParseError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A column reference names a column absent from the table
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// A binary operator ran without a resolved second operand
    #[error("Missing second operand for '{operator}'")]
    MissingOperand { operator: String },

    /// `apply` without a usable function
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Operand columns of different lengths
    #[error("Operand length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Table error
    #[error(transparent)]
    Core(CoreError),

    /// Configuration error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Malformed input data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<CoreError> for RuntimeError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ColumnNotFound(name) => RuntimeError::MissingColumn(name),
            other => RuntimeError::Core(other),
        }
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
