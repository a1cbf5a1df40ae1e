//! Formula error types

use gridcalc_core::{CellKind, Error as CoreError};
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during expression parsing, evaluation or shifting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Syntax outside the four-operator arithmetic grammar
    #[error("Unsupported syntax: {0}")]
    UnsupportedSyntax(String),

    /// Identifier that is malformed or does not resolve against the grid
    #[error("Invalid reference '{reference}'")]
    InvalidReference {
        reference: String,
        #[source]
        source: CoreError,
    },

    /// Referenced cell does not hold a number
    #[error("Reference '{reference}' points at a {kind} cell, expected a number")]
    TypeMismatch { reference: String, kind: CellKind },

    /// Number cell whose content does not parse back to a float
    #[error("Cell '{reference}' holds '{content}', which is not a number")]
    UnparsableNumber { reference: String, content: String },

    /// Core error
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FormulaError {
    /// Whether this error comes from a position outside the grid or the
    /// addressable range
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            FormulaError::InvalidReference { source, .. } | FormulaError::Core(source) => {
                source.is_out_of_bounds()
            }
            _ => false,
        }
    }
}
