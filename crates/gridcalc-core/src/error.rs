//! Error types for gridcalc-core

use crate::grid::Position;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridcalc-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cell identifier format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Position outside the grid extents
    #[error("Position (row {row}, column {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: i64,
        column: i64,
        rows: usize,
        columns: usize,
    },

    /// Shifting a reference would leave the addressable A..Z / row >= 0 space
    #[error("Shifting {reference} by ({rows}, {columns}) leaves the addressable range")]
    ShiftOutOfBounds {
        reference: String,
        rows: i64,
        columns: i64,
    },

    /// Clone directive with an unrecognized shape or direction
    #[error("Malformed clone directive '{content}' at {position}")]
    MalformedClone { position: Position, content: String },

    /// Invalid printf-style number format
    #[error("Invalid number format '{format}': {reason}")]
    InvalidNumberFormat { format: String, reason: String },
}

impl Error {
    /// Whether this error is one of the out-of-bounds kinds
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Error::OutOfBounds { .. } | Error::ShiftOutOfBounds { .. }
        )
    }

    pub(crate) fn number_format(format: &str, reason: impl Into<String>) -> Self {
        Error::InvalidNumberFormat {
            format: format.to_string(),
            reason: reason.into(),
        }
    }
}
