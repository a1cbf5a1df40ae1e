//! Text I/O error types

use thiserror::Error;

/// Result type for text I/O operations
pub type TextResult<T> = std::result::Result<T, TextError>;

/// Errors that can occur while reading or writing delimited grids
#[derive(Debug, Error)]
pub enum TextError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimiter that cannot separate cells on a line
    #[error("Invalid delimiter {0:?}: must not be a line break")]
    InvalidDelimiter(char),
}
