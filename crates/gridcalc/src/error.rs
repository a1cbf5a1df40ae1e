//! Error types for the gridcalc pipeline

use gridcalc_core::{Error as CoreError, Position};
use gridcalc_formula::FormulaError;
use gridcalc_text::TextError;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while calculating a grid
#[derive(Debug, Error)]
pub enum Error {
    /// Core error (malformed clone directive, bad address, bad number format)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Clone directive whose source or shifted references fall outside the grid
    #[error("Cannot resolve clone at {position}")]
    Clone {
        position: Position,
        #[source]
        source: FormulaError,
    },

    /// Expression that fails to parse or evaluate
    #[error("Cannot evaluate expression at {position}")]
    Evaluation {
        position: Position,
        #[source]
        source: FormulaError,
    },

    /// Clone directive left in the grid after clone resolution
    #[error("Clone directive at {0} was not resolved before evaluation")]
    UnresolvedClone(Position),

    /// Reading or writing the grid failed
    #[error(transparent)]
    Text(#[from] TextError),
}

impl Error {
    /// Position of the cell being processed when the error occurred
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::Core(CoreError::MalformedClone { position, .. }) => Some(*position),
            Error::Clone { position, .. }
            | Error::Evaluation { position, .. }
            | Error::UnresolvedClone(position) => Some(*position),
            _ => None,
        }
    }

    /// Whether this error was caused by a position outside the grid or the
    /// addressable range
    pub fn is_out_of_bounds(&self) -> bool {
        match self {
            Error::Core(e) => e.is_out_of_bounds(),
            Error::Clone { source, .. } | Error::Evaluation { source, .. } => {
                source.is_out_of_bounds()
            }
            _ => false,
        }
    }
}
