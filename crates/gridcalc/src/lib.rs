//! # gridcalc
//!
//! A small spreadsheet engine for pipe-delimited grids.
//!
//! ## Features
//!
//! - Cells hold text, numbers, arithmetic expressions (`=A1+B1*2`) or clone
//!   directives (`:^`, `:>`, `:v`, `:<`)
//! - Clone directives copy a neighbouring cell, shifting the references of
//!   copied expressions
//! - Expressions support `+ - * /`, parentheses, numeric literals and
//!   single-letter, 0-based cell references
//! - Numbers are rendered with a printf-style format (`%.2f` by default)
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let input = "A | B\n1 | 2\n3 | 4\n=A1+B1 | :^";
//! let output = gridcalc::calculate_str(
//!     input,
//!     &ReadOptions::default(),
//!     &WriteOptions { pretty: true, ..Default::default() },
//! )
//! .unwrap();
//!
//! assert_eq!(output, "A | B\n1.00 | 2.00\n3.00 | 4.00\n3.00 | 4.00\n");
//! ```

mod clone;

pub mod calculation;
pub mod error;
pub mod prelude;

// Re-export calculation types
pub use calculation::{CalculationOptions, CalculationStats, GridCalculationExt};
pub use clone::resolve_clones;
pub use error::{Error, Result};

// Re-export core types
pub use gridcalc_core::{
    classify, classify_row, Address, Cell, CellKind, Direction, Grid, NumberFormat, Position,
    DEFAULT_NUMBER_FORMAT, MAX_COLUMNS,
};

// Re-export formula types
pub use gridcalc_formula::{
    evaluate, parse_formula, shift_references, EvaluationContext, FormulaError, FormulaExpr,
    FormulaResult,
};

// Re-export I/O types
pub use gridcalc_text::{
    column_widths, GridReader, GridWriter, ReadOptions, TextError, WriteOptions,
};

/// Read, calculate and render a grid in one step.
///
/// Literal numbers and expression results share `read.number_format`.
pub fn calculate_str(input: &str, read: &ReadOptions, write: &WriteOptions) -> Result<String> {
    let mut grid = GridReader::read_str(input, read)?;
    grid.calculate_with_options(&CalculationOptions {
        number_format: read.number_format.clone(),
    })?;
    Ok(GridWriter::write_string(&grid, write)?)
}
