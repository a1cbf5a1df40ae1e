//! # gridcalc-core
//!
//! Core data structures for the gridcalc spreadsheet engine.
//!
//! This crate provides the fundamental types used throughout gridcalc:
//! - [`Cell`] and [`CellKind`] - Classified cell content
//! - [`Grid`] and [`Position`] - The dense row-major cell grid
//! - [`Address`] - Single-letter, 0-based cell identifiers (`A0`, `B3`)
//! - [`Direction`] - Clone directive directions
//! - [`NumberFormat`] - printf-style number rendering
//! - [`classify`] - Raw text to typed cell classification
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{classify_row, Address, CellKind, Grid, NumberFormat};
//!
//! let fmt = NumberFormat::default();
//! let grid = Grid::new(vec![
//!     classify_row("Name | Value".split('|'), &fmt),
//!     classify_row("x | 4".split('|'), &fmt),
//! ]);
//!
//! let cell = grid.lookup(&Address::parse("B1").unwrap()).unwrap();
//! assert_eq!(cell.kind, CellKind::Number);
//! assert_eq!(cell.content, "4.00");
//! ```

pub mod address;
pub mod cell;
pub mod classify;
pub mod direction;
pub mod error;
pub mod grid;
pub mod number_format;

// Re-exports for convenience
pub use address::{Address, MAX_COLUMNS};
pub use cell::{Cell, CellKind};
pub use classify::{classify, classify_row};
pub use direction::Direction;
pub use error::{Error, Result};
pub use grid::{Grid, Position};
pub use number_format::{NumberFormat, DEFAULT_NUMBER_FORMAT};
