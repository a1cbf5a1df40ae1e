//! # gridcalc-text
//!
//! Pipe-delimited grid reader and writer for gridcalc.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{TextError, TextResult};
pub use options::{ReadOptions, WriteOptions, DEFAULT_DELIMITER};
pub use reader::GridReader;
pub use writer::{column_widths, GridWriter};
