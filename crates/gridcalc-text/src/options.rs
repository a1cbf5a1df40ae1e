//! Reader and writer options

use gridcalc_core::NumberFormat;

/// Default cell delimiter
pub const DEFAULT_DELIMITER: char = '|';

/// Options for reading delimited grids
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Cell delimiter (default: pipe)
    pub delimiter: char,
    /// Format numeric literals are re-rendered with
    pub number_format: NumberFormat,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            number_format: NumberFormat::default(),
        }
    }
}

/// Options for writing delimited grids
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Cell delimiter (default: pipe)
    pub delimiter: char,
    /// Pad every cell but the last of a row to its column's width
    pub pad: bool,
    /// Surround the delimiter with single spaces
    pub pretty: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            pad: false,
            pretty: false,
        }
    }
}

impl WriteOptions {
    /// Separator placed between cells
    pub fn separator(&self) -> String {
        if self.pretty {
            format!(" {} ", self.delimiter)
        } else {
            self.delimiter.to_string()
        }
    }
}
