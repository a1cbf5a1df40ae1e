//! Delimited grid reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{TextError, TextResult};
use crate::options::ReadOptions;
use gridcalc_core::{classify_row, Grid};
use tracing::{debug, warn};

/// Delimited grid reader
pub struct GridReader;

impl GridReader {
    /// Read a delimited file into a classified grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> TextResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read delimited text from a reader into a classified grid
    pub fn read<R: Read>(mut reader: R, options: &ReadOptions) -> TextResult<Grid> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::read_str(&input, options)
    }

    /// Classify delimited text into a grid.
    ///
    /// The whole input is trimmed first; blank lines inside it are kept as
    /// rows of one empty cell so row numbering matches the line number.
    ///
    /// # Example
    /// ```rust
    /// use gridcalc_text::{GridReader, ReadOptions};
    ///
    /// let grid = GridReader::read_str("A | B\n1 | 2\n", &ReadOptions::default()).unwrap();
    /// assert_eq!(grid.row_count(), 2);
    /// assert_eq!(grid.row(1).unwrap()[0].content, "1.00");
    /// ```
    pub fn read_str(input: &str, options: &ReadOptions) -> TextResult<Grid> {
        if options.delimiter == '\n' || options.delimiter == '\r' {
            return Err(TextError::InvalidDelimiter(options.delimiter));
        }

        let content = input.trim();
        if content.is_empty() {
            debug!("empty input");
            return Ok(Grid::default());
        }

        let rows: Vec<_> = content
            .split('\n')
            .map(|line| classify_row(line.split(options.delimiter), &options.number_format))
            .collect();

        let grid = Grid::new(rows);
        debug!(
            rows = grid.row_count(),
            columns = grid.column_count(),
            "read grid"
        );

        if !grid.is_rectangular() {
            let expected = grid.column_count();
            for (row, cells) in grid.rows().enumerate() {
                if cells.len() != expected {
                    warn!(row, cells = cells.len(), expected, "ragged row");
                }
            }
        }

        Ok(grid)
    }
}
