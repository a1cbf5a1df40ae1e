//! Delimited grid writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{TextError, TextResult};
use crate::options::WriteOptions;
use gridcalc_core::Grid;

/// Delimited grid writer
pub struct GridWriter;

impl GridWriter {
    /// Write a grid to a file
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &WriteOptions,
    ) -> TextResult<()> {
        let file = File::create(path)?;
        Self::write(grid, BufWriter::new(file), options)
    }

    /// Write a grid to a writer
    pub fn write<W: Write>(grid: &Grid, mut writer: W, options: &WriteOptions) -> TextResult<()> {
        writer.write_all(Self::write_string(grid, options)?.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Render a grid, one line per row, each line ending in `\n`.
    ///
    /// # Example
    /// ```rust
    /// use gridcalc_core::{Cell, Grid};
    /// use gridcalc_text::{GridWriter, WriteOptions};
    ///
    /// let grid = Grid::new(vec![
    ///     vec![Cell::text("Name"), Cell::text("X")],
    ///     vec![Cell::number("1.00"), Cell::number("2.00")],
    /// ]);
    /// let options = WriteOptions { pad: true, pretty: true, ..Default::default() };
    /// let text = GridWriter::write_string(&grid, &options).unwrap();
    /// assert_eq!(text, "Name | X\n1.00 | 2.00\n");
    /// ```
    pub fn write_string(grid: &Grid, options: &WriteOptions) -> TextResult<String> {
        if options.delimiter == '\n' || options.delimiter == '\r' {
            return Err(TextError::InvalidDelimiter(options.delimiter));
        }

        let separator = options.separator();
        let widths = if options.pad {
            column_widths(grid)
        } else {
            Vec::new()
        };

        let mut out = String::new();
        for row in grid.rows() {
            for (column, cell) in row.iter().enumerate() {
                out.push_str(&cell.content);

                // The last cell of a row is never padded or followed by a separator
                if column + 1 < row.len() {
                    if let Some(&width) = widths.get(column) {
                        let used = cell.content.chars().count();
                        out.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
                    }
                    out.push_str(&separator);
                }
            }
            out.push('\n');
        }

        Ok(out)
    }
}

/// Widest cell content of each column, in characters
pub fn column_widths(grid: &Grid) -> Vec<usize> {
    let mut widths = vec![0; grid.column_count()];
    for row in grid.rows() {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(cell.content.chars().count());
        }
    }
    widths
}
