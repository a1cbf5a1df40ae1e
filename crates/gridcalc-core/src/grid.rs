//! Grid storage
//!
//! The grid is a dense, row-major `Vec<Vec<Cell>>`. It is sized once when the
//! input is classified; the resolution passes only replace cells in place.

use crate::address::Address;
use crate::cell::{Cell, CellKind};
use crate::error::{Error, Result};
use std::fmt;

/// A (row, column) index into the grid, not limited to addressable columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<Address> for Position {
    fn from(addr: Address) -> Self {
        Self::new(addr.row, addr.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Address::column_to_letter(self.column) {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            None => write!(f, "R{}C{}", self.row, self.column),
        }
    }
}

/// A grid of classified cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid from rows of cells
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (width of the widest row)
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether every row has the same number of cells
    pub fn is_rectangular(&self) -> bool {
        let mut widths = self.rows.iter().map(Vec::len);
        match widths.next() {
            Some(first) => widths.all(|w| w == first),
            None => true,
        }
    }

    /// Iterate over the rows
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Get the cells of one row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Get a cell by position
    pub fn get(&self, position: Position) -> Option<&Cell> {
        self.rows.get(position.row)?.get(position.column)
    }

    /// Replace a cell. Returns the previous cell, or `None` if the position is
    /// outside the grid (the grid never grows).
    pub fn set(&mut self, position: Position, cell: Cell) -> Option<Cell> {
        let slot = self.rows.get_mut(position.row)?.get_mut(position.column)?;
        Some(std::mem::replace(slot, cell))
    }

    /// Resolve an address against the grid
    pub fn lookup(&self, address: &Address) -> Result<&Cell> {
        self.get((*address).into())
            .ok_or_else(|| self.out_of_bounds(address.row as i64, address.column as i64))
    }

    /// Get the cell at a signed offset from `origin`
    pub fn neighbor(&self, origin: Position, rows: i64, columns: i64) -> Result<&Cell> {
        let row = origin.row as i64 + rows;
        let column = origin.column as i64 + columns;

        if row < 0 || column < 0 {
            return Err(self.out_of_bounds(row, column));
        }

        self.get(Position::new(row as usize, column as usize))
            .ok_or_else(|| self.out_of_bounds(row, column))
    }

    /// Positions of every cell, in row-major order
    pub fn positions(&self) -> Vec<Position> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| (0..cells.len()).map(move |column| Position::new(row, column)))
            .collect()
    }

    /// Positions of every cell of the given kind, in row-major order
    pub fn positions_of(&self, kind: CellKind) -> Vec<Position> {
        self.positions()
            .into_iter()
            .filter(|pos| self.get(*pos).is_some_and(|cell| cell.kind == kind))
            .collect()
    }

    fn out_of_bounds(&self, row: i64, column: i64) -> Error {
        Error::OutOfBounds {
            row,
            column,
            rows: self.row_count(),
            columns: self.column_count(),
        }
    }
}
