//! Clone directive resolution
//!
//! A clone cell (`:^`, `:>`, `:v`, `:<`) is replaced by a copy of its
//! neighbour in the given direction. Copied expressions have their references
//! shifted one step away from the source, so `=A1+B1` cloned downwards with
//! `:^` becomes `=A2+B2`.
//!
//! Clones are resolved in place, in one row-major pass. A clone whose source
//! is an earlier clone sees the already resolved copy; a clone whose source is
//! a later clone copies the directive itself, which the evaluation pass then
//! reports as unresolved.

use crate::error::{Error, Result};
use gridcalc_core::{Cell, CellKind, Direction, Error as CoreError, Grid, Position};
use gridcalc_formula::shift_references;
use tracing::{debug, trace};

/// Replace every clone directive in the grid. Returns the number resolved.
pub fn resolve_clones(grid: &mut Grid) -> Result<usize> {
    let mut resolved = 0;

    for position in grid.positions_of(CellKind::Clone) {
        let copy = resolve_clone(grid, position)?;
        grid.set(position, copy);
        resolved += 1;
    }

    debug!(resolved, "resolved clone directives");
    Ok(resolved)
}

/// Build the cell that replaces the clone directive at `position`
fn resolve_clone(grid: &Grid, position: Position) -> Result<Cell> {
    let content = grid
        .get(position)
        .map(|cell| cell.content.as_str())
        .unwrap_or_default();

    let direction = Direction::from_clone(content).ok_or_else(|| CoreError::MalformedClone {
        position,
        content: content.to_string(),
    })?;

    let (rows, columns) = direction.offset();
    let source = grid
        .neighbor(position, rows, columns)
        .map_err(|e| Error::Clone {
            position,
            source: e.into(),
        })?;

    let copy = match source.kind {
        CellKind::Expression => {
            let (rows, columns) = direction.reference_shift();
            let shifted = shift_references(&source.content, rows, columns)
                .map_err(|source| Error::Clone { position, source })?;
            Cell::expression(shifted)
        }
        _ => source.clone(),
    };

    trace!(
        %position,
        direction = %direction.as_char(),
        from = %source.content,
        to = %copy.content,
        "resolved clone"
    );

    Ok(copy)
}
