//! Grid calculation pipeline
//!
//! Runs the two in-place passes over a classified grid: clone resolution,
//! then expression evaluation. Each pass walks the grid once in row-major
//! order and the first failure aborts the whole calculation.
//!
//! # Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut grid = GridReader::read_str("A|B|C\n1|2|3\n=A1+B1|:<|x", &ReadOptions::default()).unwrap();
//!
//! let stats = grid.calculate().unwrap();
//! assert_eq!(stats.clones_resolved, 1);
//! assert_eq!(stats.formulas_evaluated, 2);
//! assert_eq!(grid.row(2).unwrap()[1].content, "5.00");
//! ```

use crate::error::{Error, Result};
use gridcalc_core::{Cell, CellKind, Grid, NumberFormat};
use gridcalc_formula::{evaluate, parse_formula, EvaluationContext};
use tracing::{debug, trace};

/// Options for grid calculation
#[derive(Debug, Clone, Default)]
pub struct CalculationOptions {
    /// Format expression results are rendered with (default: `%.2f`)
    pub number_format: NumberFormat,
}

/// Statistics from a calculation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculationStats {
    /// Number of clone directives replaced
    pub clones_resolved: usize,
    /// Number of expressions evaluated
    pub formulas_evaluated: usize,
}

/// Extension trait for Grid to add calculation methods
pub trait GridCalculationExt {
    /// Replace every clone directive with a copy of its neighbour
    fn resolve_clones(&mut self) -> Result<usize>;

    /// Evaluate every expression, replacing it with a formatted number
    fn evaluate_formulas(&mut self, format: &NumberFormat) -> Result<usize>;

    /// Run both passes with default options
    fn calculate(&mut self) -> Result<CalculationStats>;

    /// Run both passes with custom options
    fn calculate_with_options(&mut self, options: &CalculationOptions) -> Result<CalculationStats>;
}

impl GridCalculationExt for Grid {
    fn resolve_clones(&mut self) -> Result<usize> {
        crate::clone::resolve_clones(self)
    }

    fn evaluate_formulas(&mut self, format: &NumberFormat) -> Result<usize> {
        let mut evaluated = 0;

        for position in self.positions() {
            let Some(cell) = self.get(position) else {
                continue;
            };

            match cell.kind {
                CellKind::Clone => return Err(Error::UnresolvedClone(position)),
                CellKind::Expression => {
                    let ctx = EvaluationContext::new(self);
                    let value = parse_formula(&cell.content)
                        .and_then(|ast| evaluate(&ast, &ctx))
                        .map_err(|source| Error::Evaluation { position, source })?;

                    let rendered = format.format(value);
                    trace!(%position, formula = %cell.content, result = %rendered, "evaluated");

                    self.set(position, Cell::number(rendered));
                    evaluated += 1;
                }
                CellKind::Empty | CellKind::Text | CellKind::Number => {}
            }
        }

        debug!(evaluated, "evaluated expressions");
        Ok(evaluated)
    }

    fn calculate(&mut self) -> Result<CalculationStats> {
        self.calculate_with_options(&CalculationOptions::default())
    }

    fn calculate_with_options(&mut self, options: &CalculationOptions) -> Result<CalculationStats> {
        let clones_resolved = self.resolve_clones()?;
        let formulas_evaluated = self.evaluate_formulas(&options.number_format)?;

        Ok(CalculationStats {
            clones_resolved,
            formulas_evaluated,
        })
    }
}
