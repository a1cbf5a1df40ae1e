//! Expression evaluator
//!
//! Evaluates expression ASTs against a grid. References resolve to the
//! referenced cell's formatted content, parsed back to a float.

use crate::ast::FormulaExpr;
use crate::error::{FormulaError, FormulaResult};
use gridcalc_core::{Address, CellKind, Grid};

/// Context for expression evaluation
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext<'a> {
    /// Grid that references resolve against
    pub grid: &'a Grid,
}

impl<'a> EvaluationContext<'a> {
    /// Create a context over a grid
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Resolve a reference to the numeric value of the cell it names
    pub fn resolve(&self, address: &Address) -> FormulaResult<f64> {
        let cell = self
            .grid
            .lookup(address)
            .map_err(|source| FormulaError::InvalidReference {
                reference: address.to_string(),
                source,
            })?;

        match cell.kind {
            CellKind::Number => {
                cell.content
                    .trim()
                    .parse()
                    .map_err(|_| FormulaError::UnparsableNumber {
                        reference: address.to_string(),
                        content: cell.content.clone(),
                    })
            }
            kind => Err(FormulaError::TypeMismatch {
                reference: address.to_string(),
                kind,
            }),
        }
    }
}

/// Evaluate an expression
///
/// # Example
/// ```rust
/// use gridcalc_core::{classify_row, Grid, NumberFormat};
/// use gridcalc_formula::{evaluate, parse_formula, EvaluationContext};
///
/// let fmt = NumberFormat::default();
/// let grid = Grid::new(vec![classify_row(["1", "2"], &fmt)]);
/// let ast = parse_formula("=(A0+B0)*2").unwrap();
/// assert_eq!(evaluate(&ast, &EvaluationContext::new(&grid)).unwrap(), 6.0);
/// ```
pub fn evaluate(expr: &FormulaExpr, ctx: &EvaluationContext<'_>) -> FormulaResult<f64> {
    // Walk the left spine in a loop; only right operands recurse, and those
    // nest only through parentheses.
    let mut pending = Vec::new();
    let mut node = expr;
    let first = loop {
        match node {
            FormulaExpr::Number(n) => break *n,
            FormulaExpr::CellRef(address) => break ctx.resolve(address)?,
            FormulaExpr::BinaryOp { op, left, right } => {
                pending.push((*op, right.as_ref()));
                node = left.as_ref();
            }
        }
    };

    pending
        .into_iter()
        .rev()
        .try_fold(first, |acc, (op, right)| -> FormulaResult<f64> {
            Ok(op.apply(acc, evaluate(right, ctx)?))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_formula;
    use gridcalc_core::{classify_row, Cell, NumberFormat};

    fn grid() -> Grid {
        let fmt = NumberFormat::default();
        Grid::new(vec![
            classify_row(["Name", "", "=A1"], &fmt),
            classify_row(["1", "2", "x"], &fmt),
            classify_row(["0", "-4.5", ":^"], &fmt),
        ])
    }

    fn eval(formula: &str) -> FormulaResult<f64> {
        let grid = grid();
        evaluate(&parse_formula(formula)?, &EvaluationContext::new(&grid))
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("=1+2*3").unwrap(), 7.0);
        assert_eq!(eval("=(1+2)*3").unwrap(), 9.0);
        assert_eq!(eval("=8-2-1").unwrap(), 5.0);
        assert_eq!(eval("=8/2/2").unwrap(), 2.0);
        assert_eq!(eval("=2*-3").unwrap(), -6.0);
    }

    #[test]
    fn test_long_chain() {
        let formula = format!("={}", vec!["1"; 100_000].join("+"));
        assert_eq!(eval(&formula).unwrap(), 100_000.0);

        let formula = format!("=0{}", "-B1*2".repeat(100_000));
        assert_eq!(eval(&formula).unwrap(), -400_000.0);
    }

    #[test]
    fn test_errors_follow_left_to_right_order() {
        match eval("=A0+B0") {
            Err(FormulaError::TypeMismatch { reference, .. }) => assert_eq!(reference, "A0"),
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
        match eval("=1+2*3-B0") {
            Err(FormulaError::TypeMismatch { reference, .. }) => assert_eq!(reference, "B0"),
            other => panic!("expected TypeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_references() {
        assert_eq!(eval("=A1+B1").unwrap(), 3.0);
        assert_eq!(eval("=B2*2").unwrap(), -9.0);
        assert_eq!(eval("=(A1+B1)/B1").unwrap(), 1.5);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("=1/A2").unwrap(), f64::INFINITY);
        assert_eq!(eval("=-1/0").unwrap(), f64::NEG_INFINITY);
        assert!(eval("=A2/0").unwrap().is_nan());
    }

    #[test]
    fn test_type_mismatch() {
        let cases = [
            ("=A0", CellKind::Text),
            ("=B0", CellKind::Empty),
            ("=C1", CellKind::Empty),
            ("=C0", CellKind::Expression),
            ("=C2", CellKind::Clone),
        ];
        for (formula, expected) in cases {
            match eval(formula) {
                Err(FormulaError::TypeMismatch { kind, .. }) => assert_eq!(kind, expected),
                other => panic!("expected TypeMismatch for {}, got {:?}", formula, other),
            }
        }
    }

    #[test]
    fn test_out_of_bounds_reference() {
        match eval("=A9") {
            Err(FormulaError::InvalidReference { reference, source }) => {
                assert_eq!(reference, "A9");
                assert!(source.is_out_of_bounds());
            }
            other => panic!("expected InvalidReference, got {:?}", other),
        }
        assert!(matches!(eval("=D0"), Err(FormulaError::InvalidReference { .. })));
    }

    #[test]
    fn test_unparsable_number() {
        let grid = Grid::new(vec![vec![Cell::number("$1.00")]]);
        let ast = parse_formula("=A0").unwrap();
        let err = evaluate(&ast, &EvaluationContext::new(&grid)).unwrap_err();
        assert!(matches!(err, FormulaError::UnparsableNumber { .. }));
    }

    #[test]
    fn test_non_finite_cells() {
        let grid = Grid::new(vec![vec![Cell::number("+Inf"), Cell::number("NaN")]]);
        let ctx = EvaluationContext::new(&grid);
        assert_eq!(evaluate(&parse_formula("=A0").unwrap(), &ctx).unwrap(), f64::INFINITY);
        assert!(evaluate(&parse_formula("=B0+1").unwrap(), &ctx).unwrap().is_nan());
    }
}
