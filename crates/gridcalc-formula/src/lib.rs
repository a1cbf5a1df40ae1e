//! # gridcalc-formula
//!
//! Expression parser and evaluator for gridcalc.
//!
//! This crate provides:
//! - Expression parsing (text → AST) for `+ - * /`, parentheses, numeric
//!   literals and single-cell references
//! - Expression evaluation (AST → `f64`) against a [`Grid`](gridcalc_core::Grid)
//! - Reference shifting for expressions copied by clone directives
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{classify_row, Grid, NumberFormat};
//! use gridcalc_formula::{evaluate, parse_formula, EvaluationContext};
//!
//! let fmt = NumberFormat::default();
//! let grid = Grid::new(vec![
//!     classify_row(["A", "B"], &fmt),
//!     classify_row(["1", "2"], &fmt),
//! ]);
//!
//! let ast = parse_formula("=A1+B1").unwrap();
//! let result = evaluate(&ast, &EvaluationContext::new(&grid)).unwrap();
//! assert_eq!(result, 3.0);
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod shift;

pub use ast::{BinaryOperator, FormulaExpr};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, EvaluationContext};
pub use parser::{parse_formula, MAX_NESTING_DEPTH};
pub use shift::shift_references;
