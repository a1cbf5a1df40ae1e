//! Expression syntax tree types

use gridcalc_core::Address;
use std::mem;

/// Expression AST
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaExpr {
    /// Numeric literal (a leading sign is folded in)
    Number(f64),
    /// Single cell reference
    CellRef(Address),
    /// Binary operation
    BinaryOp {
        op: BinaryOperator,
        left: Box<FormulaExpr>,
        right: Box<FormulaExpr>,
    },
}

impl FormulaExpr {
    /// Build a binary node
    pub fn binary(op: BinaryOperator, left: FormulaExpr, right: FormulaExpr) -> Self {
        FormulaExpr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

// Operator chains nest on the left, so a tree is as deep as its chain is
// long. Children are detached onto a heap stack to keep dropping iterative.
impl Drop for FormulaExpr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

fn detach_children(expr: &mut FormulaExpr, pending: &mut Vec<FormulaExpr>) {
    if let FormulaExpr::BinaryOp { left, right, .. } = expr {
        pending.push(mem::replace(left.as_mut(), FormulaExpr::Number(0.0)));
        pending.push(mem::replace(right.as_mut(), FormulaExpr::Number(0.0)));
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Apply the operator. Division by zero follows IEEE 754 (inf or NaN).
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
        }
    }
}
