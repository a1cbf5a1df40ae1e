//! Reference shifting for copied expressions
//!
//! When an expression is copied into a neighbouring cell, every reference
//! token in its text moves by the same (rows, columns) step. Tokens are found
//! in one left-to-right pass and each is rewritten exactly once, so a token
//! produced by a rewrite is never shifted again. A token must start at a word
//! boundary, so the exponent of a literal such as `1E5` is left alone.

use crate::error::FormulaResult;
use gridcalc_core::Address;
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

fn reference_re() -> &'static Regex {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    REFERENCE_RE.get_or_init(|| {
        Regex::new(r"\b[A-Z][0-9]+").expect("reference regex must compile")
    })
}

/// Shift every cell reference in `formula` by `rows` and `columns`.
///
/// Text between references is kept byte for byte. Moving a reference above
/// row 0 or outside `A..Z` fails with an out-of-bounds error.
///
/// # Example
/// ```rust
/// use gridcalc_formula::shift_references;
///
/// assert_eq!(shift_references("=A1+B1", 1, 0).unwrap(), "=A2+B2");
/// assert_eq!(shift_references("=A1*(B2-2)", 0, 1).unwrap(), "=B1*(C2-2)");
/// assert!(shift_references("=Z1", 0, 1).is_err());
/// ```
pub fn shift_references(formula: &str, rows: i64, columns: i64) -> FormulaResult<String> {
    let mut shifted = String::with_capacity(formula.len());
    let mut last = 0;

    for token in reference_re().find_iter(formula) {
        let moved = Address::parse(token.as_str())?.offset(rows, columns)?;
        trace!(from = token.as_str(), to = %moved, "shifted reference");

        shifted.push_str(&formula[last..token.start()]);
        shifted.push_str(&moved.to_string());
        last = token.end();
    }

    shifted.push_str(&formula[last..]);
    Ok(shifted)
}
