//! Cell classification
//!
//! Turns raw delimited fields into typed [`Cell`]s. The first matching rule
//! wins:
//!
//! 1. `=...` is an expression (content keeps the `=`)
//! 2. `:...` is a clone directive (validated later, when it is resolved)
//! 3. anything `f64` parses is a number, re-rendered with the number format
//! 4. text with an uppercase ASCII letter is text
//! 5. everything else is empty

use crate::cell::{Cell, CellKind};
use crate::number_format::NumberFormat;

/// Classify a single field. Surrounding whitespace is trimmed first.
///
/// # Examples
/// ```
/// use gridcalc_core::{classify, CellKind, NumberFormat};
///
/// let fmt = NumberFormat::default();
/// assert_eq!(classify(" 3 ", &fmt).content, "3.00");
/// assert_eq!(classify("=A1+B1", &fmt).kind, CellKind::Expression);
/// assert_eq!(classify("hello", &fmt).kind, CellKind::Empty);
/// ```
pub fn classify(field: &str, format: &NumberFormat) -> Cell {
    let text = field.trim();

    if text.starts_with('=') {
        return Cell::expression(text);
    }

    if text.starts_with(':') {
        return Cell::clone_directive(text);
    }

    if let Ok(value) = text.parse::<f64>() {
        return Cell::number(format.format(value));
    }

    if text.chars().any(|c| c.is_ascii_uppercase()) {
        return Cell::text(text);
    }

    Cell::new(text, CellKind::Empty)
}

/// Classify every field of a row
pub fn classify_row<'a, I>(fields: I, format: &NumberFormat) -> Vec<Cell>
where
    I: IntoIterator<Item = &'a str>,
{
    fields
        .into_iter()
        .map(|field| classify(field, format))
        .collect()
}
