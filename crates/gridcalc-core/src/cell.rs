//! Cell types

use std::fmt;

/// The kind of content held by a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    /// Blank or unclassifiable text
    #[default]
    Empty,
    /// Text containing at least one uppercase letter
    Text,
    /// Number, stored as text rendered with the active number format
    Number,
    /// Arithmetic expression (content keeps the leading `=`)
    Expression,
    /// Clone directive such as `:^`
    Clone,
}

impl CellKind {
    /// Get the kind name
    pub fn name(&self) -> &'static str {
        match self {
            CellKind::Empty => "Empty",
            CellKind::Text => "Text",
            CellKind::Number => "Number",
            CellKind::Expression => "Expression",
            CellKind::Clone => "Clone",
        }
    }

    /// Whether the pipeline is finished with cells of this kind
    pub fn is_terminal(&self) -> bool {
        !matches!(self, CellKind::Expression | CellKind::Clone)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single grid cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    /// Display text (formatted number for Number cells, source text otherwise)
    pub content: String,
    /// Classified kind
    pub kind: CellKind,
}

impl Cell {
    /// Create a cell with the given content and kind
    pub fn new(content: impl Into<String>, kind: CellKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    /// Create an empty cell
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a text cell
    pub fn text(content: impl Into<String>) -> Self {
        Self::new(content, CellKind::Text)
    }

    /// Create a number cell from already formatted text
    pub fn number(content: impl Into<String>) -> Self {
        Self::new(content, CellKind::Number)
    }

    /// Create an expression cell (`content` includes the leading `=`)
    pub fn expression(content: impl Into<String>) -> Self {
        Self::new(content, CellKind::Expression)
    }

    /// Create a clone directive cell
    pub fn clone_directive(content: impl Into<String>) -> Self {
        Self::new(content, CellKind::Clone)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
