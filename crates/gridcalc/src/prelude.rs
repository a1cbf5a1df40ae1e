//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    // Calculation types
    CalculationOptions,
    CalculationStats,
    // Cell types
    Cell,
    CellKind,
    // Error types
    Error,
    // Main types
    Grid,
    // Extension traits
    GridCalculationExt,
    // I/O types
    GridReader,
    GridWriter,
    NumberFormat,
    Position,
    ReadOptions,
    Result,
    WriteOptions,
};
