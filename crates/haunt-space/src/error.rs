//! Error types for grid construction.

use haunt_core::Cell;
use std::fmt;

/// Errors arising from occupancy-grid construction or mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid,
    /// A dimension exceeds what an `i32` coordinate can address.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value, saturated into `u32`.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// Rows of the input do not all have the same length.
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A numeric occupancy code is not one of 0–3.
    UnknownCode {
        /// The offending code.
        code: u8,
        /// Where it appeared.
        cell: Cell,
    },
    /// An ASCII symbol is not one of `. # P G`.
    UnknownSymbol {
        /// The offending symbol.
        symbol: char,
        /// Where it appeared.
        cell: Cell,
    },
    /// A cell lies outside the grid.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::UnknownCode { code, cell } => {
                write!(f, "unknown occupancy code {code} at {cell}")
            }
            Self::UnknownSymbol { symbol, cell } => {
                write!(f, "unknown occupancy symbol {symbol:?} at {cell}")
            }
            Self::CellOutOfBounds {
                cell,
                width,
                height,
            } => write!(f, "cell {cell} out of bounds: [0, {width}) x [0, {height})"),
        }
    }
}

impl std::error::Error for GridError {}
