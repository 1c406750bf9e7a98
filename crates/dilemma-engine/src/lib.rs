pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Error constructing a [`Grid`] from an external description.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum GridError {
    #[display("grid must contain at least one row and one column")]
    Empty,
    #[display("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[display("unrecognized strategy symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}
