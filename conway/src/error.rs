// error.rs - Error types for grid queries and the text board format

use thiserror::Error;

/// Contract violations raised by checked cell queries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("out of bounds index: ({row},{col})")]
    OutOfBounds { row: isize, col: isize },
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("line {line}: invalid value {value}, expected 0 or 1")]
    InvalidValue { line: usize, value: i64 },

    #[error("line {line}: token {token:?} is not an integer")]
    InvalidToken { line: usize, token: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
