use std::collections::TryReserveError;

use thiserror::Error;

/// Errors produced by matrix construction and element access.
///
/// The messages are the user-facing strings surfaced to the host runtime;
/// the binding layer passes them through unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("invalid number of rows")]
    InvalidRows,

    #[error("invalid number of columns")]
    InvalidCols,

    #[error("invalid dimension")]
    InvalidDimension,

    #[error("invalid row index")]
    InvalidRowIndex,

    #[error("invalid column index")]
    InvalidColIndex,

    #[error("buffer length ({got}) does not match dimensions ({n_rows}x{n_cols})")]
    ShapeMismatch {
        n_rows: usize,
        n_cols: usize,
        got: usize,
    },

    #[error("insufficient memory")]
    InsufficientMemory,
}

impl From<TryReserveError> for MatrixError {
    fn from(_: TryReserveError) -> Self {
        MatrixError::InsufficientMemory
    }
}
