//! Error types for bandnorm

use thiserror::Error;

/// Result type alias using bandnorm's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Caller contract violations detected before any entry of the band
/// buffer is read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Unrecognised norm selector
    #[error("invalid norm kind {0:?}")]
    InvalidNorm(String),

    /// Negative matrix order or diagonal count
    #[error("{name} must not be negative, got {value}")]
    NegativeDimension {
        /// Name of the parameter (`n`, `kl` or `ku`)
        name: &'static str,
        /// The value supplied
        value: i64,
    },

    /// Leading dimension smaller than the band width
    #[error("ldab {ldab} is smaller than kl + 1 + ku = {ncol}")]
    BadStride {
        /// Stride supplied
        ldab: i64,
        /// Required minimum
        ncol: usize,
    },

    /// Band buffer does not hold every stored row
    #[error("band buffer too short: need {need} entries, got {got}")]
    ShortBuffer {
        /// Required length
        need: usize,
        /// Actual length
        got: usize,
    },

    /// Workspace shorter than the matrix order
    #[error("workspace too short: need {need} entries, got {got}")]
    ShortWork {
        /// Required length
        need: usize,
        /// Actual length
        got: usize,
    },

    /// Position lies outside the band
    #[error("entry ({row}, {col}) lies outside the band")]
    OutOfBand {
        /// Row index
        row: usize,
        /// Column index
        col: usize,
    },

    /// Dense input is not square
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },
}
