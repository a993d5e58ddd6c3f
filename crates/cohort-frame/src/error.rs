//! Error types for cohort-frame.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Invalid column: {0}")]
    InvalidColumn(String),

    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Column {column} must have exactly 2 distinct values, found: {found:?}")]
    NotBinary { column: String, found: Vec<String> },
}

pub type Result<T> = std::result::Result<T, Error>;
