//! Error types for spreadsheet normalization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading, normalizing or writing a spreadsheet.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Input is not a readable spreadsheet.
    #[error("cannot read spreadsheet {path}: {message}")]
    MalformedInput { path: PathBuf, message: String },

    /// A column the pipeline always accesses is absent.
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },

    /// Configuration file could not be read or parsed.
    #[error("invalid configuration {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Output workbook could not be written.
    #[error("cannot write spreadsheet {path}: {message}")]
    Write { path: PathBuf, message: String },
}

impl NormalizeError {
    pub fn missing_column(column: &str) -> Self {
        Self::MissingColumn {
            column: column.to_string(),
        }
    }
}

/// Result alias for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;
