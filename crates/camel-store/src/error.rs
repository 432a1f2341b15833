//! # Store Error Types
//!
//! Error types for records file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / csv::Error / bad cell                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds row and column context                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in dashboard) ← Shown on the status line                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Records file errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the file failed.
    ///
    /// ## When This Occurs
    /// - File permissions issue
    /// - Disk full
    /// - Parent directory cannot be created
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV layer rejected the file.
    ///
    /// ## When This Occurs
    /// - Unterminated quotes
    /// - Invalid UTF-8
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row has no value for a column that cannot be zero-filled.
    #[error("Row {row}: missing {column}")]
    MissingValue { row: usize, column: &'static str },

    /// A cell could not be parsed.
    #[error("Row {row}: invalid {column} '{value}': {reason}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },
}

impl StoreError {
    /// Creates an InvalidValue error.
    pub fn invalid(
        row: usize,
        column: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        StoreError::InvalidValue {
            row,
            column,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
