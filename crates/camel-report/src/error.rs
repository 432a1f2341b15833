//! # Report Error Types

use camel_core::CoreError;
use thiserror::Error;

/// Report export errors.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Creating the report file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The summary totals could not be computed.
    #[error("Cannot total records: {0}")]
    Totals(#[from] CoreError),

    /// The PDF library rejected the document.
    #[error("PDF error: {0}")]
    Pdf(String),
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
