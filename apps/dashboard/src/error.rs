//! # Dashboard Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Camel Books                            │
//! │                                                                         │
//! │  Key press (Enter / Ctrl-E)                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, AppError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad input?    ─── CoreError::Validation ───────┐               │  │
//! │  │         │                                        │               │  │
//! │  │         ▼                                        ▼               │  │
//! │  │  Save failed?  ─── StoreError::Io ──────────── AppError ───────►│  │
//! │  │         │                                        ▲               │  │
//! │  │         ▼                                        │               │  │
//! │  │  PDF failed?   ─── ReportError::Pdf ────────────┘               │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Status line:  [STORAGE_ERROR] Could not save records: ...              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use camel_core::CoreError;
use camel_report::ReportError;
use camel_store::StoreError;
use thiserror::Error;

/// Error returned from dashboard commands and startup.
#[derive(Debug, Clone, Error)]
#[error("[{}] {message}", .code.as_str())]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for the status line
    pub message: String,
}

/// Error codes shown in brackets on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Form input rejected
    ValidationError,

    /// Records file could not be read or written
    StorageError,

    /// Report could not be exported
    ReportError,

    /// Config file unreadable or invalid
    ConfigError,

    /// Terminal or other unexpected failure
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ReportError => "REPORT_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl AppError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a config error.
    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ConfigError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Result type for dashboard operations.
pub type AppResult<T> = Result<T, AppError>;

/// Converts core errors to dashboard errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => AppError::validation(e.to_string()),
            CoreError::AmountOutOfRange(value) => {
                AppError::validation(format!("Amount too large: {}", value))
            }
        }
    }
}

/// Converts store errors to dashboard errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::Io(e) => {
                tracing::error!("Records file I/O failed: {}", e);
            }
            StoreError::Csv(e) => {
                tracing::error!("Records file is not valid CSV: {}", e);
            }
            StoreError::MissingValue { .. } | StoreError::InvalidValue { .. } => {
                tracing::error!("Records file has a bad row: {}", err);
            }
        }
        AppError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Converts report errors to dashboard errors.
impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        tracing::error!("Report export failed: {}", err);
        AppError::new(ErrorCode::ReportError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::internal(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camel_core::ValidationError;

    #[test]
    fn test_display_shows_code_and_message() {
        let err = AppError::validation("Quantity must be at least 1");
        assert_eq!(err.to_string(), "[VALIDATION_ERROR] Quantity must be at least 1");
    }

    #[test]
    fn test_core_error_maps_to_validation() {
        let core = CoreError::Validation(ValidationError::Required {
            field: "date".to_string(),
        });
        let err = AppError::from(core);
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_store_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = AppError::from(StoreError::Io(io));
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.to_string().starts_with("[STORAGE_ERROR]"));
    }

    #[test]
    fn test_report_error_maps_to_report() {
        let err = AppError::from(ReportError::Pdf("bad font".into()));
        assert_eq!(err.code, ErrorCode::ReportError);
        assert!(err.message.contains("bad font"));
    }
}
