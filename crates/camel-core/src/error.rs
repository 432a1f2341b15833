//! # Error Types
//!
//! Domain-specific error types for camel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  camel-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  camel-store errors (separate crate)                                   │
//! │  └── StoreError       - Records file failures                          │
//! │                                                                         │
//! │  camel-report errors (separate crate)                                  │
//! │  └── ReportError      - PDF export failures                            │
//! │                                                                         │
//! │  Dashboard errors (in app)                                             │
//! │  └── AppError         - What the status line shows                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Status line            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the field name in every validation message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An amount could not be represented in cents.
    ///
    /// ## When This Occurs
    /// - Decimal text far beyond the i64 cent range
    /// - Quantity × price overflowing i64 cents
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the minimums of the entry form widgets. There is no
/// cross-field validation: selling below the buying price is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be at least the given minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: String },

    /// Invalid format (e.g., unparseable amount or date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Creates an InvalidFormat error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "date".to_string(),
        };
        assert_eq!(err.to_string(), "date is required");

        let err = ValidationError::BelowMinimum {
            field: "quantity".to_string(),
            min: "1".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be at least 1");

        let err = ValidationError::invalid_format("buying price", "not a number");
        assert_eq!(
            err.to_string(),
            "buying price has invalid format: not a number"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "item".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: item is required");
    }
}
