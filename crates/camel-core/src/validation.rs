//! # Validation Module
//!
//! Field validators for the entry form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard form (TUI)                                         │
//! │  ├── Up/Down nudges never go below the field minimum                   │
//! │  └── Text is parsed into Money / i64                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── quantity >= 1                                                     │
//! │  └── every amount >= 0                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Nothing else. Selling below cost is a valid (losing) sale.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use camel_core::money::Money;
//! use camel_core::validation::{validate_amount, validate_quantity};
//!
//! validate_quantity(5).unwrap();
//! validate_amount("transport", Money::from_major(200)).unwrap();
//! assert!(validate_amount("transport", Money::from_cents(-1)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MIN_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a quantity in kg.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < MIN_QUANTITY {
        return Err(ValidationError::BelowMinimum {
            field: "quantity".to_string(),
            min: MIN_QUANTITY.to_string(),
        });
    }

    Ok(())
}

/// Validates a price, debt or expense amount.
///
/// ## Rules
/// - Must be non-negative; zero is allowed
pub fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::BelowMinimum {
            field: field.to_string(),
            min: "0".to_string(),
        });
    }

    Ok(())
}

/// Parses a quantity typed into the form.
///
/// ## Example
/// ```rust
/// use camel_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
/// assert!(parse_quantity("1.5").is_err());
/// assert!(parse_quantity("0").is_err());
/// ```
pub fn parse_quantity(text: &str) -> ValidationResult<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty = text
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_format("quantity", "must be a whole number of kg"))?;
    validate_quantity(qty)?;
    Ok(qty)
}

// =============================================================================
// Unit Tests
// =============================================================================
