//! # camel-core: Pure Business Logic for Camel Books
//!
//! This crate is the **heart** of Camel Books. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Camel Books Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal Dashboard (ratatui)                   │   │
//! │  │      Entry Form ──► Records Table ──► Metrics ──► Export        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ camel-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐         │   │
//! │  │   │  types   │ │  derive  │ │   form   │ │ summary  │         │   │
//! │  │   │  Record  │ │ Derived  │ │EntryForm │ │ Summary  │         │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘         │   │
//! │  │         ┌──────────┐ ┌────────────┐ ┌──────────┐              │   │
//! │  │         │  money   │ │ validation │ │  error   │              │   │
//! │  │         └──────────┘ └────────────┘ └──────────┘              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │           ┌────────────────────┴──────────────────┐                    │
//! │           ▼                                       ▼                    │
//! │  ┌──────────────────┐                  ┌──────────────────┐            │
//! │  │   camel-store    │                  │   camel-report   │            │
//! │  │   (CSV file)     │                  │   (PDF file)     │            │
//! │  └──────────────────┘                  └──────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (SaleRecord, Item, PaymentMethod, RecordSet)
//! - [`money`] - Money type with integer arithmetic
//! - [`derive`] - Derived figures (revenue, COGS, expenses, profit)
//! - [`form`] - Entry form rules (minimums, debt coercion)
//! - [`summary`] - Aggregate metrics over a record set
//! - [`validation`] - Field validators
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same records in, same figures out
//! 2. **No I/O**: file and terminal access is FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64)
//! 4. **Derived, never stored**: a record holds source fields only
//!
//! ## Example Usage
//!
//! ```rust
//! use camel_core::{Derived, EntryForm, Money, PaymentMethod};
//!
//! let mut form = EntryForm::default();
//! form.quantity = 10;
//! form.buying_price = Money::from_major(300);
//! form.selling_price = Money::from_major(500);
//! form.payment_method = PaymentMethod::Cash;
//!
//! let record = form.submit().unwrap();
//! let figures = Derived::of(&record);
//! assert_eq!(figures.revenue, Money::from_major(5000));
//! assert_eq!(figures.profit, Money::from_major(2000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod derive;
pub mod error;
pub mod form;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use derive::{derive_all, Derived};
pub use error::{CoreError, CoreResult, ValidationError};
pub use form::EntryForm;
pub use money::Money;
pub use summary::Summary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Unit label appended to displayed amounts when nothing else is configured.
pub const DEFAULT_CURRENCY_LABEL: &str = "KES";

/// Step used by the entry form to nudge money fields up and down.
///
/// This is a UI convenience only; any non-negative amount is accepted.
pub const MONEY_STEP: Money = Money::from_major(50);

/// Smallest quantity (kg) a sale can record.
pub const MIN_QUANTITY: i64 = 1;
