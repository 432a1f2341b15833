//! # Derivation Engine
//!
//! Computes the figures that follow from a record's source fields.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  revenue        = quantity × selling_price                              │
//! │  cogs           = quantity × buying_price                               │
//! │  total_expenses = transport + workers + slaughter + other               │
//! │  profit         = revenue − cogs − total_expenses − debt                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Full Recompute
//! [`derive_all`] always walks the whole record set. It is called after
//! every load, before every table render and before every export. Nothing
//! derived is cached between calls, so a stale stored column can never leak
//! into the dashboard or the report.

use crate::money::Money;
use crate::types::{RecordSet, SaleRecord};

/// Figures computed from one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Derived {
    pub revenue: Money,
    pub cogs: Money,
    pub total_expenses: Money,
    pub profit: Money,
}

impl Derived {
    /// Computes the derived figures of a single record.
    ///
    /// ## Example
    /// ```rust
    /// use camel_core::{Derived, EntryForm, Money, PaymentMethod};
    ///
    /// let mut form = EntryForm::default();
    /// form.quantity = 10;
    /// form.buying_price = Money::from_major(300);
    /// form.selling_price = Money::from_major(500);
    /// form.transport = Money::from_major(200);
    /// form.workers = Money::from_major(100);
    /// form.slaughter = Money::from_major(50);
    /// form.payment_method = PaymentMethod::Debt;
    /// form.debt = Money::from_major(500);
    ///
    /// let figures = Derived::of(&form.submit().unwrap());
    /// assert_eq!(figures.profit, Money::from_major(1150));
    /// ```
    pub fn of(record: &SaleRecord) -> Self {
        let revenue = record.selling_price.multiply_quantity(record.quantity);
        let cogs = record.buying_price.multiply_quantity(record.quantity);
        let total_expenses = record.expenses.total();
        let profit = revenue - cogs - total_expenses - record.debt;

        Derived {
            revenue,
            cogs,
            total_expenses,
            profit,
        }
    }

    /// Like [`Derived::of`], but returns `None` if any figure overflows.
    ///
    /// Used when a record enters the set (form submit, file load) so that
    /// [`Derived::of`] never overflows afterwards.
    pub fn checked_of(record: &SaleRecord) -> Option<Self> {
        let revenue = record.selling_price.checked_multiply_quantity(record.quantity)?;
        let cogs = record.buying_price.checked_multiply_quantity(record.quantity)?;
        let e = &record.expenses;
        let total_expenses = e
            .transport
            .checked_add(e.workers)?
            .checked_add(e.slaughter)?
            .checked_add(e.other)?;
        let outgoing = cogs.checked_add(total_expenses)?.checked_add(record.debt)?;
        let profit = Money::from_cents(revenue.cents().checked_sub(outgoing.cents())?);

        Some(Derived {
            revenue,
            cogs,
            total_expenses,
            profit,
        })
    }
}

/// Recomputes the derived figures for every record.
///
/// Index `i` of the result belongs to record `i` of the set.
pub fn derive_all(records: &RecordSet) -> Vec<Derived> {
    records.iter().map(Derived::of).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
