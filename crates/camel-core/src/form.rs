//! # Entry Form
//!
//! Turns what the user filled in into a [`SaleRecord`].
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EntryForm (typed values from the dashboard)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  submit() ← THIS MODULE                                                │
//! │       │                                                                 │
//! │       ├── quantity < 1?            → ValidationError                   │
//! │       ├── any amount < 0?          → ValidationError                   │
//! │       ├── payment method != Debt?  → debt forced to 0                  │
//! │       ├── figures overflow?        → CoreError::AmountOutOfRange       │
//! │       │                                                                 │
//! │       └── OK → SaleRecord                                              │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │        append to RecordSet, save (dashboard)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Debt and Payment Method
//! The form keeps whatever was typed into the debt field even while the
//! payment method is not Debt, so flipping Debt → Cash → Debt does not lose
//! the amount. Only [`EntryForm::submit`] decides: a non-debt sale always
//! records zero debt.

use chrono::NaiveDate;

use crate::derive::Derived;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Expenses, Item, PaymentMethod, SaleRecord};
use crate::validation::{validate_amount, validate_quantity};

/// Values of the sales entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub date: NaiveDate,
    pub item: Item,
    pub quantity: i64,
    pub buying_price: Money,
    pub selling_price: Money,
    pub payment_method: PaymentMethod,
    /// Held as typed; only used when `payment_method` is Debt.
    pub debt: Money,
    pub transport: Money,
    pub workers: Money,
    pub slaughter: Money,
    pub other: Money,
}

impl Default for EntryForm {
    fn default() -> Self {
        EntryForm::new(NaiveDate::default())
    }
}

impl EntryForm {
    /// A blank form for a sale on `date`, with every widget at its minimum.
    pub fn new(date: NaiveDate) -> Self {
        EntryForm {
            date,
            item: Item::default(),
            quantity: crate::MIN_QUANTITY,
            buying_price: Money::zero(),
            selling_price: Money::zero(),
            payment_method: PaymentMethod::default(),
            debt: Money::zero(),
            transport: Money::zero(),
            workers: Money::zero(),
            slaughter: Money::zero(),
            other: Money::zero(),
        }
    }

    /// The debt that would be recorded right now.
    pub fn effective_debt(&self) -> Money {
        if self.payment_method.is_debt() {
            self.debt
        } else {
            Money::zero()
        }
    }

    /// Validates the minimums and builds the record.
    pub fn submit(&self) -> CoreResult<SaleRecord> {
        validate_quantity(self.quantity)?;
        validate_amount("buying price", self.buying_price)?;
        validate_amount("selling price", self.selling_price)?;
        validate_amount("debt", self.effective_debt())?;
        validate_amount("transport", self.transport)?;
        validate_amount("workers", self.workers)?;
        validate_amount("slaughter", self.slaughter)?;
        validate_amount("other expenses", self.other)?;

        let record = SaleRecord {
            date: self.date,
            item: self.item,
            quantity: self.quantity,
            buying_price: self.buying_price,
            selling_price: self.selling_price,
            payment_method: self.payment_method,
            debt: self.effective_debt(),
            expenses: Expenses {
                transport: self.transport,
                workers: self.workers,
                slaughter: self.slaughter,
                other: self.other,
            },
        };

        if Derived::checked_of(&record).is_none() {
            return Err(CoreError::AmountOutOfRange(format!(
                "{} kg at {} per kg",
                record.quantity, record.selling_price
            )));
        }

        Ok(record)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn filled_form() -> EntryForm {
        let mut form = EntryForm::new(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        form.quantity = 10;
        form.buying_price = Money::from_major(300);
        form.selling_price = Money::from_major(500);
        form.transport = Money::from_major(200);
        form.workers = Money::from_major(100);
        form.slaughter = Money::from_major(50);
        form
    }

    #[test]
    fn test_new_form_starts_at_minimums() {
        let form = EntryForm::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(form.quantity, 1);
        assert_eq!(form.payment_method, PaymentMethod::Cash);
        assert!(form.debt.is_zero());
    }

    #[test]
    fn test_submit_cash_sale() {
        let record = filled_form().submit().unwrap();
        let figures = Derived::of(&record);

        assert_eq!(figures.revenue, Money::from_major(5000));
        assert_eq!(figures.cogs, Money::from_major(3000));
        assert_eq!(figures.total_expenses, Money::from_major(350));
        assert_eq!(figures.profit, Money::from_major(1650));
    }

    #[test]
    fn test_submit_debt_sale() {
        let mut form = filled_form();
        form.payment_method = PaymentMethod::Debt;
        form.debt = Money::from_major(500);

        let record = form.submit().unwrap();
        assert_eq!(record.debt, Money::from_major(500));
        assert_eq!(Derived::of(&record).profit, Money::from_major(1150));
    }

    #[test]
    fn test_debt_forced_to_zero_after_switching_to_cash() {
        let mut form = filled_form();
        form.payment_method = PaymentMethod::Debt;
        form.debt = Money::from_major(500);
        form.payment_method = PaymentMethod::Cash;

        let record = form.submit().unwrap();
        assert!(record.debt.is_zero());
        assert_eq!(Derived::of(&record).profit, Money::from_major(1650));

        // The typed amount survives in the form itself.
        assert_eq!(form.debt, Money::from_major(500));
    }

    #[test]
    fn test_debt_forced_to_zero_for_mobile_money() {
        let mut form = filled_form();
        form.payment_method = PaymentMethod::MobileMoney;
        form.debt = Money::from_major(999);

        assert!(form.submit().unwrap().debt.is_zero());
    }

    #[test]
    fn test_negative_debt_ignored_when_not_debt() {
        let mut form = filled_form();
        form.debt = Money::from_cents(-100);
        assert!(form.submit().is_ok());

        form.payment_method = PaymentMethod::Debt;
        assert!(form.submit().is_err());
    }

    #[test]
    fn test_minimums_rejected() {
        let mut form = filled_form();
        form.quantity = 0;
        assert!(matches!(
            form.submit(),
            Err(CoreError::Validation(ValidationError::BelowMinimum { .. }))
        ));

        let mut form = filled_form();
        form.selling_price = Money::from_cents(-1);
        assert!(form.submit().is_err());

        let mut form = filled_form();
        form.other = Money::from_cents(-1);
        assert!(form.submit().is_err());
    }

    #[test]
    fn test_no_cross_field_validation() {
        let mut form = filled_form();
        form.buying_price = Money::from_major(600);
        let record = form.submit().unwrap();
        assert!(Derived::of(&record).profit.is_negative());
    }

    #[test]
    fn test_overflow_rejected() {
        let mut form = filled_form();
        form.selling_price = Money::from_cents(i64::MAX / 4);
        assert!(matches!(form.submit(), Err(CoreError::AmountOutOfRange(_))));
    }
}
