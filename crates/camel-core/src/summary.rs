//! # Summary
//!
//! The five totals shown under the records table and at the end of the
//! daily report.
//!
//! An empty record set has no summary at all: [`Summary::from_records`]
//! returns `Ok(None)` rather than five zeros, and callers omit the section.

use crate::derive::Derived;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{RecordSet, SaleRecord};

/// Totals over a whole record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total_revenue: Money,
    pub total_cogs: Money,
    /// Every expense component of every record.
    pub total_expenses: Money,
    pub total_profit: Money,
    pub total_debt: Money,
}

impl Summary {
    /// Sums the derived and source columns, or `None` if there are no records.
    ///
    /// Each record fits in cents on its own, but a set of them may not:
    /// a total past the i64 cent range is `AmountOutOfRange`.
    pub fn from_records(records: &RecordSet) -> CoreResult<Option<Self>> {
        if records.is_empty() {
            return Ok(None);
        }

        records
            .iter()
            .try_fold(Summary::default(), |acc, record| acc.with_record(record))
            .map(Some)
    }

    /// These totals with one more record added.
    pub fn with_record(self, record: &SaleRecord) -> CoreResult<Self> {
        let figures = Derived::checked_of(record)
            .ok_or_else(|| CoreError::AmountOutOfRange(format!("sale of {}", record.date)))?;

        Ok(Summary {
            total_revenue: add_total("Total Revenue", self.total_revenue, figures.revenue)?,
            total_cogs: add_total("Total COGS", self.total_cogs, figures.cogs)?,
            total_expenses: add_total("Total Expenses", self.total_expenses, figures.total_expenses)?,
            total_profit: add_total("Total Profit", self.total_profit, figures.profit)?,
            total_debt: add_total("Total Debt", self.total_debt, record.debt)?,
        })
    }

    /// `(label, amount)` pairs in display order.
    pub fn lines(&self) -> [(&'static str, Money); 5] {
        [
            ("Total Revenue", self.total_revenue),
            ("Total COGS", self.total_cogs),
            ("Total Expenses", self.total_expenses),
            ("Total Profit", self.total_profit),
            ("Total Debt", self.total_debt),
        ]
    }
}

fn add_total(name: &str, total: Money, amount: Money) -> CoreResult<Money> {
    total
        .checked_add(amount)
        .ok_or_else(|| CoreError::AmountOutOfRange(name.to_string()))
}
