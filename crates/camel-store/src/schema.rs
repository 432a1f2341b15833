//! # Records File Schema
//!
//! The fixed column order and the row types that cross the CSV boundary.
//!
//! ## Normalization on Read
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Older file (no expense columns)         Normalized SaleRecord         │
//! │  ───────────────────────────────         ─────────────────────         │
//! │  Date        2025-03-14            →     date       2025-03-14         │
//! │  Item        Camel Meat            →     item       Meat               │
//! │  Quantity    10                    →     quantity   10                 │
//! │  Buying ..   300                   →     buying     300                │
//! │  Selling ..  500                   →     selling    500                │
//! │  (absent)                          →     transport  0                  │
//! │  (absent)                          →     workers    0                  │
//! │  (absent)                          →     ...        0                  │
//! │  Profit      5000  (stale)         →     (ignored, recomputed)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every cell is read as an optional string so that absent columns and blank
//! cells take the same path: zero for numbers, the first variant for enums.
//! `Date` is the only column without a fallback.

use std::str::FromStr;

use camel_core::{Derived, Expenses, Item, Money, PaymentMethod, SaleRecord};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Header row, in the order columns are written.
pub const COLUMNS: [&str; 15] = [
    "Date",
    "Item",
    "Quantity",
    "Buying Price",
    "Selling Price",
    "Revenue",
    "COGS",
    "Profit",
    "Payment Method",
    "Debt",
    "Transport",
    "Workers",
    "Slaughter",
    "Other Expenses",
    "Total Expenses",
];

/// Date format written to the file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date formats accepted on read, tried in order.
const DATE_FORMATS: [&str; 2] = [DATE_FORMAT, "%Y/%m/%d"];
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Stored Row (read side)
// =============================================================================

/// One row as found on disk. Any column may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoredRow {
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "Item", default)]
    pub item: Option<String>,
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<String>,
    #[serde(rename = "Buying Price", default)]
    pub buying_price: Option<String>,
    #[serde(rename = "Selling Price", default)]
    pub selling_price: Option<String>,
    #[serde(rename = "Revenue", default)]
    pub revenue: Option<String>,
    #[serde(rename = "COGS", default)]
    pub cogs: Option<String>,
    #[serde(rename = "Profit", default)]
    pub profit: Option<String>,
    #[serde(rename = "Payment Method", default)]
    pub payment_method: Option<String>,
    #[serde(rename = "Debt", default)]
    pub debt: Option<String>,
    #[serde(rename = "Transport", default)]
    pub transport: Option<String>,
    #[serde(rename = "Workers", default)]
    pub workers: Option<String>,
    #[serde(rename = "Slaughter", default)]
    pub slaughter: Option<String>,
    #[serde(rename = "Other Expenses", default)]
    pub other_expenses: Option<String>,
    #[serde(rename = "Total Expenses", default)]
    pub total_expenses: Option<String>,
}

/// A parsed row plus whether its stored derived columns disagreed with the
/// recomputed figures.
#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub record: SaleRecord,
    pub stale: bool,
}

impl StoredRow {
    /// Normalizes the row into a record. `row` is the 1-based data row number.
    pub fn into_record(self, row: usize) -> StoreResult<ParsedRow> {
        let record = SaleRecord {
            date: parse_date(row, self.date.as_deref())?,
            item: parse_enum::<Item>(row, "Item", self.item.as_deref())?,
            quantity: parse_quantity(row, self.quantity.as_deref())?,
            buying_price: parse_money(row, "Buying Price", self.buying_price.as_deref())?,
            selling_price: parse_money(row, "Selling Price", self.selling_price.as_deref())?,
            payment_method: parse_enum::<PaymentMethod>(
                row,
                "Payment Method",
                self.payment_method.as_deref(),
            )?,
            debt: parse_money(row, "Debt", self.debt.as_deref())?,
            expenses: Expenses {
                transport: parse_money(row, "Transport", self.transport.as_deref())?,
                workers: parse_money(row, "Workers", self.workers.as_deref())?,
                slaughter: parse_money(row, "Slaughter", self.slaughter.as_deref())?,
                other: parse_money(row, "Other Expenses", self.other_expenses.as_deref())?,
            },
        };

        let figures = Derived::checked_of(&record).ok_or_else(|| {
            StoreError::invalid(
                row,
                "Revenue",
                format!("{} x {}", record.quantity, record.selling_price),
                "amount out of range",
            )
        })?;

        let stale = is_stale(&self.revenue, figures.revenue)
            || is_stale(&self.cogs, figures.cogs)
            || is_stale(&self.profit, figures.profit)
            || is_stale(&self.total_expenses, figures.total_expenses);

        Ok(ParsedRow { record, stale })
    }
}

/// Absent, blank, unparseable or different stored values all count as stale.
fn is_stale(stored: &Option<String>, actual: Money) -> bool {
    match non_blank(stored.as_deref()) {
        Some(text) => Money::from_str(text).map(|m| m != actual).unwrap_or(true),
        None => true,
    }
}

// =============================================================================
// Output Row (write side)
// =============================================================================

/// One row as written to disk, derived columns filled from the record.
#[derive(Debug, Clone, Serialize)]
pub struct OutRow {
    date: String,
    item: &'static str,
    quantity: i64,
    buying_price: String,
    selling_price: String,
    revenue: String,
    cogs: String,
    profit: String,
    payment_method: &'static str,
    debt: String,
    transport: String,
    workers: String,
    slaughter: String,
    other_expenses: String,
    total_expenses: String,
}

impl OutRow {
    pub fn from_record(record: &SaleRecord) -> Self {
        let figures = Derived::of(record);
        OutRow {
            date: record.date.format(DATE_FORMAT).to_string(),
            item: record.item.label(),
            quantity: record.quantity,
            buying_price: record.buying_price.to_string(),
            selling_price: record.selling_price.to_string(),
            revenue: figures.revenue.to_string(),
            cogs: figures.cogs.to_string(),
            profit: figures.profit.to_string(),
            payment_method: record.payment_method.label(),
            debt: record.debt.to_string(),
            transport: record.expenses.transport.to_string(),
            workers: record.expenses.workers.to_string(),
            slaughter: record.expenses.slaughter.to_string(),
            other_expenses: record.expenses.other.to_string(),
            total_expenses: figures.total_expenses.to_string(),
        }
    }
}

// =============================================================================
// Cell Parsers
// =============================================================================

fn non_blank(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|s| !s.is_empty())
}

/// Parses a date cell. There is no fallback for a missing date.
pub fn parse_date(row: usize, cell: Option<&str>) -> StoreResult<NaiveDate> {
    let text = non_blank(cell).ok_or(StoreError::MissingValue {
        row,
        column: "Date",
    })?;

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, DATETIME_FORMAT)
                .ok()
                .map(|dt| dt.date())
        })
        .ok_or_else(|| StoreError::invalid(row, "Date", text, "expected YYYY-MM-DD"))
}

/// Parses a quantity cell. Blank is zero; `10.0` is accepted as 10.
pub fn parse_quantity(row: usize, cell: Option<&str>) -> StoreResult<i64> {
    let Some(text) = non_blank(cell) else {
        return Ok(0);
    };

    let value = Decimal::from_str(text)
        .map_err(|e| StoreError::invalid(row, "Quantity", text, e.to_string()))?;
    if !value.fract().is_zero() {
        return Err(StoreError::invalid(
            row,
            "Quantity",
            text,
            "must be a whole number of kg",
        ));
    }
    value
        .to_i64()
        .ok_or_else(|| StoreError::invalid(row, "Quantity", text, "out of range"))
}

/// Parses an amount cell. Blank is zero.
pub fn parse_money(row: usize, column: &'static str, cell: Option<&str>) -> StoreResult<Money> {
    match non_blank(cell) {
        Some(text) => {
            Money::from_str(text).map_err(|e| StoreError::invalid(row, column, text, e.to_string()))
        }
        None => Ok(Money::zero()),
    }
}

/// Parses an enumerated cell. Blank takes the first variant.
pub fn parse_enum<T>(row: usize, column: &'static str, cell: Option<&str>) -> StoreResult<T>
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match non_blank(cell) {
        Some(text) => T::from_str(text).map_err(|e| StoreError::invalid(row, column, text, e.to_string())),
        None => Ok(T::default()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
