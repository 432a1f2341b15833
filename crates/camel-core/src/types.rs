//! # Domain Types
//!
//! Core domain types used throughout Camel Books.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   RecordSet     │   │   SaleRecord    │   │    Expenses     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Vec<SaleRecord>│──►│  date           │──►│  transport      │       │
//! │  │  append-only    │   │  item           │   │  workers        │       │
//! │  │  entry order    │   │  quantity (kg)  │   │  slaughter      │       │
//! │  └─────────────────┘   │  buying_price   │   │  other          │       │
//! │                        │  selling_price  │   └─────────────────┘       │
//! │                        │  payment_method │                              │
//! │                        │  debt           │                              │
//! │                        └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │      Item       │   │ PaymentMethod   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Meat           │   │  Cash           │                             │
//! │  │  Liver          │   │  MobileMoney    │                             │
//! │  │  Sarara         │   │  Debt           │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Source Fields Only
//! A `SaleRecord` carries what the user typed. Revenue, COGS, total
//! expenses and profit live in [`crate::derive::Derived`] and are computed
//! on demand, so a record can never disagree with its own figures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// What was sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Item {
    /// Camel meat by the kilo.
    #[default]
    Meat,
    /// Camel liver.
    Liver,
    /// Camel sarara (tripe).
    Sarara,
}

impl Item {
    /// Every item, in the order the form cycles through them.
    pub const ALL: [Item; 3] = [Item::Meat, Item::Liver, Item::Sarara];

    /// Label written to the records file and shown in tables.
    pub const fn label(&self) -> &'static str {
        match self {
            Item::Meat => "Camel Meat",
            Item::Liver => "Camel Liver",
            Item::Sarara => "Camel Sarara",
        }
    }

    /// The next item, wrapping around.
    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// The previous item, wrapping around.
    pub fn prev(&self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Item {
    type Err = ValidationError;

    /// Accepts the stored label (`Camel Meat`) or the short name (`meat`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let short = normalized.strip_prefix("camel ").unwrap_or(normalized.as_str());
        match short {
            "meat" => Ok(Item::Meat),
            "liver" => Ok(Item::Liver),
            "sarara" => Ok(Item::Sarara),
            _ => Err(ValidationError::NotAllowed {
                field: "item".to_string(),
                allowed: Item::ALL.iter().map(|i| i.label().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid in cash.
    #[default]
    Cash,
    /// Paid by mobile money (M-Pesa).
    MobileMoney,
    /// Taken on credit; the unpaid part is recorded as debt.
    Debt,
}

impl PaymentMethod {
    /// Every method, in the order the form cycles through them.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::MobileMoney,
        PaymentMethod::Debt,
    ];

    /// Label written to the records file and shown in tables.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::MobileMoney => "Mpesa",
            PaymentMethod::Debt => "Debt",
        }
    }

    /// Only debt sales may carry a debt amount.
    #[inline]
    pub const fn is_debt(&self) -> bool {
        matches!(self, PaymentMethod::Debt)
    }

    /// The next method, wrapping around.
    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// The previous method, wrapping around.
    pub fn prev(&self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "mpesa" | "m-pesa" | "mobile-money" | "mobile money" | "mobile_money" => {
                Ok(PaymentMethod::MobileMoney)
            }
            "debt" | "credit" => Ok(PaymentMethod::Debt),
            _ => Err(ValidationError::NotAllowed {
                field: "payment method".to_string(),
                allowed: PaymentMethod::ALL
                    .iter()
                    .map(|m| m.label().to_string())
                    .collect(),
            }),
        }
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: &T, step: usize) -> T {
    let idx = all.iter().position(|v| v == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

// =============================================================================
// Expenses
// =============================================================================

/// Costs attached to one sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Expenses {
    pub transport: Money,
    pub workers: Money,
    pub slaughter: Money,
    pub other: Money,
}

impl Expenses {
    /// transport + workers + slaughter + other
    pub fn total(&self) -> Money {
        self.transport + self.workers + self.slaughter + self.other
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// One sales transaction as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Day of the sale (not necessarily the day it was entered).
    pub date: NaiveDate,

    /// What was sold.
    pub item: Item,

    /// Kilograms sold, at least 1.
    pub quantity: i64,

    /// Price paid per kg.
    pub buying_price: Money,

    /// Price charged per kg.
    pub selling_price: Money,

    /// How the customer paid.
    pub payment_method: PaymentMethod,

    /// Amount still owed. Zero unless `payment_method` is Debt.
    pub debt: Money,

    /// Costs attached to this sale.
    pub expenses: Expenses,
}

// =============================================================================
// Record Set
// =============================================================================

/// All sales, in the order they were entered.
///
/// ## Invariants
/// - Append-only: there is no way to remove or edit a record
/// - Iteration order is entry order, not date order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<SaleRecord>,
}

impl RecordSet {
    /// Creates an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps records loaded from storage, keeping their order.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        RecordSet { records }
    }

    /// Appends a record and returns its index.
    pub fn append(&mut self, record: SaleRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SaleRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SaleRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[SaleRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a SaleRecord;
    type IntoIter = std::slice::Iter<'a, SaleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Sale used across the crate's tests: 10 kg bought at 300, sold at 500.
    pub(crate) fn sample_record() -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            item: Item::Meat,
            quantity: 10,
            buying_price: Money::from_major(300),
            selling_price: Money::from_major(500),
            payment_method: PaymentMethod::Cash,
            debt: Money::zero(),
            expenses: Expenses {
                transport: Money::from_major(200),
                workers: Money::from_major(100),
                slaughter: Money::from_major(50),
                other: Money::zero(),
            },
        }
    }

    #[test]
    fn test_item_parsing() {
        assert_eq!("Camel Meat".parse::<Item>().unwrap(), Item::Meat);
        assert_eq!("liver".parse::<Item>().unwrap(), Item::Liver);
        assert_eq!(" CAMEL SARARA ".parse::<Item>().unwrap(), Item::Sarara);
        assert!("Goat".parse::<Item>().is_err());
    }

    #[test]
    fn test_payment_method_parsing() {
        assert_eq!("Cash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cash);
        assert_eq!("Mpesa".parse::<PaymentMethod>().unwrap(), PaymentMethod::MobileMoney);
        assert_eq!(
            "Mobile-Money".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::MobileMoney
        );
        assert_eq!("debt".parse::<PaymentMethod>().unwrap(), PaymentMethod::Debt);
        assert!("cheque".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_labels_round_trip() {
        for item in Item::ALL {
            assert_eq!(item.label().parse::<Item>().unwrap(), item);
        }
        for method in PaymentMethod::ALL {
            assert_eq!(method.label().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Item::Sarara.next(), Item::Meat);
        assert_eq!(Item::Meat.prev(), Item::Sarara);
        assert_eq!(PaymentMethod::Cash.next(), PaymentMethod::MobileMoney);
        assert_eq!(PaymentMethod::Cash.prev(), PaymentMethod::Debt);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Item::default(), Item::Meat);
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cash);
        assert!(!PaymentMethod::MobileMoney.is_debt());
        assert!(PaymentMethod::Debt.is_debt());
    }

    #[test]
    fn test_expenses_total() {
        assert_eq!(sample_record().expenses.total(), Money::from_major(350));
    }

    #[test]
    fn test_append_keeps_prior_records() {
        let mut set = RecordSet::new();
        let first = sample_record();
        set.append(first.clone());

        let mut second = sample_record();
        second.item = Item::Liver;
        let idx = set.append(second.clone());

        assert_eq!(idx, 1);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0), Some(&first));
        assert_eq!(set.get(1), Some(&second));
    }
}
