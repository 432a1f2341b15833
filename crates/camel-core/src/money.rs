//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A day of sales summed in floats drifts by fractions of a shilling,    │
//! │  and the drift shows up as "1,649" instead of "1,650" on the report.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every amount is an i64 count of cents. Decimal text from the form   │
//! │    or the records file is converted once, at the edge.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use camel_core::money::Money;
//!
//! let price: Money = "312.50".parse().unwrap();
//! assert_eq!(price.cents(), 31250);
//!
//! let line = price.multiply_quantity(4);
//! assert_eq!(line.display_whole(), "1,250");
//! assert_eq!(line.format_with_label("KES"), "1,250 KES");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, ValidationError};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents (1/100 of the currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: profit goes negative when selling below cost
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency**: the unit label is a display concern only
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  EntryForm.buying_price ──┐                                             │
/// │  EntryForm.selling_price ─┼──► SaleRecord ──► Derived ──► Summary       │
/// │  EntryForm.expenses ──────┘        │             │           │          │
/// │                                    ▼             ▼           ▼          │
/// │                               CSV cells      Table row   Metrics/PDF    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use camel_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(50).cents(), 5000);
    /// ```
    #[inline]
    pub const fn from_major(units: i64) -> Self {
        Money(units * 100)
    }

    /// Converts a decimal amount to Money.
    ///
    /// Fractions finer than a cent are rounded half-to-even.
    /// Returns `AmountOutOfRange` if the value does not fit in i64 cents.
    pub fn from_decimal(value: Decimal) -> CoreResult<Self> {
        value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Money)
            .ok_or_else(|| CoreError::AmountOutOfRange(value.to_string()))
    }

    /// Returns the value as an exact decimal (two decimal places).
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use camel_core::money::Money;
    ///
    /// let per_kg = Money::from_major(500);
    /// assert_eq!(per_kg.multiply_quantity(10), Money::from_major(5000));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Like [`Money::multiply_quantity`], but returns `None` on overflow.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds without overflowing; returns `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Rounds to whole units and groups thousands, e.g. `1,650`.
    ///
    /// ## Rounding
    /// Half-to-even (bankers rounding), so `0.50` shows as `0` and
    /// `1.50` shows as `2`. This is presentation only; stored and summed
    /// values keep their cents.
    pub fn display_whole(&self) -> String {
        let whole = self
            .to_decimal()
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
            .to_i64()
            .unwrap_or(self.0 / 100);
        group_thousands(whole)
    }

    /// Formats as whole units with a trailing unit label, e.g. `1,650 KES`.
    pub fn format_with_label(&self, label: &str) -> String {
        format!("{} {}", self.display_whole(), label)
    }
}

/// Inserts `,` between every group of three digits.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shortest exact decimal form: `5000`, `312.5`, `0.05`.
///
/// This is the form written to the records file and shown in form inputs.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal().normalize())
    }
}

/// Parses decimal text such as `300`, `312.50` or `1,500`.
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.trim().chars().filter(|c| *c != ',' && *c != '_').collect();
        if cleaned.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            }
            .into());
        }
        let value = Decimal::from_str(&cleaned)
            .map_err(|e| ValidationError::invalid_format("amount", e.to_string()))?;
        Money::from_decimal(value)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Column totals: `records.iter().map(|r| r.debt).sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_and_cents() {
        let money = Money::from_major(1650);
        assert_eq!(money.cents(), 165_000);
        assert_eq!(Money::from_cents(5).cents(), 5);
    }

    #[test]
    fn test_parse() {
        assert_eq!("300".parse::<Money>().unwrap(), Money::from_major(300));
        assert_eq!("312.5".parse::<Money>().unwrap().cents(), 31_250);
        assert_eq!(" 1,500 ".parse::<Money>().unwrap(), Money::from_major(1500));
        assert_eq!("0.005".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("0.015".parse::<Money>().unwrap().cents(), 2);
        assert!("".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
    }

    #[test]
    fn test_display_is_shortest_decimal() {
        assert_eq!(Money::from_major(5000).to_string(), "5000");
        assert_eq!(Money::from_cents(31_250).to_string(), "312.5");
        assert_eq!(Money::zero().to_string(), "0");
        assert_eq!(Money::from_cents(-150).to_string(), "-1.5");
    }

    #[test]
    fn test_display_whole_groups_thousands() {
        assert_eq!(Money::from_major(1650).display_whole(), "1,650");
        assert_eq!(Money::from_major(1_234_567).display_whole(), "1,234,567");
        assert_eq!(Money::from_major(999).display_whole(), "999");
        assert_eq!(Money::from_major(-12_500).display_whole(), "-12,500");
        assert_eq!(Money::zero().display_whole(), "0");
    }

    #[test]
    fn test_display_whole_rounds_half_to_even() {
        assert_eq!(Money::from_cents(50).display_whole(), "0");
        assert_eq!(Money::from_cents(150).display_whole(), "2");
        assert_eq!(Money::from_cents(249).display_whole(), "2");
        assert_eq!(Money::from_cents(99_951).display_whole(), "1,000");
    }

    #[test]
    fn test_format_with_label() {
        assert_eq!(Money::from_major(5000).format_with_label("KES"), "5,000 KES");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(4);

        assert_eq!(a + b, Money::from_major(14));
        assert_eq!(a - b, Money::from_major(6));
        assert_eq!(a * 3, Money::from_major(30));
        assert_eq!((b - a).cents(), -600);
        assert!((b - a).is_negative());
    }

    #[test]
    fn test_sum() {
        let values = [Money::from_major(1), Money::from_major(2), Money::from_cents(50)];
        let total: Money = values.iter().sum();
        assert_eq!(total.cents(), 350);
        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_checked_multiply_overflow() {
        assert!(Money::from_cents(i64::MAX).checked_multiply_quantity(2).is_none());
        assert_eq!(
            Money::from_major(3).checked_multiply_quantity(2),
            Some(Money::from_major(6))
        );
    }
}
