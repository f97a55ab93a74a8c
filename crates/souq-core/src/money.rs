//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 15% discount on $12.34 computed in floats drifts after enough        │
//! │  cart additions. Display rounding then hides real drift.                │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "rounded to 2 decimals" is exact by construction; the only           │
//! │    rounding in the system is the half-up rounding of discount           │
//! │    amounts, done once, in integer math                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use souq_core::money::Money;
//! use souq_core::types::DiscountRate;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(4_500); // $45.00
//!
//! // Line total for qty 2, 10% off
//! let line = price.multiply_quantity(2).discounted_by(DiscountRate::from_percentage(10.0));
//! assert_eq!(line.cents(), 8_100); // $81.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: headroom for aggregate totals; negative values never
///   arise from shop operations but subtraction stays total
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
///
/// Every monetary value in the system flows through this type: product
/// prices, effective (discounted) prices, line subtotals and order totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use souq_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units (dollars).
    ///
    /// Seed catalog prices are whole dollars, so this shows up a lot in
    /// seed data and tests.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use souq_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2_000); // $20.00
    /// let line_total = unit_price.multiply_quantity(5);
    /// assert_eq!(line_total.cents(), 10_000); // $100.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Implementation
    /// The discount amount is computed in integer math with half-up
    /// rounding: `(amount * bps + 5000) / 10000`. i128 intermediate prevents
    /// overflow on large amounts. A zero rate is the identity.
    ///
    /// ## Example
    /// ```rust
    /// use souq_core::money::Money;
    /// use souq_core::types::DiscountRate;
    ///
    /// let price = Money::from_cents(110_000); // $1,100.00
    /// let sale = price.discounted_by(DiscountRate::from_percentage(15.0));
    /// assert_eq!(sale.cents(), 93_500); // $935.00
    /// ```
    pub fn discounted_by(&self, rate: DiscountRate) -> Money {
        if rate.is_zero() {
            return *self;
        }
        let discount_amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and the console demo. The presentation layer formats
/// `cents` itself to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(850).cents(), 85_000);
        assert_eq!(Money::from_major(0).cents(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 897);
    }

    #[test]
    fn test_discount_zero_is_identity() {
        let price = Money::from_cents(12_345);
        assert_eq!(price.discounted_by(DiscountRate::zero()), price);
    }

    #[test]
    fn test_discount_whole_percentages() {
        // $1,100.00 at 15% off = $935.00 (iPhone seed product on sale)
        let price = Money::from_cents(110_000);
        let sale = price.discounted_by(DiscountRate::from_percentage(15.0));
        assert_eq!(sale.cents(), 93_500);

        // 100% off is free
        let free = price.discounted_by(DiscountRate::from_percentage(100.0));
        assert_eq!(free.cents(), 0);
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // $0.25 at 10% = 2.5 cents discount → rounds to 3 cents off
        let price = Money::from_cents(25);
        let sale = price.discounted_by(DiscountRate::from_percentage(10.0));
        assert_eq!(sale.cents(), 22);
    }

    #[test]
    fn test_discount_monotone_non_increasing() {
        // Effective price never increases as the discount grows.
        let price = Money::from_cents(9_999);
        let mut previous = price;
        for pct in 0..=100 {
            let current = price.discounted_by(DiscountRate::from_percentage(pct as f64));
            assert!(current <= previous, "discount {}% increased price", pct);
            previous = current;
        }
    }
}
