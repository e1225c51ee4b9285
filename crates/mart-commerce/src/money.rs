//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The marketplace is
//! single-currency (USD), so there is no currency field to mismatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

/// A USD amount stored in cents.
///
/// All rounding happens at the point of computation (round-half-up), never
/// by accumulating floating-point intermediates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a dollar amount.
    ///
    /// The input is rounded half-up to the nearest cent; this is the only
    /// place a float crosses into the type, at the UI boundary.
    ///
    /// ```
    /// use mart_commerce::money::Money;
    /// assert_eq!(Money::from_dollars(49.99).cents, 4999);
    /// ```
    pub fn from_dollars(dollars: f64) -> Self {
        Self {
            cents: (dollars * 100.0).round() as i64,
        }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Try to add another amount, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::from_cents)
    }

    /// Try to subtract another amount, returning None on overflow.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        self.cents.checked_sub(other.cents).map(Money::from_cents)
    }

    /// Sum an iterator of amounts, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }

    /// Apply a rate expressed in basis points (1 bps = 0.01%).
    ///
    /// Computed entirely in integer arithmetic with round-half-up (half away
    /// from zero for negative amounts), so repeated application never drifts.
    ///
    /// ```
    /// use mart_commerce::money::Money;
    /// // 6.25% tax on $75.00 is $4.69 (468.75 cents rounds up)
    /// assert_eq!(Money::from_cents(7500).rate_bps(625).cents, 469);
    /// ```
    pub fn rate_bps(&self, basis_points: i64) -> Money {
        let product = self.cents * basis_points;
        let cents = if product >= 0 {
            (product + 5_000) / 10_000
        } else {
            (product - 5_000) / 10_000
        };
        Money::from_cents(cents)
    }

    /// Round up to the next whole dollar (identity on exact dollars).
    pub fn round_up_to_dollar(&self) -> Money {
        let rem = self.cents.rem_euclid(100);
        if rem == 0 {
            *self
        } else {
            Money::from_cents(self.cents + (100 - rem))
        }
    }

    /// The gap between this amount and the next whole dollar.
    ///
    /// Zero on exact dollars, otherwise strictly positive and under $1.00.
    pub fn roundup_to_dollar_gap(&self) -> Money {
        Money::from_cents(self.round_up_to_dollar().cents - self.cents)
    }

    /// Check whether this amount is a whole number of dollars.
    pub fn is_whole_dollars(&self) -> bool {
        self.cents % 100 == 0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.abs();
        format!("{}${}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents + other.cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_cents(self.cents - other.cents)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::from_cents(-self.cents)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
