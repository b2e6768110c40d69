//! # Money Module
//!
//! Monetary values as integer cents.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  In floating point:  0.1 + 0.2 = 0.30000000000000004                │
//! │                                                                     │
//! │  Splitting R$ 100.00 into 3 installments of 33.33 loses a cent     │
//! │  silently. With integer cents we KNOW where the remainder went:     │
//! │  it is assigned to the final installment, so the schedule always    │
//! │  sums back to the sale total.                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every monetary value in the system flows through this type: product
//! prices, sale totals, installment amounts, customer debt, expenses.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate balances may dip negative before clamping
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - Serialized as a bare integer so persisted blobs stay compact
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies by a quantity (line subtotals).
    #[inline]
    pub const fn times(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Subtracts, clamping the result at zero.
    ///
    /// Remaining balances and stock-style quantities never go negative;
    /// over-payment simply settles the balance.
    #[inline]
    pub fn saturating_sub(&self, other: Money) -> Self {
        Money((self.0 - other.0).max(0))
    }

    /// Splits the value into `n` parts that sum back exactly.
    ///
    /// Each part is the integer division `total / n`; the remainder cents
    /// are added to the final part. `n == 0` yields an empty split.
    ///
    /// ## Example
    /// ```
    /// use nexo_core::money::Money;
    ///
    /// let parts = Money::from_cents(10000).split(3);
    /// assert_eq!(parts.iter().map(|p| p.cents()).collect::<Vec<_>>(), vec![3333, 3333, 3334]);
    /// ```
    pub fn split(&self, n: u32) -> Vec<Money> {
        if n == 0 {
            return Vec::new();
        }
        let n = n as i64;
        let base = self.0 / n;
        let remainder = self.0 - base * n;
        let mut parts = vec![Money(base); n as usize];
        if let Some(last) = parts.last_mut() {
            last.0 += remainder;
        }
        parts
    }
}

/// Display in receipt format: `R$ 10.99`.
///
/// This is for notification payloads and debugging; UI formatting and
/// localization happen outside the core.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}R$ {}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_and_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!(a.times(3).cents(), 3000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "R$ 10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "R$ 5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-R$ 5.50");
        assert_eq!(format!("{}", Money::zero()), "R$ 0.00");
    }

    #[test]
    fn test_saturating_sub_clamps_at_zero() {
        let total = Money::from_cents(100);
        let paid = Money::from_cents(150);
        assert_eq!(total.saturating_sub(paid), Money::zero());
        assert_eq!(paid.saturating_sub(total).cents(), 50);
    }

    #[test]
    fn test_split_even() {
        let parts = Money::from_cents(30000).split(3);
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.cents() == 10000));
    }

    #[test]
    fn test_split_remainder_goes_to_last_part() {
        let total = Money::from_cents(10000);
        let parts = total.split(3);

        assert_eq!(parts[0].cents(), 3333);
        assert_eq!(parts[1].cents(), 3333);
        assert_eq!(parts[2].cents(), 3334);
        assert_eq!(parts.into_iter().sum::<Money>(), total);
    }

    #[test]
    fn test_split_zero_parts() {
        assert!(Money::from_cents(100).split(0).is_empty());
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].iter().map(|c| Money::from_cents(*c)).sum();
        assert_eq!(total.cents(), 600);
    }
}
