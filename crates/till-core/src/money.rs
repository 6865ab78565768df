//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floating point:                                            │
//! │    0.1 + 0.2  = 0.30000000000000004  ❌ WRONG!                          │
//! │    0.07 * 100 = 7.000000000000001    ❌ WRONG!                          │
//! │                                                                         │
//! │  A till that believes it still owes a sliver of a cent will never      │
//! │  finish counting out change.                                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    10 + 20 = 30, and 7 cents is always 7                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let price = Money::from_cents(1950); // $19.50
//! let tendered = Money::from_cents(2000);
//!
//! let change_due = tendered - price;
//! assert_eq!(change_due.cents(), 50);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Lets callers compute `tendered - price` and detect a
///   short payment by sign instead of by underflow
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  price ──┬──► tendered - price ──► amount due ──► compute_change()      │
/// │          │                                            │                 │
/// │          └──► Displayed as "$19.5" by the register    ▼                 │
/// │                                                Dispensed.amount         │
/// │                                                       │                 │
/// │  Till stock (per denomination) ◄──── commit() ◄───────┘                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::from_cents(1950); // Represents $19.50
    /// assert_eq!(price.cents(), 1950);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1950).dollars(), 19);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a whole number of units.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert_eq!(quarter.times(3).cents(), 75);
    /// ```
    #[inline]
    pub const fn times(&self, units: i64) -> Self {
        Money(self.0 * units)
    }

    /// Adds two amounts, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let a = Money::from_cents(101);
    /// assert_eq!(a.checked_add(Money::from_cents(205)), Some(Money::from_cents(306)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_add(a), None);
    /// ```
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns how many whole `unit`s fit into this amount.
    ///
    /// A non-positive `unit` yields 0.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// // $1.01 of pennies is 101 coins, $4.25 of quarters is 17
    /// assert_eq!(Money::from_cents(101).whole_units_of(Money::from_cents(1)), 101);
    /// assert_eq!(Money::from_cents(425).whole_units_of(Money::from_cents(25)), 17);
    /// assert_eq!(Money::from_cents(24).whole_units_of(Money::from_cents(25)), 0);
    /// ```
    #[inline]
    pub const fn whole_units_of(&self, unit: Money) -> i64 {
        if unit.0 <= 0 {
            return 0;
        }
        self.0.div_euclid(unit.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money with two fixed decimals.
///
/// ## Note
/// This is for debugging and logs. The register formats amounts for the
/// customer with trailing zeros trimmed.
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
    fn test_from_cents() {
        let money = Money::from_cents(1950);
        assert_eq!(money.cents(), 1950);
        assert_eq!(money.dollars(), 19);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1950)), "$19.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(2000);
        let b = Money::from_cents(1950);

        assert_eq!((a + b).cents(), 3950);
        assert_eq!((a - b).cents(), 50);
        assert_eq!((b - a).cents(), -50);
        assert_eq!(Money::from_cents(25).times(2).cents(), 50);

        let mut c = a;
        c -= b;
        c += Money::from_cents(5);
        assert_eq!(c.cents(), 55);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(101), Money::from_cents(205), Money::from_cents(310)];
        let by_ref: Money = amounts.iter().sum();
        let by_value: Money = amounts.into_iter().sum();
        assert_eq!(by_ref.cents(), 616);
        assert_eq!(by_value, by_ref);

        let empty: Vec<Money> = Vec::new();
        assert!(empty.into_iter().sum::<Money>().is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert!(!negative.is_positive());
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::zero()), Some(max));
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_whole_units_of() {
        let hundred = Money::from_cents(10_000);
        assert_eq!(Money::from_cents(50_000).whole_units_of(hundred), 5);
        assert_eq!(Money::from_cents(9_999).whole_units_of(hundred), 0);
        assert_eq!(Money::from_cents(100).whole_units_of(Money::zero()), 0);
    }

    /// 0.1 + 0.2 style drift cannot happen: repeated quarter subtraction
    /// lands exactly on zero.
    #[test]
    fn test_repeated_subtraction_is_exact() {
        let mut owed = Money::from_cents(2000) - Money::from_cents(1950);
        owed -= Money::from_cents(25);
        owed -= Money::from_cents(25);
        assert!(owed.is_zero());
    }
}
