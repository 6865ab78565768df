//! # Till Model
//!
//! The cash drawer: how much value is held for each denomination.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Till Lifecycle                                       │
//! │                                                                         │
//! │  Session start ──► Till::from_stock(initial drawer)                    │
//! │                         │                                               │
//! │        ┌────────────────┘                                               │
//! │        ▼                                                                │
//! │  &Till (snapshot) ──► compute_change() ──► ChangeResult                 │
//! │        ▲                                        │                       │
//! │        │                  ┌─────────────────────┤                       │
//! │        │                  ▼                     ▼                       │
//! │        │          Open: commit(parts)    Closed: zero_all()             │
//! │        │                  │                     │                       │
//! │        └──────────────────┴─────────────────────┘                       │
//! │                                                                         │
//! │  The engine only ever sees `&Till`. The caller owns the drawer and      │
//! │  decides whether to apply a result.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Units
//! Stock is recorded as total VALUE per denomination, not coin count:
//! `QUARTER: 425` means $4.25 of quarters (17 coins).

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::change::Dispensed;
use crate::denomination::Denomination;
use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_stock_amount, ValidationResult};

/// Per-denomination stock of a cash drawer.
///
/// ## Invariants
/// - Every amount is >= 0 (checked on construction and deserialization)
/// - The total value fits in an `i64`
/// - Iteration is highest face value first (see [`Denomination`] ordering)
/// - A denomination with no entry holds 0
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Till {
    stock: BTreeMap<Denomination, Money>,
}

impl Till {
    /// Creates an empty till.
    pub fn new() -> Self {
        Till::default()
    }

    /// Creates a till from `(denomination, amount)` pairs.
    ///
    /// Repeated denominations accumulate. Any negative amount is rejected,
    /// as is a drawer whose total does not fit in an `i64`.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Denomination, Money, Till};
    ///
    /// let till = Till::from_stock([
    ///     (Denomination::Quarter, Money::from_cents(425)),
    ///     (Denomination::Penny, Money::from_cents(101)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(till.total_value().cents(), 526);
    /// assert!(Till::from_stock([(Denomination::Dime, Money::from_cents(-10))]).is_err());
    /// ```
    pub fn from_stock<I>(stock: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (Denomination, Money)>,
    {
        let mut till = Till::new();
        let mut total = Money::zero();
        for (denomination, amount) in stock {
            validate_stock_amount(denomination, amount)?;
            // Amounts are non-negative, so no entry exceeds the total
            total = total
                .checked_add(amount)
                .ok_or_else(|| ValidationError::InvalidFormat {
                    field: "drawer".to_string(),
                    reason: "total is too large".to_string(),
                })?;
            *till.stock.entry(denomination).or_default() += amount;
        }
        Ok(till)
    }

    /// Creates a till from coin and bill counts.
    ///
    /// Cannot fail: nine denominations of at most `u32::MAX` units each stay
    /// far below `i64::MAX` cents.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Denomination, Till};
    ///
    /// let till = Till::from_counts([(Denomination::Quarter, 17), (Denomination::One, 90)]);
    /// assert_eq!(till.total_value().cents(), 9_425);
    /// ```
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (Denomination, u32)>,
    {
        let mut till = Till::new();
        for (denomination, units) in counts {
            *till.stock.entry(denomination).or_default() +=
                denomination.face_value().times(i64::from(units));
        }
        till
    }

    /// Creates a till from denomination names and cent amounts.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Denomination, Till};
    ///
    /// let till = Till::from_named_cents([("ONE HUNDRED", 10_000), ("PENNY", 101)]).unwrap();
    /// assert_eq!(till.amount_for(Denomination::OneHundred).cents(), 10_000);
    ///
    /// assert!(Till::from_named_cents([("FIFTY", 5_000)]).is_err());
    /// ```
    pub fn from_named_cents<'a, I>(stock: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let parsed = stock
            .into_iter()
            .map(|(name, cents)| -> ValidationResult<(Denomination, Money)> {
                Ok((name.parse()?, Money::from_cents(cents)))
            })
            .collect::<ValidationResult<Vec<_>>>()?;
        Till::from_stock(parsed)
    }

    /// Sum of every denomination's stock.
    pub fn total_value(&self) -> Money {
        self.stock.values().sum()
    }

    /// Stock held for one denomination (0 if the till has no entry for it).
    pub fn amount_for(&self, denomination: Denomination) -> Money {
        self.stock.get(&denomination).copied().unwrap_or_default()
    }

    /// Whole coins or bills available for one denomination.
    ///
    /// Stock that is not a whole multiple of the face value rounds down:
    /// 30 cents recorded under QUARTER is one usable quarter.
    pub fn units_for(&self, denomination: Denomination) -> i64 {
        self.amount_for(denomination)
            .whole_units_of(denomination.face_value())
    }

    /// Returns true when the drawer holds no value at all.
    pub fn is_empty(&self) -> bool {
        self.total_value().is_zero()
    }

    /// Recorded `(denomination, amount)` pairs, highest face value first.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, Money)> + '_ {
        self.stock.iter().map(|(d, m)| (*d, *m))
    }

    /// Every denomination in the fixed set with its stock, zero-filled,
    /// highest face value first. Used for drawer listings.
    pub fn contents(&self) -> Vec<(Denomination, Money)> {
        Denomination::ALL
            .into_iter()
            .map(|d| (d, self.amount_for(d)))
            .collect()
    }

    /// Removes a dispensed breakdown from the drawer.
    ///
    /// ## Precondition
    /// Each amount is at most the current stock for its denomination. The
    /// change engine guarantees this for its own output, so it is not
    /// re-checked here.
    pub fn commit(&mut self, dispensed: &[Dispensed]) {
        for part in dispensed {
            *self.stock.entry(part.denomination).or_default() -= part.amount;
        }
    }

    /// Empties the drawer (every denomination set to 0).
    pub fn zero_all(&mut self) {
        for amount in self.stock.values_mut() {
            *amount = Money::zero();
        }
    }
}

/// Wire shape of a till; deserialized values go through [`Till::from_stock`].
#[derive(Deserialize)]
struct RawTill {
    stock: BTreeMap<Denomination, Money>,
}

impl<'de> Deserialize<'de> for Till {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawTill::deserialize(deserializer)?;
        Till::from_stock(raw.stock).map_err(serde::de::Error::custom)
    }
}
