//! # Denominations
//!
//! The fixed set of coins and bills a till can hold.
//!
//! ## Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Dispensing order (highest face value first)                            │
//! │                                                                         │
//! │  ONE HUNDRED  TWENTY  TEN  FIVE  ONE  QUARTER  DIME  NICKEL  PENNY      │
//! │    10000       2000   1000  500  100    25      10     5      1         │
//! │                                                                         │
//! │  Variants are declared in this order, so the derived `Ord` IS the       │
//! │  dispensing order: `OneHundred < Twenty < ... < Penny`.                 │
//! │  Any `BTreeMap<Denomination, _>` iterates highest face value first.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The greedy change engine depends on this order for correctness and for
//! deterministic output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

/// A unit of US currency with a fixed face value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Denomination {
    #[serde(rename = "ONE HUNDRED")]
    OneHundred,
    #[serde(rename = "TWENTY")]
    Twenty,
    #[serde(rename = "TEN")]
    Ten,
    #[serde(rename = "FIVE")]
    Five,
    #[serde(rename = "ONE")]
    One,
    #[serde(rename = "QUARTER")]
    Quarter,
    #[serde(rename = "DIME")]
    Dime,
    #[serde(rename = "NICKEL")]
    Nickel,
    #[serde(rename = "PENNY")]
    Penny,
}

impl Denomination {
    /// Every denomination, highest face value first.
    pub const ALL: [Denomination; 9] = [
        Denomination::OneHundred,
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::One,
        Denomination::Quarter,
        Denomination::Dime,
        Denomination::Nickel,
        Denomination::Penny,
    ];

    /// Face value of a single coin or bill.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::Denomination;
    ///
    /// assert_eq!(Denomination::Quarter.face_value().cents(), 25);
    /// assert_eq!(Denomination::OneHundred.face_value().cents(), 10_000);
    /// ```
    pub const fn face_value(&self) -> Money {
        let cents = match self {
            Denomination::OneHundred => 10_000,
            Denomination::Twenty => 2_000,
            Denomination::Ten => 1_000,
            Denomination::Five => 500,
            Denomination::One => 100,
            Denomination::Quarter => 25,
            Denomination::Dime => 10,
            Denomination::Nickel => 5,
            Denomination::Penny => 1,
        };
        Money::from_cents(cents)
    }

    /// Name as printed on drawer listings and change breakdowns.
    pub const fn name(&self) -> &'static str {
        match self {
            Denomination::OneHundred => "ONE HUNDRED",
            Denomination::Twenty => "TWENTY",
            Denomination::Ten => "TEN",
            Denomination::Five => "FIVE",
            Denomination::One => "ONE",
            Denomination::Quarter => "QUARTER",
            Denomination::Dime => "DIME",
            Denomination::Nickel => "NICKEL",
            Denomination::Penny => "PENNY",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a denomination name.
///
/// Matching ignores case and surrounding whitespace, and accepts `_` or `-`
/// in place of the space in `ONE HUNDRED`.
///
/// ## Example
/// ```rust
/// use till_core::Denomination;
///
/// assert_eq!("quarter".parse::<Denomination>().unwrap(), Denomination::Quarter);
/// assert_eq!("ONE_HUNDRED".parse::<Denomination>().unwrap(), Denomination::OneHundred);
/// assert!("FIFTY".parse::<Denomination>().is_err());
/// ```
impl FromStr for Denomination {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['_', '-'], " ");

        Denomination::ALL
            .into_iter()
            .find(|d| d.name() == normalized)
            .ok_or_else(|| ValidationError::UnknownDenomination {
                name: s.trim().to_string(),
            })
    }
}
