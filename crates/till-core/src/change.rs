//! # Change Engine
//!
//! Works out which coins and bills to hand back for a cash sale.
//!
//! ## Classification
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_change(amount_due, &till)                                      │
//! │                                                                         │
//! │  total = till.total_value()                                             │
//! │     │                                                                   │
//! │     ├── total <  due ──────────────────────────► InsufficientFunds      │
//! │     │                                                                   │
//! │     ├── total == due ──► take EVERYTHING ──────► Closed(all stock)      │
//! │     │                                                                   │
//! │     └── total >  due ──► greedy, highest first                          │
//! │                              │                                          │
//! │                              ├── remainder > 0 ► InsufficientFunds      │
//! │                              │                                          │
//! │                              └── remainder = 0 ► Open(dispensed)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Closed Is Not "Greedy That Happened To Empty The Drawer"
//! Stock need not be a whole multiple of its face value (30 cents recorded
//! under QUARTER). When the total equals the amount due, the greedy loop
//! could leave such a remainder behind and report the sale as impossible.
//! `Closed` is therefore computed as "hand over the whole drawer".
//!
//! ## Greedy Exactness
//! For the fixed US set (1, 5, 10, 25, 100, 500, 1000, 2000, 10000),
//! highest-first greedy finds an exact breakdown whenever the stock mix
//! allows one. That is a property of these face values, not of greedy
//! change-making in general.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::denomination::Denomination;
use crate::error::CoreResult;
use crate::money::Money;
use crate::till::Till;
use crate::validation::validate_amount_due;

// =============================================================================
// Result Types
// =============================================================================

/// One line of a change breakdown: how much value of a denomination to hand
/// over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Dispensed {
    pub denomination: Denomination,
    /// Total value handed over (two quarters = 50), not a coin count.
    pub amount: Money,
}

impl Dispensed {
    pub const fn new(denomination: Denomination, amount: Money) -> Self {
        Dispensed {
            denomination,
            amount,
        }
    }

    /// Number of coins or bills in this line.
    pub const fn units(&self) -> i64 {
        self.amount.whole_units_of(self.denomination.face_value())
    }
}

/// Outcome of a change computation.
///
/// ## Serialization
/// ```json
/// { "status": "OPEN", "change": [{ "denomination": "QUARTER", "amount": 50 }] }
/// { "status": "INSUFFICIENT_FUNDS" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(
    tag = "status",
    content = "change",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum ChangeResult {
    /// The drawer cannot make exact change. Nothing is dispensed.
    InsufficientFunds,
    /// The change due equals the whole drawer. Carries every denomination
    /// with positive stock, highest first.
    Closed(Vec<Dispensed>),
    /// Change made exactly with stock left over. Carries only denominations
    /// actually dispensed, highest first.
    Open(Vec<Dispensed>),
}

/// The status tag of a [`ChangeResult`], without its breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    InsufficientFunds,
    Closed,
    Open,
}

impl ChangeStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::InsufficientFunds => "INSUFFICIENT_FUNDS",
            ChangeStatus::Closed => "CLOSED",
            ChangeStatus::Open => "OPEN",
        }
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ChangeResult {
    pub fn status(&self) -> ChangeStatus {
        match self {
            ChangeResult::InsufficientFunds => ChangeStatus::InsufficientFunds,
            ChangeResult::Closed(_) => ChangeStatus::Closed,
            ChangeResult::Open(_) => ChangeStatus::Open,
        }
    }

    /// The breakdown to hand over (empty for `InsufficientFunds`).
    pub fn dispensed(&self) -> &[Dispensed] {
        match self {
            ChangeResult::InsufficientFunds => &[],
            ChangeResult::Closed(parts) | ChangeResult::Open(parts) => parts,
        }
    }

    pub fn total_dispensed(&self) -> Money {
        self.dispensed().iter().map(|p| p.amount).sum()
    }

    /// True for `Open` and `Closed`: the caller should commit the result.
    pub fn is_dispensable(&self) -> bool {
        !matches!(self, ChangeResult::InsufficientFunds)
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Computes the change for `amount_due` from `till`.
///
/// Pure: the till is only read, and the same inputs always give the same
/// result. Bounded by the fixed number of denominations.
///
/// ## Errors
/// [`CoreError::NegativeAmountDue`](crate::CoreError::NegativeAmountDue) if
/// `amount_due` is negative. Running out of change is reported as
/// `Ok(ChangeResult::InsufficientFunds)`, not as an error.
///
/// ## Example
/// ```rust
/// use till_core::{compute_change, ChangeResult, Denomination, Dispensed, Money, Till};
///
/// let till = Till::from_named_cents([("QUARTER", 425), ("ONE", 9_000)]).unwrap();
/// let result = compute_change(Money::from_cents(50), &till).unwrap();
///
/// assert_eq!(
///     result,
///     ChangeResult::Open(vec![Dispensed::new(Denomination::Quarter, Money::from_cents(50))])
/// );
/// ```
pub fn compute_change(amount_due: Money, till: &Till) -> CoreResult<ChangeResult> {
    validate_amount_due(amount_due)?;

    let total = till.total_value();

    if total < amount_due {
        debug!(due = amount_due.cents(), total = total.cents(), "insufficient total in drawer");
        return Ok(ChangeResult::InsufficientFunds);
    }

    if total == amount_due {
        let everything: Vec<Dispensed> = till
            .iter()
            .filter(|(_, amount)| amount.is_positive())
            .map(|(d, amount)| Dispensed::new(d, amount))
            .collect();
        debug!(due = amount_due.cents(), parts = everything.len(), "drawer emptied");
        return Ok(ChangeResult::Closed(everything));
    }

    let mut remaining = amount_due;
    let mut parts = Vec::new();

    for denomination in Denomination::ALL {
        let face = denomination.face_value();
        let units = remaining
            .whole_units_of(face)
            .min(till.units_for(denomination));

        if units > 0 {
            let amount = face.times(units);
            remaining -= amount;
            parts.push(Dispensed::new(denomination, amount));
        }
    }

    if remaining.is_positive() {
        debug!(
            due = amount_due.cents(),
            short = remaining.cents(),
            "drawer cannot make exact change"
        );
        return Ok(ChangeResult::InsufficientFunds);
    }

    debug!(due = amount_due.cents(), parts = parts.len(), "change made");
    Ok(ChangeResult::Open(parts))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    fn c(cents: i64) -> Money {
        Money::from_cents(cents)
    }

    /// PENNY 1.01, NICKEL 2.05, DIME 3.10, QUARTER 4.25, ONE 90, FIVE 55,
    /// TEN 20, TWENTY 60, ONE HUNDRED 100
    fn standard_till() -> Till {
        Till::from_named_cents([
            ("PENNY", 101),
            ("NICKEL", 205),
            ("DIME", 310),
            ("QUARTER", 425),
            ("ONE", 9_000),
            ("FIVE", 5_500),
            ("TEN", 2_000),
            ("TWENTY", 6_000),
            ("ONE HUNDRED", 10_000),
        ])
        .unwrap()
    }

    #[test]
    fn test_fifty_cents_is_two_quarters_in_one_entry() {
        // price 19.5, cash 20
        let result = compute_change(c(50), &standard_till()).unwrap();
        assert_eq!(
            result,
            ChangeResult::Open(vec![Dispensed::new(Denomination::Quarter, c(50))])
        );
        assert_eq!(result.dispensed()[0].units(), 2);
    }

    #[test]
    fn test_large_change_walks_every_denomination() {
        // price 3.26, cash 100 → 96.74
        let result = compute_change(c(9_674), &standard_till()).unwrap();
        assert_eq!(
            result,
            ChangeResult::Open(vec![
                Dispensed::new(Denomination::Twenty, c(6_000)),
                Dispensed::new(Denomination::Ten, c(2_000)),
                Dispensed::new(Denomination::Five, c(1_500)),
                Dispensed::new(Denomination::One, c(100)),
                Dispensed::new(Denomination::Quarter, c(50)),
                Dispensed::new(Denomination::Dime, c(20)),
                Dispensed::new(Denomination::Penny, c(4)),
            ])
        );
        assert_eq!(result.total_dispensed(), c(9_674));
    }

    #[test]
    fn test_total_below_due_is_insufficient() {
        let till = Till::from_named_cents([("PENNY", 1), ("ONE", 100)]).unwrap();
        assert_eq!(
            compute_change(c(200), &till).unwrap(),
            ChangeResult::InsufficientFunds
        );
    }

    #[test]
    fn test_wrong_mix_is_insufficient() {
        // $1.01 in the drawer but no way to make 50 cents
        let till = Till::from_named_cents([("PENNY", 1), ("ONE", 100)]).unwrap();
        assert_eq!(
            compute_change(c(50), &till).unwrap(),
            ChangeResult::InsufficientFunds
        );
    }

    #[test]
    fn test_only_hundreds_cannot_make_small_change() {
        let till = Till::from_named_cents([("PENNY", 0), ("ONE HUNDRED", 50_000)]).unwrap();
        assert_eq!(
            compute_change(c(150), &till).unwrap(),
            ChangeResult::InsufficientFunds
        );
    }

    #[test]
    fn test_exact_drawer_is_closed_with_positive_stock_only() {
        // PENNY 0.5 and zeros elsewhere, due 0.5
        let till = Till::from_named_cents([
            ("PENNY", 50),
            ("NICKEL", 0),
            ("DIME", 0),
            ("QUARTER", 0),
            ("ONE", 0),
            ("FIVE", 0),
            ("TEN", 0),
            ("TWENTY", 0),
            ("ONE HUNDRED", 0),
        ])
        .unwrap();

        assert_eq!(
            compute_change(c(50), &till).unwrap(),
            ChangeResult::Closed(vec![Dispensed::new(Denomination::Penny, c(50))])
        );
    }

    #[test]
    fn test_closed_takes_stock_greedy_would_strand() {
        // 30 cents recorded under QUARTER: greedy could use only 25 of it,
        // but the total equals the amount due so the drawer is handed over.
        let till = Till::from_named_cents([("QUARTER", 30), ("PENNY", 5)]).unwrap();
        let result = compute_change(c(35), &till).unwrap();

        assert_eq!(
            result,
            ChangeResult::Closed(vec![
                Dispensed::new(Denomination::Quarter, c(30)),
                Dispensed::new(Denomination::Penny, c(5)),
            ])
        );
    }

    #[test]
    fn test_closed_on_full_standard_till_lists_all_denominations() {
        let till = standard_till();
        let result = compute_change(till.total_value(), &till).unwrap();

        assert_eq!(result.status(), ChangeStatus::Closed);
        assert_eq!(result.dispensed().len(), 9);
        assert_eq!(result.dispensed()[0].denomination, Denomination::OneHundred);
        assert_eq!(result.total_dispensed(), till.total_value());
    }

    #[test]
    fn test_zero_stock_never_appears() {
        let till = Till::from_named_cents([("TWENTY", 0), ("TEN", 1_000), ("QUARTER", 0), ("ONE", 500)])
            .unwrap();
        let result = compute_change(c(1_200), &till).unwrap();
        assert_eq!(
            result,
            ChangeResult::Open(vec![
                Dispensed::new(Denomination::Ten, c(1_000)),
                Dispensed::new(Denomination::One, c(200)),
            ])
        );
    }

    #[test]
    fn test_negative_amount_fails_loudly() {
        assert_eq!(
            compute_change(c(-1), &standard_till()),
            Err(CoreError::NegativeAmountDue { amount_cents: -1 })
        );
    }

    #[test]
    fn test_zero_due_follows_algorithm() {
        assert_eq!(
            compute_change(Money::zero(), &Till::new()).unwrap(),
            ChangeResult::Closed(vec![])
        );
        assert_eq!(
            compute_change(Money::zero(), &standard_till()).unwrap(),
            ChangeResult::Open(vec![])
        );
    }

    #[test]
    fn test_engine_does_not_touch_till() {
        let till = standard_till();
        let before = till.clone();
        let first = compute_change(c(9_674), &till).unwrap();
        let second = compute_change(c(9_674), &till).unwrap();
        assert_eq!(first, second);
        assert_eq!(till, before);
    }

    #[test]
    fn test_result_helpers() {
        assert!(ChangeResult::InsufficientFunds.dispensed().is_empty());
        assert!(!ChangeResult::InsufficientFunds.is_dispensable());
        assert!(ChangeResult::Open(vec![]).is_dispensable());
        assert_eq!(ChangeStatus::InsufficientFunds.to_string(), "INSUFFICIENT_FUNDS");
    }

    #[test]
    fn test_serialization_shape() {
        let open = ChangeResult::Open(vec![Dispensed::new(Denomination::Quarter, c(50))]);
        assert_eq!(
            serde_json::to_value(&open).unwrap(),
            serde_json::json!({
                "status": "OPEN",
                "change": [{ "denomination": "QUARTER", "amount": 50 }]
            })
        );
        assert_eq!(
            serde_json::to_value(ChangeResult::InsufficientFunds).unwrap(),
            serde_json::json!({ "status": "INSUFFICIENT_FUNDS" })
        );
    }
}
