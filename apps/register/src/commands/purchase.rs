//! # Purchase Command
//!
//! Rings up one cash sale: checks the tendered cash against the price, asks
//! the change engine for a breakdown, and commits it to the drawer.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  handle_purchase(cash = "20")                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_amount ──── bad input ──────────────► Err(VALIDATION_ERROR)      │
//! │       │                                                                 │
//! │       ├── cash <  price ──► CustomerShort   (engine not called)        │
//! │       ├── cash == price ──► ExactPayment    (engine not called)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  due = cash - price                                                     │
//! │  TillState::transact(compute_change(due, &till))                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Status: OPEN QUARTER: $0.5"                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use till_core::validation::parse_amount;
use till_core::{compute_change, ChangeResult, Dispensed, Money};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{ConfigState, TillState};

/// Shown when the tendered cash is below the price.
pub const CUSTOMER_SHORT_MESSAGE: &str = "Customer does not have enough money to purchase the item";

/// Shown when the tendered cash equals the price.
pub const EXACT_PAYMENT_MESSAGE: &str = "No change due - customer paid with exact cash";

/// What happened at the register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "result", rename_all = "snake_case")]
pub enum PurchaseOutcome {
    /// Cash tendered is less than the price. Nothing was sold.
    CustomerShort,
    /// Cash tendered equals the price. No change is due.
    ExactPayment,
    /// The change engine ran; the drawer was updated if it could pay out.
    Change(ChangeResult),
}

/// Purchase response for display and `--json` output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub transaction_id: String,
    pub timestamp: DateTime<Utc>,
    pub price_cents: i64,
    pub tendered_cents: i64,
    /// `tendered - price`, or 0 when the customer is short
    pub change_due_cents: i64,
    #[serde(flatten)]
    pub outcome: PurchaseOutcome,
    /// One-line summary for the operator
    pub message: String,
}

/// Handles a purchase with `cash` tendered (decimal major units).
///
/// ## Errors
/// - `VALIDATION_ERROR` if `cash` is not a valid non-negative amount
///
/// A drawer that cannot pay out is NOT an error: the response carries
/// `Change(InsufficientFunds)` and the drawer is left untouched.
pub fn handle_purchase(
    till: &TillState,
    config: &ConfigState,
    cash: &str,
) -> Result<PurchaseResponse, ApiError> {
    debug!(cash = %cash, price = config.price_cents, "handle_purchase command");

    let tendered = parse_amount("cash", cash)?;
    let price = config.price();

    let (outcome, change_due, message) = if tendered < price {
        info!(tendered = tendered.cents(), price = price.cents(), "customer short");
        (
            PurchaseOutcome::CustomerShort,
            Money::zero(),
            CUSTOMER_SHORT_MESSAGE.to_string(),
        )
    } else if tendered == price {
        info!(tendered = tendered.cents(), "exact payment");
        (
            PurchaseOutcome::ExactPayment,
            Money::zero(),
            EXACT_PAYMENT_MESSAGE.to_string(),
        )
    } else {
        let due = tendered - price;
        let result = till.transact(|t| compute_change(due, t))?;
        let message = render_status(config, &result);

        info!(
            due = due.cents(),
            status = %result.status(),
            dispensed = result.total_dispensed().cents(),
            "change computed"
        );
        (PurchaseOutcome::Change(result), due, message)
    };

    Ok(PurchaseResponse {
        transaction_id: Uuid::new_v4().to_string(),
        timestamp: Utc::now(),
        price_cents: price.cents(),
        tendered_cents: tendered.cents(),
        change_due_cents: change_due.cents(),
        outcome,
        message,
    })
}

/// Formats a change result as the status line shown to the operator.
///
/// ## Example
/// ```rust
/// use till_core::{ChangeResult, Denomination, Dispensed, Money};
/// use till_register_lib::commands::purchase::render_status;
/// use till_register_lib::state::ConfigState;
///
/// let config = ConfigState::default();
/// let open = ChangeResult::Open(vec![Dispensed::new(Denomination::Quarter, Money::from_cents(50))]);
///
/// assert_eq!(render_status(&config, &open), "Status: OPEN QUARTER: $0.5");
/// assert_eq!(
///     render_status(&config, &ChangeResult::InsufficientFunds),
///     "Status: INSUFFICIENT_FUNDS"
/// );
/// ```
pub fn render_status(config: &ConfigState, result: &ChangeResult) -> String {
    let mut line = format!("Status: {}", result.status());
    for part in result.dispensed() {
        line.push(' ');
        line.push_str(&render_part(config, part));
    }
    line
}

fn render_part(config: &ConfigState, part: &Dispensed) -> String {
    format!(
        "{}: {}",
        part.denomination,
        config.format_currency(part.amount.cents())
    )
}
