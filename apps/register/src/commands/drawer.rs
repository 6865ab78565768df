//! # Drawer Command
//!
//! Lists what is in the till, every denomination highest first.

use serde::Serialize;
use till_core::Denomination;
use tracing::debug;

use crate::state::{ConfigState, TillState};

/// One line of the drawer listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerLine {
    pub denomination: Denomination,
    pub amount_cents: i64,
    /// `"QUARTER: $3.75"`
    pub label: String,
}

/// Drawer contents for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerResponse {
    pub lines: Vec<DrawerLine>,
    pub total_cents: i64,
}

/// Gets the current drawer. Denominations with no stock are listed with
/// `$0`.
pub fn get_drawer(till: &TillState, config: &ConfigState) -> DrawerResponse {
    debug!("get_drawer command");

    till.with_till(|t| DrawerResponse {
        lines: t
            .contents()
            .into_iter()
            .map(|(denomination, amount)| DrawerLine {
                denomination,
                amount_cents: amount.cents(),
                label: format!(
                    "{}: {}",
                    denomination,
                    config.format_currency(amount.cents())
                ),
            })
            .collect(),
        total_cents: t.total_value().cents(),
    })
}
