//! # Configuration State
//!
//! Register configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--price`, `--drawer`)
//! 2. Environment variables (`TILL_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use till_core::validation::parse_amount;
use till_core::{Denomination, Money, Till};

/// Environment variable holding the item price in major units ("19.50").
pub const PRICE_VAR: &str = "TILL_PRICE";

/// Environment variable holding the opening drawer as a JSON object of
/// denomination name to cents: `{"PENNY": 101, "ONE HUNDRED": 10000}`.
pub const DRAWER_VAR: &str = "TILL_DRAWER";

/// Register configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Price of the item being sold, in cents
    pub price_cents: i64,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Drawer contents when the register opens
    pub initial_drawer: Till,
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    #[error("Invalid drawer: {0}")]
    InvalidDrawer(String),
}

impl Default for ConfigState {
    /// Returns the standard demo register.
    ///
    /// ## Default Values
    /// - Price: $19.50
    /// - Currency: USD ($)
    /// - Drawer: $335.41 spread over every denomination
    fn default() -> Self {
        ConfigState {
            price_cents: 1950,
            currency_symbol: "$".to_string(),
            initial_drawer: default_drawer(),
        }
    }
}

/// PENNY $1.01, NICKEL $2.05, DIME $3.10, QUARTER $4.25, ONE $90,
/// FIVE $55, TEN $20, TWENTY $60, ONE HUNDRED $100.
fn default_drawer() -> Till {
    Till::from_counts([
        (Denomination::Penny, 101),
        (Denomination::Nickel, 41),
        (Denomination::Dime, 31),
        (Denomination::Quarter, 17),
        (Denomination::One, 90),
        (Denomination::Five, 11),
        (Denomination::Ten, 2),
        (Denomination::Twenty, 3),
        (Denomination::OneHundred, 1),
    ])
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TILL_PRICE`: Override the item price (e.g., "3.26")
    /// - `TILL_DRAWER`: Override the opening drawer (JSON, cents)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(price) = lookup(PRICE_VAR) {
            config = config.with_price(&price).map_err(|e| match e {
                ConfigError::InvalidValue { reason, .. } => ConfigError::InvalidValue {
                    var: PRICE_VAR.to_string(),
                    reason,
                },
                other => other,
            })?;
        }

        if let Some(drawer) = lookup(DRAWER_VAR) {
            config = config.with_drawer_json(&drawer)?;
        }

        Ok(config)
    }

    /// Replaces the price with a decimal major-unit string.
    pub fn with_price(mut self, price: &str) -> Result<Self, ConfigError> {
        let price = parse_amount("price", price).map_err(|e| ConfigError::InvalidValue {
            var: "price".to_string(),
            reason: e.to_string(),
        })?;
        self.price_cents = price.cents();
        Ok(self)
    }

    /// Replaces the opening drawer with a JSON object of name to cents.
    ///
    /// Denominations missing from the object start at zero.
    pub fn with_drawer_json(mut self, json: &str) -> Result<Self, ConfigError> {
        let entries: BTreeMap<String, i64> =
            serde_json::from_str(json).map_err(|e| ConfigError::InvalidDrawer(e.to_string()))?;

        self.initial_drawer = Till::from_named_cents(entries.iter().map(|(k, v)| (k.as_str(), *v)))
            .map_err(|e| ConfigError::InvalidDrawer(e.to_string()))?;
        Ok(self)
    }

    /// The item price.
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Formats a cent amount for the customer, trimming trailing zeros
    /// from the fractional part.
    ///
    /// ## Example
    /// ```rust
    /// use till_register_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(6000), "$60");
    /// assert_eq!(config.format_currency(50), "$0.5");
    /// assert_eq!(config.format_currency(4), "$0.04");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let whole = (cents / 100).abs();
        let frac = (cents % 100).abs();

        let frac = if frac == 0 {
            String::new()
        } else {
            let digits = format!("{:02}", frac);
            format!(".{}", digits.trim_end_matches('0'))
        };

        format!("{}{}{}{}", sign, self.currency_symbol, whole, frac)
    }
}
