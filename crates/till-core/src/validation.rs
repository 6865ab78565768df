//! # Validation Module
//!
//! Input validation utilities for Till.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Register (CLI / config)                                      │
//! │  ├── parse_amount: "19.5" → 1950 cents, no floats involved             │
//! │  └── cash < price rejected before the engine runs                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Till construction                                             │
//! │  └── validate_stock_amount: no negative drawer amounts                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Change engine                                                 │
//! │  └── validate_amount_due: fails loudly on a negative amount            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::parse_amount;
//!
//! assert_eq!(parse_amount("cash", "20").unwrap().cents(), 2000);
//! assert_eq!(parse_amount("cash", "$19.5").unwrap().cents(), 1950);
//! assert!(parse_amount("cash", "19.555").is_err());
//! ```

use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Fractional digits of the minor unit (cents).
const MINOR_DIGITS: usize = 2;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates the amount handed to the change engine.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is accepted here; the register never asks for zero change
pub fn validate_amount_due(amount: Money) -> CoreResult<()> {
    if amount.is_negative() {
        return Err(CoreError::NegativeAmountDue {
            amount_cents: amount.cents(),
        });
    }

    Ok(())
}

/// Validates the stock held for one denomination.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Need not be a whole multiple of the face value; the engine only
///   dispenses whole units
pub fn validate_stock_amount(denomination: Denomination, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: format!("{} stock", denomination),
            value: amount.cents(),
        });
    }

    Ok(())
}

// =============================================================================
// Parsers
// =============================================================================

/// Parses a decimal amount in major units into exact cents.
///
/// ## Accepted Input
/// - `"20"`, `"20.0"`, `"19.5"`, `"0.05"`, `".25"`
/// - An optional leading `$` and surrounding whitespace
/// - Extra trailing zeros past the cents position (`"19.500"`)
///
/// ## Rejected Input
/// ```text
/// ""          → Required
/// "-1"        → MustNotBeNegative
/// "19.555"    → TooPrecise
/// "abc", "1." → InvalidFormat
/// ```
///
/// No floating point is involved at any step: the whole and fractional
/// digit runs are parsed as integers and combined.
pub fn parse_amount(field: &str, input: &str) -> ValidationResult<Money> {
    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let digits = unsigned.strip_prefix('$').unwrap_or(unsigned).trim_start();

    if digits.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let (whole, frac) = match digits.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (digits, None),
    };

    if !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("must be a number"));
    }

    let frac = match frac {
        Some(f) if f.is_empty() => return Err(invalid("missing digits after decimal point")),
        Some(f) if !f.bytes().all(|b| b.is_ascii_digit()) => {
            return Err(invalid("must be a number"))
        }
        Some(f) => f,
        None => "",
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid("must be a number"));
    }

    if frac.len() > MINOR_DIGITS && frac[MINOR_DIGITS..].bytes().any(|b| b != b'0') {
        return Err(ValidationError::TooPrecise {
            field: field.to_string(),
            max_decimals: MINOR_DIGITS as u8,
        });
    }

    let whole_cents = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<i64>()
            .ok()
            .and_then(|w| w.checked_mul(100))
            .ok_or_else(|| invalid("amount is too large"))?
    };

    let minor = frac.get(..MINOR_DIGITS.min(frac.len())).unwrap_or("");
    let minor_cents = match minor.len() {
        0 => 0,
        1 => i64::from(minor.as_bytes()[0] - b'0') * 10,
        _ => i64::from(minor.as_bytes()[0] - b'0') * 10 + i64::from(minor.as_bytes()[1] - b'0'),
    };

    let cents = whole_cents
        .checked_add(minor_cents)
        .ok_or_else(|| invalid("amount is too large"))?;

    if negative && cents != 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
            value: -cents,
        });
    }

    Ok(Money::from_cents(cents))
}

// =============================================================================
// Unit Tests
// =============================================================================
