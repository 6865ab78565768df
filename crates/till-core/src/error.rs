//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Contract violations on engine calls            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  register errors (app crate)                                           │
//! │  └── ApiError         - What the operator sees (serialized)            │
//! │                                                                         │
//! │  Flow: CoreError / ValidationError → ApiError → Operator               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not Errors
//! Running out of change is NOT an error. `ChangeResult::InsufficientFunds`
//! is a normal outcome of [`crate::change::compute_change`]. The types here
//! cover callers breaking the contract (negative amounts, unknown
//! denominations, unparseable input).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The change engine was asked for a negative amount.
    ///
    /// ## When This Occurs
    /// - Caller computed `tendered - price` without rejecting a short payment
    /// - The register always rejects `cash < price` before this point
    #[error("Amount due cannot be negative: {amount_cents} cents")]
    NegativeAmountDue { amount_cents: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before the engine runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative (got {value})")]
    MustNotBeNegative { field: String, value: i64 },

    /// Invalid format (e.g., "12.3.4", "abc").
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Amount has more fractional digits than the currency supports.
    #[error("{field} must have at most {max_decimals} decimal places")]
    TooPrecise { field: String, max_decimals: u8 },

    /// Name does not match any denomination the till knows.
    #[error("Unknown denomination: {name}")]
    UnknownDenomination { name: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NegativeAmountDue { amount_cents: -50 };
        assert_eq!(err.to_string(), "Amount due cannot be negative: -50 cents");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::UnknownDenomination {
            name: "FIFTY".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown denomination: FIFTY");

        let err = ValidationError::MustNotBeNegative {
            field: "PENNY stock".to_string(),
            value: -1,
        };
        assert_eq!(err.to_string(), "PENNY stock must not be negative (got -1)");

        let err = ValidationError::TooPrecise {
            field: "cash".to_string(),
            max_decimals: 2,
        };
        assert_eq!(err.to_string(), "cash must have at most 2 decimal places");
    }
}
