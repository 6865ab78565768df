//! # API Error Type
//!
//! Unified error type for register commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Register                           │
//! │                                                                         │
//! │  Command Function                                                       │
//! │  Result<T, ApiError>                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Bad cash input? ──── ValidationError::InvalidFormat ──┐               │
//! │         │                                              │               │
//! │         ▼                                              ▼               │
//! │  Engine contract? ─── CoreError::NegativeAmountDue ─► ApiError ──► CLI │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success (including INSUFFICIENT_FUNDS) ─────────────────────────► CLI │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A drawer that can't make change is a normal purchase outcome, never an
//! `ApiError`.

use serde::Serialize;
use till_core::{CoreError, ValidationError};

use crate::state::ConfigError;

/// API error returned from register commands.
///
/// ## Serialization
/// This is what `--json` output shows when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "cash has invalid format: must be a number"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// Business rule violated
    BusinessLogic,

    /// Configuration could not be loaded
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NegativeAmountDue { amount_cents } => {
                tracing::error!(amount_cents, "change engine called with negative amount");
                ApiError::new(
                    ErrorCode::BusinessLogic,
                    format!("Amount due cannot be negative: {} cents", amount_cents),
                )
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_validation_code() {
        let err: ApiError = ValidationError::Required {
            field: "cash".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "cash is required");
    }

    #[test]
    fn test_negative_amount_maps_to_business_logic() {
        let err: ApiError = CoreError::NegativeAmountDue { amount_cents: -5 }.into();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(err.to_string(), "[BusinessLogic] Amount due cannot be negative: -5 cents");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::internal("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "INTERNAL", "message": "boom" }));
    }
}
