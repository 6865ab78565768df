//! # till-core: Pure Change-Making Logic
//!
//! This crate is the **heart** of Till. It decides which coins and bills go
//! back to the customer, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Till Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Register (apps/register)                      │   │
//! │  │   parse cash ──► cash vs price ──► amount due ──► print result  │   │
//! │  │                 (exact cash short-circuits here)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ compute_change(due, &till)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌────────────┐  ┌──────────┐  ┌───────────┐  │   │
//! │  │   │   money    │  │denomination│  │   till   │  │  change   │  │   │
//! │  │   │   Money    │  │ face value │  │  stock   │  │  engine   │  │   │
//! │  │   └────────────┘  └────────────┘  └──────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL DRAWER • NO FLOATS • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`denomination`] - The fixed coin/bill set, highest face value first
//! - [`till`] - Drawer stock per denomination
//! - [`change`] - The change engine and its three-way result
//! - [`validation`] - Amount parsing and contract checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{compute_change, ChangeResult, Money, Till};
//!
//! let mut till = Till::from_named_cents([("QUARTER", 425), ("ONE", 9_000)]).unwrap();
//!
//! let result = compute_change(Money::from_cents(125), &till).unwrap();
//!
//! // The engine never mutates the drawer; the caller commits
//! if let ChangeResult::Open(parts) = &result {
//!     till.commit(parts);
//! }
//! assert_eq!(till.total_value().cents(), 425 + 9_000 - 125);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod denomination;
pub mod error;
pub mod money;
pub mod till;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Money` instead of
// `use till_core::money::Money`

pub use change::{compute_change, ChangeResult, ChangeStatus, Dispensed};
pub use denomination::Denomination;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use till::Till;
