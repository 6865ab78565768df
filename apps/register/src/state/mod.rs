//! # State Module
//!
//! Manages application state for the register.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │        TillState         │        │       ConfigState        │      │
//! │  │                          │        │                          │      │
//! │  │  Arc<Mutex<Till>>        │        │  price_cents             │      │
//! │  │  (the live drawer)       │        │  currency_symbol         │      │
//! │  │                          │        │  initial_drawer          │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • TillState: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod till;

pub use config::{ConfigError, ConfigState, DRAWER_VAR, PRICE_VAR};
pub use till::{apply_result, TillState};
