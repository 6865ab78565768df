//! # Commands Module
//!
//! Operations the register front end exposes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── purchase.rs  ◄─── Ring up a cash sale, make change
//! └── drawer.rs    ◄─── Drawer listing
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Reads price, mutates the drawer
//! fn handle_purchase(till: &TillState, config: &ConfigState, cash: &str)
//!
//! // Reads the drawer, formats with config
//! fn get_drawer(till: &TillState, config: &ConfigState)
//! ```

pub mod drawer;
pub mod purchase;
