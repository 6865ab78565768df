//! # Till State
//!
//! Owns the live cash drawer for the session.
//!
//! ## Thread Safety
//! The till is wrapped in `Arc<Mutex<T>>` because:
//! 1. It is the only mutable state in the register
//! 2. One transaction's commit must land before the next snapshot is taken
//! 3. The change engine itself takes no locks
//!
//! ## Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Till State Operations                                │
//! │                                                                         │
//! │  handle_purchase()                                                      │
//! │       │                                                                 │
//! │       ├── lock ──► compute_change(due, &till) ──► apply(result) ──┐     │
//! │       │                                                           │     │
//! │       │            (snapshot and commit under ONE lock)           │     │
//! │       ◄───────────────────────────────────────────────── unlock ──┘     │
//! │                                                                         │
//! │  get_drawer() ──► snapshot() ──► (read only)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use till_core::{ChangeResult, Till};
use tracing::debug;

/// Applies an accepted change result to a drawer.
///
/// - `Open`: each dispensed denomination is debited
/// - `Closed`: the drawer is emptied
/// - `InsufficientFunds`: nothing changes
pub fn apply_result(till: &mut Till, result: &ChangeResult) {
    match result {
        ChangeResult::Open(parts) => till.commit(parts),
        ChangeResult::Closed(_) => till.zero_all(),
        ChangeResult::InsufficientFunds => {}
    }
}

/// Register-managed till state.
#[derive(Debug, Clone)]
pub struct TillState {
    till: Arc<Mutex<Till>>,
}

impl TillState {
    /// Opens the register with the given drawer.
    pub fn new(initial: Till) -> Self {
        TillState {
            till: Arc::new(Mutex::new(initial)),
        }
    }

    /// Executes a function with read access to the till.
    pub fn with_till<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Till) -> R,
    {
        // A panic mid-transaction never leaves a partial commit (commit is
        // infallible), so a poisoned lock still guards a consistent drawer.
        let till = self.till.lock().unwrap_or_else(PoisonError::into_inner);
        f(&till)
    }

    /// Executes a function with write access to the till.
    pub fn with_till_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Till) -> R,
    {
        let mut till = self.till.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut till)
    }

    /// Copy of the current drawer.
    pub fn snapshot(&self) -> Till {
        self.with_till(Till::clone)
    }

    /// Runs `compute` against the current drawer and applies the result it
    /// returns, all under one lock.
    pub fn transact<F, E>(&self, compute: F) -> Result<ChangeResult, E>
    where
        F: FnOnce(&Till) -> Result<ChangeResult, E>,
    {
        self.with_till_mut(|till| {
            let result = compute(till)?;
            apply_result(till, &result);
            debug!(
                status = %result.status(),
                remaining = till.total_value().cents(),
                "till updated"
            );
            Ok(result)
        })
    }
}
