//! # Till Register Library
//!
//! The register's setup, state, and commands. `main.rs` only parses the
//! command line and calls [`run`].
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register Startup                                     │
//! │                                                                         │
//! │  1. Initialize tracing (stderr) ───────────────────────────────────────►│
//! │     • RUST_LOG respected, default info,till=debug                       │
//! │                                                                         │
//! │  2. Load configuration ────────────────────────────────────────────────►│
//! │     • Defaults → TILL_PRICE / TILL_DRAWER → --price / --drawer          │
//! │                                                                         │
//! │  3. Open the drawer ───────────────────────────────────────────────────►│
//! │     • TillState::new(config.initial_drawer)                             │
//! │                                                                         │
//! │  4. Ring up each CASH amount in order ─────────────────────────────────►│
//! │     • handle_purchase → status line or JSON                             │
//! │                                                                         │
//! │  5. Print the drawer ──────────────────────────────────────────────────►│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::io::Write;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::{drawer::get_drawer, purchase::handle_purchase};
use crate::error::ApiError;
use crate::state::{ConfigState, TillState};

/// Runs the register for the parsed command line, writing to stdout.
pub fn run(cli: Cli) -> Result<(), ApiError> {
    let config = load_config(&cli)?;
    let stdout = std::io::stdout();
    run_with_output(&cli, config, &mut stdout.lock())
}

/// Resolves configuration: environment over defaults, flags over both.
pub fn load_config(cli: &Cli) -> Result<ConfigState, ApiError> {
    let mut config = ConfigState::from_env()?;

    if let Some(price) = &cli.price {
        config = config.with_price(price)?;
    }
    if let Some(drawer) = &cli.drawer {
        config = config.with_drawer_json(drawer)?;
    }

    Ok(config)
}

/// Rings up every tendered amount in `cli.cash` and writes the results.
///
/// A rejected cash amount is reported and the remaining transactions still
/// run; the call fails at the end if any were rejected.
pub fn run_with_output<W: Write>(
    cli: &Cli,
    config: ConfigState,
    out: &mut W,
) -> Result<(), ApiError> {
    let till = TillState::new(config.initial_drawer.clone());
    info!(
        price = config.price_cents,
        drawer = till.snapshot().total_value().cents(),
        "register open"
    );

    let mut rejected = 0usize;
    for cash in &cli.cash {
        match handle_purchase(&till, &config, cash) {
            Ok(response) if cli.json => write_json(out, &response)?,
            Ok(response) => write_line(out, &response.message)?,
            Err(err) => {
                warn!(cash = %cash, error = %err.message, "purchase rejected");
                rejected += 1;
                if cli.json {
                    write_json(out, &err)?;
                } else {
                    write_line(out, &format!("Error: {}", err.message))?;
                }
            }
        }
    }

    if !cli.no_drawer {
        let drawer = get_drawer(&till, &config);
        if cli.json {
            write_json(out, &drawer)?;
        } else {
            write_line(out, "Drawer:")?;
            for line in &drawer.lines {
                write_line(out, &format!("  {}", line.label))?;
            }
            write_line(
                out,
                &format!("  TOTAL: {}", config.format_currency(drawer.total_cents)),
            )?;
        }
    }

    if rejected > 0 {
        return Err(ApiError::validation(format!(
            "{} of {} transactions rejected",
            rejected,
            cli.cash.len()
        )));
    }

    Ok(())
}

fn write_line<W: Write>(out: &mut W, line: &str) -> Result<(), ApiError> {
    writeln!(out, "{}", line).map_err(|e| ApiError::internal(format!("write failed: {}", e)))
}

fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> Result<(), ApiError> {
    let json = serde_json::to_string(value)
        .map_err(|e| ApiError::internal(format!("serialization failed: {}", e)))?;
    write_line(out, &json)
}

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info,till=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages, including engine classification
/// - `RUST_LOG=till=trace` - Show trace for till crates only
/// - Default: INFO, with DEBUG for till crates
///
/// Logs go to stderr so stdout carries only register output.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_shows_engine_debug() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        let directives = filter.to_string();
        assert!(directives.contains("till=debug"));
        assert!(directives.contains("info"));
    }
}
