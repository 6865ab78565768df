//! # Till Register Entry Point
//!
//! ```text
//! $ till-register 20 19.5
//! Status: OPEN QUARTER: $0.5
//! No change due - customer paid with exact cash
//! Drawer:
//!   ONE HUNDRED: $100
//!   ...
//! ```

use std::process::ExitCode;

use clap::Parser;
use till_register_lib::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The actual setup is in lib.rs for better testability
    till_register_lib::init_tracing();

    match till_register_lib::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
