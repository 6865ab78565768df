//! Command-line interface definitions.

use clap::Parser;

/// Till register - ring up cash sales and make change from a finite drawer.
///
/// Each CASH amount is one customer paying for the item. Transactions run in
/// order against the same drawer.
#[derive(Parser, Debug)]
#[command(name = "till-register")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Item price in dollars (overrides TILL_PRICE)
    #[arg(long, value_name = "DOLLARS")]
    pub price: Option<String>,

    /// Opening drawer as JSON cents, e.g. '{"QUARTER": 425}' (overrides TILL_DRAWER)
    #[arg(long, value_name = "JSON")]
    pub drawer: Option<String>,

    /// Print each response as JSON instead of a status line
    #[arg(long)]
    pub json: bool,

    /// Skip the drawer listing after the last transaction
    #[arg(long)]
    pub no_drawer: bool,

    /// Cash tendered by each customer, in dollars
    #[arg(required = true, value_name = "CASH", allow_negative_numbers = true)]
    pub cash: Vec<String>,
}
