//! Account Ledger HTTP server
//!
//! Serves the seeded in-memory ledger over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --bind 0.0.0.0:8000 --workers 4
//! RUST_LOG=account_ledger=debug cargo run -- --log-format json
//! ```
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown (Ctrl-C)
//! - 1: Error (address in use, runtime could not start, etc.)

use account_ledger::{cli, observability, server, Ledger};
use std::process;
use std::sync::Arc;
use tracing::info;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    observability::init(args.log_format);

    let config = args.to_server_config();

    let ledger = Arc::new(Ledger::seeded());
    for account in ledger.snapshot() {
        info!(
            account_number = %account.account_number,
            balance = %account.balance,
            "account provisioned"
        );
    }

    if let Err(e) = server::serve(config, ledger) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
