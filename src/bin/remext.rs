//! Remext CLI Binary
//!
//! Command-line entry point for batch remote extension normalization.

use clap::Parser;
use remext::cli::{Cli, CliContext};
use remext::logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    logging::init(&context.config().log_level);

    if let Err(e) = context.execute().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
