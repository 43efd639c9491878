//! labkit command-line front end
//!
//! Thin composition root over `labkit-core`:
//! - `discount`: apply a percentage discount to a price
//! - `posts`: fetch a user's posts from the configured API
//! - `counter`: replay increment/decrement/reset on a bounded counter

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Discount { price, percent } => commands::discount(&price, &percent),
        Command::Posts { user_id, json } => commands::posts(&user_id, json).await,
        Command::Counter { initial, max, ops } => commands::counter(initial, max, &ops),
    }
}
