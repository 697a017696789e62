//! Dulcet CLI - Saving tips from income/expense records
//!
//! Usage:
//!   dulcet init                                 Initialize database
//!   dulcet import --file F --collection income  Seed records from CSV
//!   dulcet check --user U                       Spending-safety verdict
//!   dulcet goal --user U --price P              Goal projection
//!   dulcet serve --port 3000                    Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Import { file, collection } => {
            commands::cmd_import(&cli.db, &file, &collection)
        }
        Commands::Check { user } => commands::cmd_check(&cli.db, &user),
        Commands::Goal { user, price } => {
            commands::cmd_goal(&cli.db, &cli.model_dir, &user, price)
        }
        Commands::Serve { port, host } => {
            commands::cmd_serve(&cli.db, &cli.model_dir, &host, port).await
        }
    }
}
