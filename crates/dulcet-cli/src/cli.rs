//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dulcet - Saving tips from your income and expense history
#[derive(Parser)]
#[command(name = "dulcet")]
#[command(about = "Spending-safety checks and savings goal projections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "dulcet.db", global = true)]
    pub db: PathBuf,

    /// Directory for per-user fitted-model files
    #[arg(long, default_value = "models", global = true)]
    pub model_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Import income or expense records from CSV
    Import {
        /// CSV file to import (header: user_id,month,amount)
        #[arg(short, long)]
        file: PathBuf,

        /// Target collection: income or expense
        #[arg(short, long)]
        collection: String,
    },

    /// Check whether a user's spending is in the safe range
    Check {
        /// User identifier
        #[arg(short, long)]
        user: String,
    },

    /// Project the months needed to save toward a purchase goal
    Goal {
        /// User identifier
        #[arg(short, long)]
        user: String,

        /// Goal price
        #[arg(short, long)]
        price: f64,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}
