//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `cmd_init` - Initialize the database
//! - `cmd_check` - Spending-safety verdict for one user
//! - `cmd_goal` - Savings goal projection for one user

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use dulcet_core::{advisor, goal, Database, ModelCache};

/// Open the database, running migrations if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow!("Database path is not valid UTF-8"))?;
    Database::new(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("Initializing database at {}...", db_path.display());

    open_db(db_path)?;

    println!("Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Import records: dulcet import --file incomes.csv --collection income");
    println!("  2. Start the API:  dulcet serve");

    Ok(())
}

pub fn cmd_check(db_path: &Path, user: &str) -> Result<()> {
    let db = open_db(db_path)?;

    let check = advisor::check_spending(&db, user)?;
    println!("{}", serde_json::to_string_pretty(&check)?);

    Ok(())
}

pub fn cmd_goal(db_path: &Path, model_dir: &Path, user: &str, price: f64) -> Result<()> {
    let db = open_db(db_path)?;
    let cache = ModelCache::new(model_dir);

    let projection = goal::project_goal(&db, &cache, user, price)?;
    println!("{}", serde_json::to_string_pretty(&projection)?);

    Ok(())
}
