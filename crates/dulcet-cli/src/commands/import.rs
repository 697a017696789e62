//! Import command implementation

use std::path::Path;

use anyhow::{Context, Result};
use dulcet_core::{import_csv, Collection};

use super::open_db;

pub fn cmd_import(db_path: &Path, file: &Path, collection: &str) -> Result<()> {
    let collection: Collection = collection
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    println!("Importing {} records from {}...", collection, file.display());

    let db = open_db(db_path)?;
    let count = import_csv(&db, file, collection).context("Import failed")?;

    println!("Imported {} {} record(s)", count, collection);

    Ok(())
}
