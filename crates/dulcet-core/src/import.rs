//! CSV import for seeding income/expense records
//!
//! Expected header: `user_id,month,amount`. The month and amount
//! columns may be empty; presence is only enforced at evaluation time.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::db::Database;
use crate::error::Result;

/// Which store collection a file imports into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Income,
    Expense,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" | "incomes" => Ok(Self::Income),
            "expense" | "expenses" => Ok(Self::Expense),
            _ => Err(format!("Unknown collection: {} (use income or expense)", s)),
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct CsvRecord {
    user_id: String,
    month: Option<String>,
    amount: Option<f64>,
}

/// Import records from a CSV file into one collection
///
/// Returns the number of records inserted.
pub fn import_csv(db: &Database, path: &Path, collection: Collection) -> Result<usize> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut count = 0;

    for record in reader.deserialize::<CsvRecord>() {
        let record = record?;
        match collection {
            Collection::Income => {
                db.add_income(&record.user_id, record.month.as_deref(), record.amount)?
            }
            Collection::Expense => {
                db.add_expense(&record.user_id, record.month.as_deref(), record.amount)?
            }
        }
        count += 1;
    }

    info!(
        collection = collection.as_str(),
        count,
        file = %path.display(),
        "imported records"
    );
    Ok(count)
}
