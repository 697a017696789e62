//! Domain models for Dulcet

use serde::{Deserialize, Serialize};

/// An income record from the store
///
/// `month` is only populated for records used by the goal engine;
/// `amount` is nullable because upstream writers do not guarantee it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub user_id: String,
    pub month: Option<String>,
    pub amount: Option<f64>,
}

/// An expense record from the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub user_id: String,
    pub month: Option<String>,
    pub amount: Option<f64>,
}

/// A single month's amount, used by the goal engine after validation
///
/// Rows with a NULL month or amount never reach this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmount {
    pub month: String,
    pub amount: f64,
}

/// Spending-safety verdict for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpendingCheck {
    pub user_id: String,
    pub alert: String,
}

/// Result of a savings goal projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalProjection {
    /// Forecast months contributing savings before the goal is reached
    pub months_needed: u32,
    /// goal_price / months_needed, rounded to 2 decimal places
    pub monthly_saving_needed: f64,
    /// Today + 30 days per month needed, formatted as "Month Year"
    pub target_date: String,
}
