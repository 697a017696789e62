//! Dulcet Core Library
//!
//! Shared functionality for the Dulcet saving-tips service:
//! - Store access and migrations for income/expense records
//! - Single-feature linear regression fit/predict
//! - Per-user fitted-model file cache
//! - Spending-safety evaluation
//! - Savings goal projection
//! - CSV import for seeding records

pub mod advisor;
pub mod db;
pub mod error;
pub mod goal;
pub mod import;
pub mod model_cache;
pub mod models;
pub mod regression;

pub use advisor::{check_spending, SAFETY_THRESHOLD};
pub use db::Database;
pub use error::{Error, Result};
pub use goal::{project_goal, FORECAST_WINDOW_MONTHS, MIN_TRAINING_MONTHS};
pub use import::{import_csv, Collection};
pub use model_cache::ModelCache;
pub use models::{ExpenseRecord, GoalProjection, IncomeRecord, MonthlyAmount, SpendingCheck};
pub use regression::LinearModel;
