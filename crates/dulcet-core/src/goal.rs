//! Savings goal projection
//!
//! Joins a user's monthly income and expense history into a savings
//! series, fits (or loads) a regression of savings against the month
//! index, forecasts the next twelve months, and greedily accumulates
//! the non-negative forecast savings until the goal price is reached.

use chrono::{Duration, Utc};
use tracing::debug;

use crate::db::Database;
use crate::error::{Error, Result};
use crate::model_cache::ModelCache;
use crate::models::{GoalProjection, MonthlyAmount};
use crate::regression::LinearModel;

/// Fixed forecast lookahead
pub const FORECAST_WINDOW_MONTHS: usize = 12;

/// Minimum joined monthly rows required to fit a model
pub const MIN_TRAINING_MONTHS: usize = 3;

/// Calendar approximation used for the target date
const DAYS_PER_MONTH: i64 = 30;

/// Project how many forecast months of saving are needed to afford
/// `goal_price`
///
/// A previously fitted model for the user is reused when the cache
/// holds one; otherwise a model is trained on the joined history and
/// persisted. The history join runs on both paths since the forecast
/// starts where the historical series ends.
pub fn project_goal(
    db: &Database,
    cache: &ModelCache,
    user_id: &str,
    goal_price: f64,
) -> Result<GoalProjection> {
    if !goal_price.is_finite() || goal_price <= 0.0 {
        return Err(Error::InvalidData(
            "goal_price must be a positive number".to_string(),
        ));
    }

    let history = savings_history(db, user_id)?;
    if history.len() < MIN_TRAINING_MONTHS {
        return Err(Error::InsufficientData(
            "Not enough data to train model.".to_string(),
        ));
    }

    let model = match cache.load(user_id) {
        Some(model) => model,
        None => {
            let features: Vec<f64> = (0..history.len()).map(|i| i as f64).collect();
            let savings: Vec<f64> = history.iter().map(|row| row.amount).collect();
            let model = LinearModel::fit(&features, &savings)?;
            cache.store(user_id, &model)?;
            model
        }
    };

    // Forecast continues from the end of the historical series
    let start = history.len();
    let mut total_saving = 0.0;
    let mut months_needed: u32 = 0;
    let mut achieved = false;

    for index in start..start + FORECAST_WINDOW_MONTHS {
        let predicted = model.predict(index as f64);
        if predicted < 0.0 {
            // Negative forecast months contribute neither savings nor time
            continue;
        }
        total_saving += predicted;
        months_needed += 1;
        if total_saving >= goal_price {
            achieved = true;
            break;
        }
    }

    if !achieved {
        return Err(Error::GoalNotAchievable(
            "Goal not achievable within 12 months based on current savings pattern.".to_string(),
        ));
    }

    debug!(
        user_id,
        months_needed, total_saving, "goal reachable within forecast window"
    );

    let monthly_saving_needed = round2(goal_price / months_needed as f64);
    let target_date =
        Utc::now().date_naive() + Duration::days(DAYS_PER_MONTH * months_needed as i64);

    Ok(GoalProjection {
        months_needed,
        monthly_saving_needed,
        target_date: target_date.format("%B %Y").to_string(),
    })
}

/// Inner-join monthly income and expense rows on month and compute
/// savings = income - expense
///
/// Months present on only one side are dropped. The join is sorted by
/// month before index encoding; months are "YYYY-MM" strings, so
/// lexicographic order is chronological.
fn savings_history(db: &Database, user_id: &str) -> Result<Vec<MonthlyAmount>> {
    let incomes = db.monthly_incomes(user_id)?;
    let expenses = db.monthly_expenses(user_id)?;

    let expense_by_month: std::collections::HashMap<&str, f64> = expenses
        .iter()
        .map(|row| (row.month.as_str(), row.amount))
        .collect();

    let mut joined: Vec<MonthlyAmount> = incomes
        .iter()
        .filter_map(|income| {
            expense_by_month.get(income.month.as_str()).map(|expense| MonthlyAmount {
                month: income.month.clone(),
                amount: income.amount - expense,
            })
        })
        .collect();

    joined.sort_by(|a, b| a.month.cmp(&b.month));
    Ok(joined)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
