//! Spending-safety evaluation
//!
//! Fetches a user's income and expenses, fits a regression of expense
//! amounts against the (constant) income feature, and reports whether
//! total spending exceeds the safety threshold.

use tracing::debug;

use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::SpendingCheck;
use crate::regression::LinearModel;

/// Spending above this share of income is flagged as unsafe
pub const SAFETY_THRESHOLD: f64 = 0.9;

const ALERT_UNSAFE: &str = "Your expense is NOT in a safe range.";
const ALERT_SAFE: &str = "Your expense is in a safe range.";

/// Evaluate whether a user's spending is within the safe range
///
/// Fails with `NotFound` when the user has no income record and with
/// `InvalidData` when the income amount is missing or the user has no
/// expense records.
pub fn check_spending(db: &Database, user_id: &str) -> Result<SpendingCheck> {
    let income_record = db
        .get_income(user_id)?
        .ok_or_else(|| Error::NotFound("User income data not found".to_string()))?;

    let expenses = db.list_expense_amounts(user_id)?;

    let income = match income_record.amount {
        Some(amount) if !expenses.is_empty() => amount,
        _ => return Err(Error::InvalidData("Incomplete user data".to_string())),
    };

    // The feature is the single income value repeated per expense, so
    // the fit degenerates to the expense mean. The prediction is not
    // part of the response; it is surfaced in logs only.
    let features = vec![income; expenses.len()];
    let model = LinearModel::fit(&features, &expenses)?;
    debug!(
        user_id,
        predicted_expense = model.predict(income),
        "fitted spending model"
    );

    let total: f64 = expenses.iter().sum();
    let alert = if total > SAFETY_THRESHOLD * income {
        ALERT_UNSAFE
    } else {
        ALERT_SAFE
    };

    Ok(SpendingCheck {
        user_id: user_id.to_string(),
        alert: alert.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_with_income(user: &str, income: f64, expenses: &[f64]) -> Database {
        let db = Database::in_memory().unwrap();
        db.add_income(user, None, Some(income)).unwrap();
        for e in expenses {
            db.add_expense(user, None, Some(*e)).unwrap();
        }
        db
    }

    #[test]
    fn overspending_is_flagged() {
        // 1000 + 1200 + 1100 = 3300 > 0.9 * 3000
        let db = db_with_income("alice", 3000.0, &[1000.0, 1200.0, 1100.0]);
        let check = check_spending(&db, "alice").unwrap();
        assert_eq!(check.user_id, "alice");
        assert_eq!(check.alert, ALERT_UNSAFE);
    }

    #[test]
    fn spending_below_threshold_is_safe() {
        let db = db_with_income("alice", 3000.0, &[1000.0, 1200.0]);
        let check = check_spending(&db, "alice").unwrap();
        assert_eq!(check.alert, ALERT_SAFE);
    }

    #[test]
    fn spending_exactly_at_threshold_is_safe() {
        // 2700 == 0.9 * 3000; comparison is strict
        let db = db_with_income("alice", 3000.0, &[1500.0, 1200.0]);
        let check = check_spending(&db, "alice").unwrap();
        assert_eq!(check.alert, ALERT_SAFE);
    }

    #[test]
    fn missing_income_record_is_not_found() {
        let db = Database::in_memory().unwrap();
        db.add_expense("alice", None, Some(100.0)).unwrap();

        match check_spending(&db, "alice") {
            Err(Error::NotFound(_)) => {}
            other => panic!("expected NotFound, got {:?}", other.map(|c| c.alert)),
        }
    }

    #[test]
    fn missing_income_amount_is_invalid_data() {
        let db = Database::in_memory().unwrap();
        db.add_income("alice", None, None).unwrap();
        db.add_expense("alice", None, Some(100.0)).unwrap();

        assert!(matches!(
            check_spending(&db, "alice"),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn no_expenses_is_invalid_data() {
        let db = db_with_income("alice", 3000.0, &[]);
        assert!(matches!(
            check_spending(&db, "alice"),
            Err(Error::InvalidData(_))
        ));
    }
}
