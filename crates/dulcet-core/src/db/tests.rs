//! Store layer tests

use super::Database;
use crate::models::MonthlyAmount;

#[test]
fn income_lookup_is_scoped_by_user() {
    let db = Database::in_memory().unwrap();
    db.add_income("alice", None, Some(3000.0)).unwrap();
    db.add_income("bob", None, Some(1500.0)).unwrap();

    let income = db.get_income("alice").unwrap().unwrap();
    assert_eq!(income.user_id, "alice");
    assert_eq!(income.amount, Some(3000.0));

    assert!(db.get_income("carol").unwrap().is_none());
}

#[test]
fn expense_amounts_keep_insertion_order_and_skip_nulls() {
    let db = Database::in_memory().unwrap();
    db.add_expense("alice", None, Some(1000.0)).unwrap();
    db.add_expense("alice", None, None).unwrap();
    db.add_expense("alice", None, Some(1200.0)).unwrap();
    db.add_expense("bob", None, Some(9999.0)).unwrap();

    let amounts = db.list_expense_amounts("alice").unwrap();
    assert_eq!(amounts, vec![1000.0, 1200.0]);
}

#[test]
fn monthly_rows_require_month_and_amount() {
    let db = Database::in_memory().unwrap();
    db.add_income("alice", Some("2025-01"), Some(3000.0)).unwrap();
    db.add_income("alice", None, Some(3000.0)).unwrap();
    db.add_income("alice", Some("2025-02"), None).unwrap();

    let rows = db.monthly_incomes("alice").unwrap();
    assert_eq!(
        rows,
        vec![MonthlyAmount {
            month: "2025-01".to_string(),
            amount: 3000.0,
        }]
    );
}

#[test]
fn monthly_expenses_are_scoped_by_user() {
    let db = Database::in_memory().unwrap();
    db.add_expense("alice", Some("2025-01"), Some(2900.0)).unwrap();
    db.add_expense("bob", Some("2025-01"), Some(100.0)).unwrap();

    let rows = db.monthly_expenses("alice").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amount, 2900.0);
}
