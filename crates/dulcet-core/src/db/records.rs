//! Income/expense record queries, scoped by user

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::Result;
use crate::models::{IncomeRecord, MonthlyAmount};

impl Database {
    /// Insert an income record
    pub fn add_income(
        &self,
        user_id: &str,
        month: Option<&str>,
        amount: Option<f64>,
    ) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO incomes (user_id, month, amount) VALUES (?1, ?2, ?3)",
            params![user_id, month, amount],
        )?;
        Ok(())
    }

    /// Insert an expense record
    pub fn add_expense(
        &self,
        user_id: &str,
        month: Option<&str>,
        amount: Option<f64>,
    ) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO expenses (user_id, month, amount) VALUES (?1, ?2, ?3)",
            params![user_id, month, amount],
        )?;
        Ok(())
    }

    /// Fetch one income record for a user, if any exists
    pub fn get_income(&self, user_id: &str) -> Result<Option<IncomeRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                "SELECT user_id, month, amount FROM incomes WHERE user_id = ?1 LIMIT 1",
                params![user_id],
                |row| {
                    Ok(IncomeRecord {
                        user_id: row.get(0)?,
                        month: row.get(1)?,
                        amount: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    /// All expense amounts for a user, in insertion order
    ///
    /// Records without an amount are skipped, mirroring the presence
    /// check the evaluator performs per record.
    pub fn list_expense_amounts(&self, user_id: &str) -> Result<Vec<f64>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT amount FROM expenses
             WHERE user_id = ?1 AND amount IS NOT NULL
             ORDER BY id",
        )?;
        let amounts = stmt
            .query_map(params![user_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<f64>>>()?;
        Ok(amounts)
    }

    /// Monthly income rows for a user (month and amount both present)
    pub fn monthly_incomes(&self, user_id: &str) -> Result<Vec<MonthlyAmount>> {
        self.monthly_amounts("incomes", user_id)
    }

    /// Monthly expense rows for a user (month and amount both present)
    pub fn monthly_expenses(&self, user_id: &str) -> Result<Vec<MonthlyAmount>> {
        self.monthly_amounts("expenses", user_id)
    }

    fn monthly_amounts(&self, table: &str, user_id: &str) -> Result<Vec<MonthlyAmount>> {
        let conn = self.conn()?;
        // Table name comes from the two callers above, never from input
        let sql = format!(
            "SELECT month, amount FROM {}
             WHERE user_id = ?1 AND month IS NOT NULL AND amount IS NOT NULL
             ORDER BY id",
            table
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok(MonthlyAmount {
                    month: row.get(0)?,
                    amount: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}
