//! Error types for Dulcet

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    InvalidData(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InsufficientData(String),

    #[error("{0}")]
    GoalNotAchievable(String),
}

pub type Result<T> = std::result::Result<T, Error>;
