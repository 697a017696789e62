//! HTTP request handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::{AppError, AppState};
use dulcet_core::models::{GoalProjection, SpendingCheck};
use dulcet_core::{advisor, goal};

/// GET / - Readiness string
pub async fn index() -> &'static str {
    "Dulcet saving tips API is running."
}

/// GET /check-expense/:user_id - Spending-safety verdict
pub async fn check_expense(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<SpendingCheck>, AppError> {
    let check = advisor::check_spending(&state.db, &user_id)?;
    Ok(Json(check))
}

#[derive(Debug, Deserialize)]
pub struct PredictGoalRequest {
    pub user_id: String,
    pub goal_price: f64,
}

/// POST /predict_goal - Savings goal projection
pub async fn predict_goal(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PredictGoalRequest>,
) -> Result<Json<GoalProjection>, AppError> {
    let projection = goal::project_goal(&state.db, &state.models, &req.user_id, req.goal_price)?;
    Ok(Json(projection))
}
