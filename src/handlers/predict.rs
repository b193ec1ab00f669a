//! Prediction handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::models::{PredictionResponse, StudentInput};
use crate::{AppResult, AppState};

/// Predict an exam score with equity insights
pub async fn predict(
    State(state): State<AppState>,
    body: Result<Json<StudentInput>, JsonRejection>,
) -> AppResult<Json<PredictionResponse>> {
    let Json(input) = body?;
    let response = state.service.serve(input)?;
    Ok(Json(response))
}
