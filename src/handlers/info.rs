//! Service banner and model info handlers

use axum::{extract::State, Json};

use crate::constants::{APP_NAME, APP_VERSION, MISSION};
use crate::models::{ModelInfo, ServiceInfo};
use crate::{AppResult, AppState};

pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: APP_NAME.to_string(),
        mission: MISSION.to_string(),
        version: APP_VERSION.to_string(),
        health_check: "/health".to_string(),
        model_info: "/model-info".to_string(),
    })
}

/// Model details; 503 while no model is loaded
pub async fn model_info(State(state): State<AppState>) -> AppResult<Json<ModelInfo>> {
    let info = state.service.model_info()?;
    Ok(Json(info))
}
