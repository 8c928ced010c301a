//! Handler functions for emergency controls.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::models::{InvocationResponse, KillAllResponse};
use crate::errors::ApiError;
use crate::services::AppState;

pub async fn kill_all(
    State(state): State<Arc<AppState>>,
) -> Result<Json<KillAllResponse>, ApiError> {
    let count = state.agents.kill_all().await?;
    Ok(Json(KillAllResponse {
        success: true,
        count,
        message: format!("Terminated {count} agents"),
    }))
}

pub async fn restart_gateway(State(state): State<Arc<AppState>>) -> Json<InvocationResponse> {
    Json(state.gateway.restart().await.into())
}
