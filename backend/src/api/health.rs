//! Health endpoint: reports whether the gateway answers `gateway status`.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::models::HealthResponse;
use crate::services::AppState;

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let health = state.gateway.health().await;
    Json(HealthResponse::new(health, state.gateway.gateway_url()))
}
