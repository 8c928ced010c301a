//! Cron job listing endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::api::models::CronResponse;
use crate::services::AppState;

pub fn cron_router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(list_cron))
}

async fn list_cron(State(state): State<Arc<AppState>>) -> Json<CronResponse> {
    Json(CronResponse {
        success: true,
        jobs: state.cron.list().await,
    })
}
