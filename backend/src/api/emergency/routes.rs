//! Defines the HTTP routes for emergency controls, mounted under `/api/emergency`.

use std::sync::Arc;

use axum::{routing::post, Router};

use super::handlers::{kill_all, restart_gateway};
use crate::services::AppState;

pub fn emergency_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/kill-all", post(kill_all))
        .route("/restart-gateway", post(restart_gateway))
}
