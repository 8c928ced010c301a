//! Defines the HTTP routes for agent sessions, mounted under `/api/agents`.
//!
//! `/spawn` is a literal segment and is matched before any `{key}` route.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{kill_agent, list_agents, message_agent, set_agent_model, spawn_agent};
use crate::services::AppState;

pub fn agents_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_agents))
        .route("/spawn", post(spawn_agent))
        .route("/{key}/message", post(message_agent))
        .route("/{key}/kill", post(kill_agent))
        .route("/{key}/model", post(set_agent_model))
}
