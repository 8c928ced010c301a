//! Handler functions for the agent session API.
//!
//! These functions validate request bodies, delegate to
//! `services::AgentService`, and shape the JSON the dashboard expects.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use openclaw_adapters::SpawnRequest;

use crate::api::models::{
    required, ActionResponse, AgentsResponse, InvocationResponse, MessageRequest, ModelRequest,
    SpawnAgentRequest,
};
use crate::errors::ApiError;
use crate::services::AppState;

pub async fn list_agents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AgentsResponse>, ApiError> {
    let agents = state.agents.list().await?;
    Ok(Json(AgentsResponse {
        success: true,
        agents,
    }))
}

pub async fn message_agent(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<InvocationResponse>, ApiError> {
    let Json(req) = payload?;
    let message = required(req.message, "message")?;

    let invocation = state.agents.message(&key, &message, req.timeout).await;
    Ok(Json(invocation.into()))
}

pub async fn kill_agent(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Json<ActionResponse> {
    let invocation = state.agents.kill(&key).await;
    Json(ActionResponse::sent("Kill signal sent", invocation))
}

pub async fn set_agent_model(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    payload: Result<Json<ModelRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Json(req) = payload?;
    let model = required(req.model, "model")?;

    let invocation = state.agents.set_model(&key, &model).await;
    Ok(Json(ActionResponse::sent(
        format!("Model change requested: {model}"),
        invocation,
    )))
}

pub async fn spawn_agent(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SpawnAgentRequest>, JsonRejection>,
) -> Result<Json<InvocationResponse>, ApiError> {
    let Json(req) = payload?;
    let mut request = SpawnRequest::new(required(req.task, "task")?).with_timeout(req.timeout);
    if let Some(label) = req.label {
        request = request.with_label(label);
    }
    if let Some(model) = req.model {
        request = request.with_model(model);
    }

    let invocation = state.agents.spawn(&request).await;
    Ok(Json(invocation.into()))
}
