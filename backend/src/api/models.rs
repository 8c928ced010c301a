//! Request and response bodies for the dashboard API.
//!
//! Field names follow what the dashboard's JavaScript sends and reads.

use openclaw_adapters::openclaw::{DEFAULT_MESSAGE_TIMEOUT, DEFAULT_SPAWN_TIMEOUT};
use openclaw_adapters::{Invocation, Session};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ApiError;
use crate::services::GatewayHealth;

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub message: Option<String>,
    #[serde(default = "default_message_timeout")]
    pub timeout: u64,
}

#[derive(Debug, Deserialize)]
pub struct ModelRequest {
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SpawnAgentRequest {
    pub task: Option<String>,
    pub label: Option<String>,
    pub model: Option<String>,
    #[serde(default = "default_spawn_timeout")]
    pub timeout: u64,
}

fn default_message_timeout() -> u64 {
    DEFAULT_MESSAGE_TIMEOUT
}

fn default_spawn_timeout() -> u64 {
    DEFAULT_SPAWN_TIMEOUT
}

/// Take a required, non-empty string field out of a request body.
pub fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::missing_field(field))
}

/// Raw relay of a CLI invocation.
#[derive(Debug, Serialize)]
pub struct InvocationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Invocation> for InvocationResponse {
    fn from(invocation: Invocation) -> Self {
        Self {
            success: invocation.success,
            result: invocation.output,
            error: invocation.error,
        }
    }
}

/// Acknowledgement of a fire-and-forget control message.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl ActionResponse {
    pub fn sent(message: impl Into<String>, invocation: Invocation) -> Self {
        Self {
            success: true,
            message: message.into(),
            result: invocation.output,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AgentsResponse {
    pub success: bool,
    pub agents: Vec<Session>,
}

#[derive(Debug, Serialize)]
pub struct CronResponse {
    pub success: bool,
    pub jobs: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct KillAllResponse {
    pub success: bool,
    pub count: usize,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub success: bool,
    pub gateway: bool,
    pub gateway_url: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn new(health: GatewayHealth, gateway_url: &str) -> Self {
        Self {
            success: true,
            gateway: health.reachable,
            gateway_url: gateway_url.to_string(),
            timestamp: health
                .checked_at
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}
