//! Agent session management on top of `openclaw sessions`.

use std::sync::Arc;

use openclaw_adapters::ndjson::parse_lines;
use openclaw_adapters::openclaw::{is_protected, KILL_ALL_TIMEOUT, KILL_MESSAGE};
use openclaw_adapters::{Invocation, OpenClaw, Session, SpawnRequest};

use crate::errors::ApiError;

pub struct AgentService {
    client: Arc<OpenClaw>,
}

impl AgentService {
    pub fn new(client: Arc<OpenClaw>) -> Self {
        Self { client }
    }

    /// List live sessions. Fails when the CLI reports an error.
    pub async fn list(&self) -> Result<Vec<Session>, ApiError> {
        let invocation = self.client.list_sessions().await;
        if !invocation.success {
            return Err(command_error(invocation));
        }
        Ok(sessions_from(&invocation))
    }

    pub async fn message(&self, key: &str, message: &str, timeout: u64) -> Invocation {
        tracing::info!("Sending message to {}", key);
        self.client.send(key, message, timeout).await
    }

    pub async fn kill(&self, key: &str) -> Invocation {
        tracing::info!("Sending kill signal to {}", key);
        self.client.kill(key).await
    }

    pub async fn set_model(&self, key: &str, model: &str) -> Invocation {
        tracing::info!("Requesting model change for {} to {}", key, model);
        self.client.set_model(key, model).await
    }

    pub async fn spawn(&self, request: &SpawnRequest) -> Invocation {
        tracing::info!(
            label = request.label.as_deref().unwrap_or(""),
            model = request.model.as_deref().unwrap_or(""),
            timeout = request.timeout,
            "Spawning agent"
        );
        self.client.spawn(request).await
    }

    /// Send the kill message to every session except the main one, one at a
    /// time. Returns the number of sessions signalled.
    ///
    /// Whatever stdout the listing produced is used even if the CLI exited
    /// non-zero; only a listing that never ran is an error.
    pub async fn kill_all(&self) -> Result<usize, ApiError> {
        let listing = self.client.list_sessions().await;
        if !listing.ran() {
            return Err(command_error(listing));
        }

        let mut count = 0;
        for session in sessions_from(&listing) {
            let Some(key) = session.key() else {
                continue;
            };
            if is_protected(key) {
                tracing::debug!("Skipping protected session {}", key);
                continue;
            }
            let result = self.client.send(key, KILL_MESSAGE, KILL_ALL_TIMEOUT).await;
            if !result.success {
                tracing::warn!("Kill signal to {} may not have been delivered", key);
            }
            count += 1;
        }

        tracing::warn!("Emergency kill-all signalled {} agents", count);
        Ok(count)
    }
}

fn sessions_from(invocation: &Invocation) -> Vec<Session> {
    parse_lines(invocation.output.as_deref().unwrap_or_default())
        .into_iter()
        .map(Session::from)
        .collect()
}

fn command_error(invocation: Invocation) -> ApiError {
    ApiError::Command(
        invocation
            .error
            .unwrap_or_else(|| "openclaw command failed".to_string()),
    )
}
