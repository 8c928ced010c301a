//! Gateway health and control.
//!
//! The gateway is only ever reached through the CLI; `gateway_url` is
//! reported to the dashboard for display and is never dialled from here.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use openclaw_adapters::{Invocation, OpenClaw};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayHealth {
    /// Whether `gateway status` exited successfully.
    pub reachable: bool,
    pub checked_at: DateTime<Utc>,
}

pub struct GatewayService {
    client: Arc<OpenClaw>,
    gateway_url: String,
}

impl GatewayService {
    pub fn new(client: Arc<OpenClaw>, gateway_url: impl Into<String>) -> Self {
        Self {
            client,
            gateway_url: gateway_url.into(),
        }
    }

    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    pub async fn health(&self) -> GatewayHealth {
        let status = self.client.gateway_status().await;
        GatewayHealth {
            reachable: status.success,
            checked_at: Utc::now(),
        }
    }

    pub async fn restart(&self) -> Invocation {
        tracing::warn!("Restarting gateway at {}", self.gateway_url);
        self.client.gateway_restart().await
    }
}
