//! Module for core business logic services.
//!
//! Services sit between the HTTP handlers and the `openclaw` client. They
//! decide which CLI invocations a dashboard action needs, parse list output,
//! and apply the rules that are not plain pass-through (the protected main
//! session, kill-all sequencing, health timestamps).

pub mod agents;
pub mod cron;
pub mod gateway;

use std::sync::Arc;

use openclaw_adapters::OpenClaw;

pub use agents::AgentService;
pub use cron::CronService;
pub use gateway::{GatewayHealth, GatewayService};

/// Shared state handed to every handler.
pub struct AppState {
    pub agents: AgentService,
    pub cron: CronService,
    pub gateway: GatewayService,
}

impl AppState {
    pub fn new(client: OpenClaw, gateway_url: impl Into<String>) -> Arc<Self> {
        let client = Arc::new(client);
        Arc::new(Self {
            agents: AgentService::new(client.clone()),
            cron: CronService::new(client.clone()),
            gateway: GatewayService::new(client, gateway_url),
        })
    }
}
