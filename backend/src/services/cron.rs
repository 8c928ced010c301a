//! Scheduled job listing via `openclaw cron list`.

use std::sync::Arc;

use openclaw_adapters::ndjson::parse_lines;
use openclaw_adapters::OpenClaw;
use serde_json::Value;

pub struct CronService {
    client: Arc<OpenClaw>,
}

impl CronService {
    pub fn new(client: Arc<OpenClaw>) -> Self {
        Self { client }
    }

    /// Cron jobs parsed from whatever the CLI printed. A failing CLI yields
    /// an empty list rather than an error.
    pub async fn list(&self) -> Vec<Value> {
        let invocation = self.client.list_cron().await;
        parse_lines(invocation.output.as_deref().unwrap_or_default())
    }
}
