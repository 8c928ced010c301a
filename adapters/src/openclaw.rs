//! `openclaw` CLI adapter.
//!
//! `OpenClaw` maps each dashboard operation onto the argument vector of one
//! CLI invocation and folds the runner's result into an `Invocation`. All
//! session control (kill, model switch) is done by messaging the session,
//! since the CLI exposes no dedicated verbs for it.

use std::sync::Arc;
use std::time::Duration;

use crate::models::{Invocation, SpawnRequest};
use crate::runner::{render_command_line, CommandRunner};

/// Message that asks a session to wrap up and exit.
pub const KILL_MESSAGE: &str = "MISSION_COMPLETE - End session now";
/// Sessions whose key contains this marker are the gateway's own and are
/// never killed in bulk.
pub const MAIN_SESSION_MARKER: &str = ":main:main";

pub const DEFAULT_MESSAGE_TIMEOUT: u64 = 60;
pub const DEFAULT_SPAWN_TIMEOUT: u64 = 3600;
pub const KILL_TIMEOUT: u64 = 10;
pub const KILL_ALL_TIMEOUT: u64 = 5;
/// Seconds allowed past a command's own `--timeout` before it is abandoned.
pub const TIMEOUT_GRACE: u64 = 30;

/// Returns true for the gateway's main session.
pub fn is_protected(key: &str) -> bool {
    key.contains(MAIN_SESSION_MARKER)
}

/// Client for the `openclaw` CLI.
#[derive(Clone)]
pub struct OpenClaw {
    runner: Arc<dyn CommandRunner>,
}

impl OpenClaw {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    pub fn program(&self) -> &str {
        self.runner.program()
    }

    pub async fn gateway_status(&self) -> Invocation {
        self.invoke(args(&["gateway", "status"]), None).await
    }

    pub async fn gateway_restart(&self) -> Invocation {
        self.invoke(args(&["gateway", "restart"]), None).await
    }

    pub async fn list_sessions(&self) -> Invocation {
        self.invoke(args(&["sessions", "list", "--json"]), None).await
    }

    pub async fn list_cron(&self) -> Invocation {
        self.invoke(args(&["cron", "list", "--json"]), None).await
    }

    /// Send `message` to the session `key`, waiting up to `timeout` seconds.
    pub async fn send(&self, key: &str, message: &str, timeout: u64) -> Invocation {
        self.invoke(
            vec![
                "sessions".to_string(),
                "send".to_string(),
                key.to_string(),
                message.to_string(),
                "--timeout".to_string(),
                timeout.to_string(),
            ],
            Some(deadline(timeout)),
        )
        .await
    }

    pub async fn kill(&self, key: &str) -> Invocation {
        self.send(key, KILL_MESSAGE, KILL_TIMEOUT).await
    }

    /// Ask the session to switch models via its `/model` slash command.
    pub async fn set_model(&self, key: &str, model: &str) -> Invocation {
        self.send(key, &format!("/model {model}"), KILL_TIMEOUT).await
    }

    pub async fn spawn(&self, request: &SpawnRequest) -> Invocation {
        self.invoke(spawn_args(request), Some(deadline(request.timeout)))
            .await
    }

    async fn invoke(&self, args: Vec<String>, min_timeout: Option<Duration>) -> Invocation {
        let program = self.runner.program();
        tracing::debug!("Running {}", render_command_line(program, &args));

        match self.runner.run(&args, min_timeout).await {
            Ok(output) if output.success => Invocation::succeeded(output.stdout),
            Ok(output) => {
                let error = output.error_message(program, &args);
                tracing::warn!(exit_code = ?output.exit_code, "{}", error);
                Invocation::failed(output.stdout, error)
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Invocation::unavailable(e.to_string())
            }
        }
    }
}

/// How long to let a command that waits `timeout` seconds itself run.
fn deadline(timeout: u64) -> Duration {
    Duration::from_secs(timeout.saturating_add(TIMEOUT_GRACE))
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn spawn_args(request: &SpawnRequest) -> Vec<String> {
    let mut argv = vec![
        "sessions".to_string(),
        "spawn".to_string(),
        request.task.clone(),
    ];
    if let Some(label) = request.label.as_deref().filter(|l| !l.is_empty()) {
        argv.push("--label".to_string());
        argv.push(label.to_string());
    }
    if let Some(model) = request.model.as_deref().filter(|m| !m.is_empty()) {
        argv.push("--model".to_string());
        argv.push(model.to_string());
    }
    argv.push("--timeout".to_string());
    argv.push(request.timeout.to_string());
    argv
}
