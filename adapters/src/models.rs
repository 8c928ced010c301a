//! Generic data models for the `adapters` crate.
//!
//! Session and cron records are passed through untouched as JSON values; the
//! dashboard owns their interpretation. Only the fields this service acts on
//! (the session key) get typed accessors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A session record as printed by `sessions list --json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(pub Value);

impl Session {
    /// The session key, if the record carries a string `key` field.
    pub fn key(&self) -> Option<&str> {
        self.0.get("key").and_then(Value::as_str)
    }
}

impl From<Value> for Session {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Parameters for `sessions spawn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRequest {
    pub task: String,
    pub label: Option<String>,
    pub model: Option<String>,
    /// Seconds the spawned session may run.
    pub timeout: u64,
}

impl SpawnRequest {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            label: None,
            model: None,
            timeout: crate::openclaw::DEFAULT_SPAWN_TIMEOUT,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Outcome of one CLI invocation, shaped for relaying to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    pub success: bool,
    /// Captured stdout. `None` when the process never ran.
    pub output: Option<String>,
    pub error: Option<String>,
}

impl Invocation {
    pub fn succeeded(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: Some(output.into()),
            error: None,
        }
    }

    pub fn failed(output: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: Some(output.into()),
            error: Some(error.into()),
        }
    }

    /// The process could not be run, so there is no output to relay.
    pub fn unavailable(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }

    /// Whether the process ran far enough to produce an exit status.
    pub fn ran(&self) -> bool {
        self.output.is_some()
    }
}
