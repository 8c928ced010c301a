//! Command runner abstraction for executing the `openclaw` CLI.
//!
//! `CommandRunner` is the trait the client uses to execute one invocation.
//! `ProcessRunner` is the production implementation: it spawns the program
//! directly with an argument vector, so arguments are never re-parsed by a
//! shell. `MockRunner` is the test double that records calls and returns
//! preset responses.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::errors::AdapterError;

/// Captured result of a process that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: Some(0),
        }
    }

    pub fn failed(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            success: false,
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code: Some(exit_code),
        }
    }

    /// Human-readable failure text: the command line, then stderr if any.
    pub fn error_message(&self, program: &str, args: &[String]) -> String {
        let mut message = format!("Command failed: {}", render_command_line(program, args));
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            message.push('\n');
            message.push_str(stderr);
        }
        message
    }
}

/// Render an invocation for logs and error messages. Arguments containing
/// whitespace or quotes are wrapped in double quotes.
pub fn render_command_line(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
            line.push('"');
            line.push_str(&arg.replace('"', "\\\""));
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}

/// Trait for executing one CLI invocation.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Program name used in logs and error messages.
    fn program(&self) -> &str;

    /// Run the program with `args` (argv after the program name).
    ///
    /// `min_timeout` asks for at least that long before the process is
    /// abandoned; runners may allow more but never less.
    async fn run(
        &self,
        args: &[String],
        min_timeout: Option<Duration>,
    ) -> Result<CommandOutput, AdapterError>;
}

/// Production runner that spawns the configured program as a child process.
///
/// `timeout` is the floor for every invocation; a longer `min_timeout`
/// passed to `run` widens it for that call only.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: PathBuf,
    display_name: String,
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        let program = program.into();
        let display_name = program.display().to_string();
        Self {
            program,
            display_name,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    fn program(&self) -> &str {
        &self.display_name
    }

    async fn run(
        &self,
        args: &[String],
        min_timeout: Option<Duration>,
    ) -> Result<CommandOutput, AdapterError> {
        let limit = min_timeout.map_or(self.timeout, |requested| requested.max(self.timeout));
        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| AdapterError::Spawn {
                program: self.display_name.clone(),
                source,
            })?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let output = tokio::time::timeout(limit, child.wait_with_output())
            .await
            .map_err(|_| AdapterError::Timeout {
                program: self.display_name.clone(),
                timeout: limit,
            })?
            .map_err(|source| AdapterError::Io {
                program: self.display_name.clone(),
                source,
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

/// Test-double runner that records invocations and replays scripted responses.
///
/// Responses are served in the order given. Once they run out, every call
/// succeeds with empty output.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: Mutex<VecDeque<Result<CommandOutput, AdapterError>>>,
    calls: Mutex<Vec<Vec<String>>>,
    timeouts: Mutex<Vec<Option<Duration>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: Vec<Result<CommandOutput, AdapterError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
            timeouts: Mutex::new(Vec::new()),
        }
    }

    /// Queue one more response.
    pub fn push_response(&self, response: Result<CommandOutput, AdapterError>) {
        lock(&self.responses).push_back(response);
    }

    /// Every argv received so far, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        lock(&self.calls).clone()
    }

    /// The `min_timeout` of every call so far, in call order.
    pub fn timeouts(&self) -> Vec<Option<Duration>> {
        lock(&self.timeouts).clone()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    fn program(&self) -> &str {
        "openclaw"
    }

    async fn run(
        &self,
        args: &[String],
        min_timeout: Option<Duration>,
    ) -> Result<CommandOutput, AdapterError> {
        lock(&self.calls).push(args.to_vec());
        lock(&self.timeouts).push(min_timeout);
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(CommandOutput::ok("")))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
