//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the listen address, the static dashboard directory, the `openclaw` binary
//! and its timeout, and the gateway coordinates reported by the health check.
//! Values come from the environment; command-line flags override them.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_OPENCLAW_BIN: &str = "openclaw";
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:18789";
/// Longest allowed spawn plus slack for the CLI's own startup.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 3700;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub openclaw_bin: PathBuf,
    pub command_timeout: Duration,
    pub gateway_url: String,
    pub gateway_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            openclaw_bin: PathBuf::from(DEFAULT_OPENCLAW_BIN),
            command_timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            gateway_token: None,
        }
    }
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(port) = get("PORT") {
            config.port = parse("PORT", &port)?;
        }
        if let Some(host) = get("HOST") {
            config.host = parse("HOST", &host)?;
        }
        if let Some(dir) = get("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(bin) = get("OPENCLAW_BIN") {
            config.openclaw_bin = PathBuf::from(bin);
        }
        if let Some(secs) = get("OPENCLAW_TIMEOUT_SECS") {
            let secs: u64 = parse("OPENCLAW_TIMEOUT_SECS", &secs)?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "OPENCLAW_TIMEOUT_SECS",
                    value: secs.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
            config.command_timeout = Duration::from_secs(secs);
        }
        if let Some(url) = get("GATEWAY_URL") {
            config.gateway_url = url;
        }
        config.gateway_token = get("GATEWAY_TOKEN");

        Ok(config)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Gateway token suitable for logs: the first four characters only.
    pub fn redacted_token(&self) -> Option<String> {
        self.gateway_token.as_ref().map(|token| {
            let prefix: String = token.chars().take(4).collect();
            format!("{prefix}…")
        })
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
