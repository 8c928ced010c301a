//! Main entry point for the Mission Control backend.
//!
//! This file initializes tracing and configuration, builds the `openclaw`
//! client, registers all API routes and middleware, and runs the Axum web
//! server until Ctrl-C.

mod api;
mod config;
mod errors;
mod middleware;
mod services;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use openclaw_adapters::{OpenClaw, ProcessRunner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::services::AppState;

#[derive(Parser, Debug)]
#[command(name = "mission-control")]
#[command(about = "Web dashboard for supervising openclaw agent sessions")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<std::net::IpAddr>,

    /// Directory holding the dashboard's static files (overrides STATIC_DIR)
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Path to the openclaw binary (overrides OPENCLAW_BIN)
    #[arg(long)]
    openclaw_bin: Option<PathBuf>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = dir;
        }
        if let Some(bin) = self.openclaw_bin {
            config.openclaw_bin = bin;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("mission_control=debug,openclaw_adapters=debug,tower_http=debug")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    args.apply(&mut config);

    let runner = ProcessRunner::new(&config.openclaw_bin, config.command_timeout);
    tracing::info!(
        "Using {} (timeout {}s)",
        config.openclaw_bin.display(),
        runner.timeout().as_secs()
    );

    let state: Arc<AppState> = AppState::new(OpenClaw::new(Arc::new(runner)), &config.gateway_url);
    if !config.static_dir.is_dir() {
        tracing::warn!(
            "Static directory {} does not exist; only the API will be served",
            config.static_dir.display()
        );
    }
    let app = middleware::apply(api::router(state, &config.static_dir));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Mission Control running on http://{}", listener.local_addr()?);
    match config.redacted_token() {
        Some(token) => tracing::info!("Gateway: {} (token {})", config.gateway_url, token),
        None => tracing::info!("Gateway: {}", config.gateway_url),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Mission Control shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
