//! Central module for organizing the application's API endpoints.
//!
//! This module assembles the domain routers (agents, cron, emergency
//! controls, health) under `/api` and serves the dashboard's static files
//! for everything else.

pub mod agents;
pub mod cron;
pub mod emergency;
pub mod health;
pub mod models;

use std::path::Path;
use std::sync::Arc;

use axum::{extract::OriginalUri, http::Method, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::errors::ApiError;
use crate::services::AppState;

/// Dashboard page served at `/`.
pub const DASHBOARD_PAGE: &str = "mission-control.html";

/// Build the complete application router.
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let api = Router::new()
        .route("/health", get(health::health_handler))
        .nest("/agents", agents::routes::agents_router())
        .nest("/cron", cron::cron_router())
        .nest("/emergency", emergency::routes::emergency_router())
        .method_not_allowed_fallback(api_method_not_allowed)
        .fallback(api_not_found);

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join(DASHBOARD_PAGE)))
        .nest("/api", api)
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

async fn api_not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("{} {}", method, uri.path()))
}

async fn api_method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use openclaw_adapters::openclaw::KILL_MESSAGE;
    use openclaw_adapters::{AdapterError, CommandOutput, MockRunner, OpenClaw};
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct Harness {
        app: Router,
        runner: Arc<MockRunner>,
        _static_dir: TempDir,
    }

    fn harness(responses: Vec<Result<CommandOutput, AdapterError>>) -> Harness {
        let static_dir = TempDir::new().unwrap();
        std::fs::write(
            static_dir.path().join(DASHBOARD_PAGE),
            "<html><title>Mission Control</title></html>",
        )
        .unwrap();
        std::fs::write(static_dir.path().join("app.js"), "console.log('hi');").unwrap();

        let runner = Arc::new(MockRunner::with_responses(responses));
        let state = AppState::new(OpenClaw::new(runner.clone()), "http://gateway:18789");
        Harness {
            app: router(state, static_dir.path()),
            runner,
            _static_dir: static_dir,
        }
    }

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = send(app, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_gateway_state() {
        let h = harness(vec![Ok(CommandOutput::failed("", "not running", 1))]);

        let (status, body) = send_json(&h.app, Method::GET, "/api/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["gateway"], json!(false));
        assert_eq!(body["gatewayUrl"], json!("http://gateway:18789"));
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
        assert_eq!(h.runner.calls(), vec![argv(&["gateway", "status"])]);
    }

    #[tokio::test]
    async fn list_agents_relays_parsed_sessions() {
        let h = harness(vec![Ok(CommandOutput::ok(
            "{\"key\":\"agent:main:main\"}\n{\"key\":\"agent:w:1\",\"model\":\"opus\"}\n",
        ))]);

        let (status, body) = send_json(&h.app, Method::GET, "/api/agents", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "agents": [{"key": "agent:main:main"}, {"key": "agent:w:1", "model": "opus"}],
            })
        );
    }

    #[tokio::test]
    async fn list_agents_reports_cli_failure() {
        let h = harness(vec![Ok(CommandOutput::failed("", "gateway down", 1))]);

        let (status, body) = send_json(&h.app, Method::GET, "/api/agents", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(false));
        assert_eq!(
            body["error"],
            json!("Command failed: openclaw sessions list --json\ngateway down")
        );
    }

    #[tokio::test]
    async fn message_agent_passes_message_and_timeout() {
        let h = harness(vec![Ok(CommandOutput::ok("reply"))]);

        let (status, body) = send_json(
            &h.app,
            Method::POST,
            "/api/agents/agent:w:1/message",
            Some(json!({"message": "status \"now\"", "timeout": 30})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "result": "reply"}));
        assert_eq!(
            h.runner.calls(),
            vec![argv(&["sessions", "send", "agent:w:1", "status \"now\"", "--timeout", "30"])]
        );
    }

    #[tokio::test]
    async fn message_agent_requires_message() {
        let h = harness(vec![]);

        let (status, body) =
            send_json(&h.app, Method::POST, "/api/agents/k/message", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"success": false, "error": "Missing required field: message"})
        );
        assert!(h.runner.calls().is_empty());
    }

    #[tokio::test]
    async fn spawn_agent_requires_task() {
        let h = harness(vec![]);

        let (status, body) = send_json(
            &h.app,
            Method::POST,
            "/api/agents/spawn",
            Some(json!({"label": "builder", "timeout": 60})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "error": "Missing required field: task"}));
        assert!(h.runner.calls().is_empty());
    }

    #[tokio::test]
    async fn set_model_requires_model() {
        let h = harness(vec![]);

        let (status, body) = send_json(
            &h.app,
            Method::POST,
            "/api/agents/agent:w:1/model",
            Some(json!({"model": "   "})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false, "error": "Missing required field: model"}));
        assert!(h.runner.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_api_path_answers_with_json() {
        let h = harness(vec![]);

        let (status, body) = send_json(&h.app, Method::GET, "/api/sessions", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"success": false, "error": "No API route for GET /api/sessions"})
        );

        let (status, body) =
            send_json(&h.app, Method::POST, "/api/agents/k/restart", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], json!(false));
        assert!(h.runner.calls().is_empty());
    }

    #[tokio::test]
    async fn wrong_method_on_api_route_answers_with_json() {
        let h = harness(vec![]);

        let (status, body) = send_json(&h.app, Method::DELETE, "/api/health", None).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["success"], json!(false));
        assert!(h.runner.calls().is_empty());
    }

    #[tokio::test]
    async fn malformed_body_uses_error_envelope() {
        let h = harness(vec![]);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/agents/spawn")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = h.app.clone().oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], json!(false));
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn kill_agent_always_acknowledges() {
        let h = harness(vec![Ok(CommandOutput::failed("", "timeout", 1))]);

        let (status, body) = send_json(&h.app, Method::POST, "/api/agents/agent:w:1/kill", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "message": "Kill signal sent", "result": ""}));
        assert_eq!(
            h.runner.calls(),
            vec![argv(&["sessions", "send", "agent:w:1", KILL_MESSAGE, "--timeout", "10"])]
        );
    }

    #[tokio::test]
    async fn set_model_sends_slash_command() {
        let h = harness(vec![Ok(CommandOutput::ok("ok"))]);

        let (_, body) = send_json(
            &h.app,
            Method::POST,
            "/api/agents/agent:w:1/model",
            Some(json!({"model": "claude-sonnet"})),
        )
        .await;

        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Model change requested: claude-sonnet",
                "result": "ok",
            })
        );
        assert_eq!(
            h.runner.calls(),
            vec![argv(&["sessions", "send", "agent:w:1", "/model claude-sonnet", "--timeout", "10"])]
        );
    }

    #[tokio::test]
    async fn spawn_agent_is_not_treated_as_key() {
        let h = harness(vec![Ok(CommandOutput::ok("spawned agent:w:7"))]);

        let (status, body) = send_json(
            &h.app,
            Method::POST,
            "/api/agents/spawn",
            Some(json!({"task": "fix the build", "label": "builder", "model": "opus"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "result": "spawned agent:w:7"}));
        assert_eq!(
            h.runner.calls(),
            vec![argv(&[
                "sessions", "spawn", "fix the build", "--label", "builder", "--model", "opus",
                "--timeout", "3600",
            ])]
        );
    }

    #[tokio::test]
    async fn spawn_agent_relays_failure() {
        let h = harness(vec![Ok(CommandOutput::failed("", "quota exceeded", 2))]);

        let (_, body) = send_json(
            &h.app,
            Method::POST,
            "/api/agents/spawn",
            Some(json!({"task": "t", "timeout": 60})),
        )
        .await;

        assert_eq!(body["success"], json!(false));
        assert_eq!(body["result"], json!(""));
        assert!(body["error"].as_str().unwrap().ends_with("quota exceeded"));
    }

    #[tokio::test]
    async fn cron_lists_jobs_even_when_cli_fails() {
        let h = harness(vec![Ok(CommandOutput::failed(
            "{\"id\":\"nightly\"}\n",
            "warning",
            1,
        ))]);

        let (_, body) = send_json(&h.app, Method::GET, "/api/cron", None).await;

        assert_eq!(body, json!({"success": true, "jobs": [{"id": "nightly"}]}));
        assert_eq!(h.runner.calls(), vec![argv(&["cron", "list", "--json"])]);
    }

    #[tokio::test]
    async fn kill_all_counts_signalled_sessions() {
        let h = harness(vec![Ok(CommandOutput::ok(
            "{\"key\":\"agent:main:main\"}\n{\"key\":\"agent:w:1\"}\n{\"key\":\"agent:w:2\"}\n",
        ))]);

        let (_, body) = send_json(&h.app, Method::POST, "/api/emergency/kill-all", None).await;

        assert_eq!(
            body,
            json!({"success": true, "count": 2, "message": "Terminated 2 agents"})
        );
        assert_eq!(h.runner.calls().len(), 3);
    }

    #[tokio::test]
    async fn restart_gateway_relays_invocation() {
        let h = harness(vec![Err(AdapterError::Spawn {
            program: "openclaw".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        })]);

        let (_, body) =
            send_json(&h.app, Method::POST, "/api/emergency/restart-gateway", None).await;

        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Failed to spawn openclaw: No such file or directory",
            })
        );
    }

    #[tokio::test]
    async fn root_serves_dashboard_page() {
        let h = harness(vec![]);

        let (status, bytes) = send(&h.app, Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(bytes).unwrap().contains("Mission Control"));
    }

    #[tokio::test]
    async fn static_files_are_served_from_directory() {
        let h = harness(vec![]);

        let (status, bytes) = send(&h.app, Method::GET, "/app.js", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(bytes, b"console.log('hi');");

        let (status, _) = send(&h.app, Method::GET, "/missing.css", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
