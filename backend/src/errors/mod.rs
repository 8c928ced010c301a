//! Global application error types and handlers.
//!
//! Every failure reaches the dashboard as the same JSON envelope,
//! `{"success": false, "error": "..."}`. Request validation problems carry a
//! 4xx status; CLI failures are relayed with 200 so the dashboard can show
//! the CLI's own message next to the action that triggered it.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// The `openclaw` command failed or could not be run.
    #[error("{0}")]
    Command(String),

    #[error("No API route for {0}")]
    NotFound(String),

    #[error("Method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn missing_field(field: &str) -> Self {
        Self::BadRequest(format!("Missing required field: {field}"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Command(_) => StatusCode::OK,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidBody(rejection) => rejection.status(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::debug!("Rejected request: {}", self);
        }
        let body = ErrorEnvelope {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
