//! Error types for the dashboard proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Dashboard Error Enum ==
/// Unified error type for the dashboard proxy.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Upstream API responded with a non-success HTTP status
    #[error("upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Connection failure or timeout talking to the upstream API
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Missing or invalid request parameter
    #[error("invalid request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Propagate the upstream status and body text to the caller
            DashboardError::Upstream { status, body } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                body.clone(),
            ),
            DashboardError::Transport(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            DashboardError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            DashboardError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the dashboard proxy.
pub type Result<T> = std::result::Result<T, DashboardError>;
