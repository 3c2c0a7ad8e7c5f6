//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::fetcher::FetchError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Option<String>) -> Self {
        self.details = details;
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Contribution fetch failure
    Fetch(FetchError),
}

/// Status and error code a fetch failure is reported with.
fn fetch_status(err: &FetchError) -> (StatusCode, &'static str) {
    match err {
        FetchError::MissingUsername => (StatusCode::BAD_REQUEST, "MISSING_USERNAME"),
        FetchError::MissingToken => (StatusCode::INTERNAL_SERVER_ERROR, "TOKEN_NOT_CONFIGURED"),
        FetchError::Http { status, .. } => (
            StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            "UPSTREAM_HTTP_ERROR",
        ),
        FetchError::GraphQl { .. } => (StatusCode::BAD_REQUEST, "UPSTREAM_QUERY_ERROR"),
        FetchError::NoData { .. } => (StatusCode::NOT_FOUND, "NO_DATA"),
        FetchError::Transport(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNREACHABLE"),
        FetchError::Decode(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_DECODE_ERROR"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Fetch(e) => {
                let (status, code) = fetch_status(&e);
                (status, ApiError::new(code, e.to_string()).with_details(e.details()))
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        AppError::Fetch(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
