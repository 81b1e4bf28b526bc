//! Error types for the blog insights service

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Fatal startup errors; anything here prevents the server from binding
#[derive(Debug)]
pub enum ServiceError {
    Config(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<tracing_subscriber::filter::ParseError> for ServiceError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Request-scoped error type that converts to HTTP responses.
///
/// The response bodies are part of the service contract; the underlying
/// cause is logged here and never leaks to the client.
#[derive(Debug)]
pub enum AppError {
    /// Missing or empty `query` parameter; rejected before any fetch
    MissingQuery,
    /// Fetch or stats computation failed
    StatsUnavailable(String),
    /// Fetch or search computation failed
    SearchUnavailable(String),
    /// Catch-all for anything escaping the above
    #[allow(dead_code)]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingQuery => (
                StatusCode::BAD_REQUEST,
                "Query parameter 'query' is required.".to_string(),
            ),
            AppError::StatsUnavailable(msg) => {
                tracing::error!(error = %msg, "Failed to fetch and analyze blog data");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while fetching and analyzing blog data.".to_string(),
                )
            }
            AppError::SearchUnavailable(msg) => {
                tracing::error!(error = %msg, "Failed to search blogs");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while searching for blogs.".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Unexpected server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred on the server.".to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}
