//! Error handling for the backend API

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use review_core::SchedulerError;
use serde::Serialize;
use thiserror::Error;

use crate::services::summarizer::SummarizerError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Review queue is empty")]
    EmptyQueue,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Function crashed: {0}")]
    Summarizer(#[from] SummarizerError),
}

// No route walks a queue cursor, so `EmptyQueue` only arrives through this
// conversion; it is mapped to keep the match total.
impl From<SchedulerError> for ApiError {
    fn from(error: SchedulerError) -> Self {
        match error {
            SchedulerError::InvalidArgument(message) => ApiError::InvalidArgument(message),
            SchedulerError::EmptyQueue => ApiError::EmptyQueue,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body
///
/// Summarizer failures put the `Function crashed: ...` text in `error` and the
/// raw upstream reply in `apiResponse`, which is what note clients read.
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(rename = "apiResponse", skip_serializing_if = "Option::is_none")]
    api_response: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::InvalidArgument(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
            ApiError::EmptyQueue => (StatusCode::CONFLICT, "empty_queue"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Summarizer(_) => (StatusCode::INTERNAL_SERVER_ERROR, "summarizer_error"),
        };

        let message = self.to_string();
        let (error, api_response) = match &self {
            ApiError::Summarizer(e) => (message.clone(), e.upstream_body().map(str::to_string)),
            _ => (error_type.to_string(), None),
        };

        let body = Json(ErrorResponse {
            error,
            message,
            api_response,
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
