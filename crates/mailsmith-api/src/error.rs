//! API error types and response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use mailsmith_protocols::ErrorBody;

/// Errors surfaced by the generation endpoint.
///
/// Every variant maps to the `{ "error": ... }` envelope the clients expect.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty prompt; rejected before classification.
    #[error("Prompt is required")]
    EmptyPrompt,

    /// Bearer credential missing or mismatched.
    #[error("Invalid or missing authorization")]
    Unauthorized,

    /// Anything unexpected.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::EmptyPrompt => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
