//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portal_core::error::PortalError;
use serde::Serialize;
use thiserror::Error;

/// The only message an unexpected failure is allowed to show the caller.
/// The real detail is logged, never returned.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `PortalError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub PortalError);

impl From<PortalError> for ApiError {
    fn from(err: PortalError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            PortalError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            PortalError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            PortalError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            PortalError::Infrastructure(detail) => {
                tracing::error!(%detail, "unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_FAILURE_MESSAGE.to_owned(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
