//! HTTP error types for the mock API.
//!
//! Every error response carries the same fixed envelope:
//! `{"error":{"type":"api_error","message":<text>}}` with a non-2xx status
//! code and JSON content type. Client input problems are 400s; anything
//! else is an internal error, which the mock has no real way to produce
//! but keeps as the documented channel for extraction failures.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// The `error.type` constant carried by every error envelope.
const ERROR_TYPE: &str = "api_error";

/// Application-level error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Client sent invalid input (malformed JSON, missing required field).
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Unexpected failure while shaping a response.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    #[serde(rename = "type")]
    error_type: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = ErrorBody {
            error: ErrorDetail {
                error_type: ERROR_TYPE,
                message,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400_with_envelope() {
        let response = ApiError::BadRequest("Deployment name is required".to_owned())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500() {
        let response = ApiError::Internal("boom".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_carries_the_message() {
        let err = ApiError::BadRequest("Invalid JSON payload".to_owned());
        assert_eq!(err.to_string(), "bad request: Invalid JSON payload");
    }
}
