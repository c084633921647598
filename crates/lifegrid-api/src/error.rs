//! Error types for the HTTP API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lifegrid_core::ServiceError;
use lifegrid_types::GridError;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested board was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request body or a parameter was invalid.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A UUID could not be parsed from the request path.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// The board did not stabilize within the iteration budget.
    #[error("board did not stabilize within {max_iterations} iterations")]
    Unstable {
        /// Budget the search ran with.
        max_iterations: u32,
    },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_client_error() {
            Self::BadRequest(err.to_string())
        } else {
            tracing::error!(error = %err, "Board service failed");
            Self::Internal(err.to_string())
        }
    }
}

impl From<GridError> for ApiError {
    fn from(err: GridError) -> Self {
        Self::BadRequest(format!("invalid board_state: {err}"))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(format!("request body is null or invalid: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(format!("invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Unstable { max_iterations } = self {
            let status = StatusCode::UNPROCESSABLE_ENTITY;
            let body = serde_json::json!({
                "title": "Unprocessable Entity",
                "detail": format!(
                    "The board could not reach a final stable state within {max_iterations} iterations."
                ),
                "error": self.to_string(),
                "status": status.as_u16(),
            });
            return (status, axum::Json(body)).into_response();
        }

        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::BadRequest(msg) | Self::InvalidUuid(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Unstable { .. } => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
