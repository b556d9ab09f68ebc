//! Error translation for the HTTP boundary.
//!
//! Every service-level error becomes a JSON body `{"error": <message>}`
//! with a status code per the contract: 400 for validation and
//! malformed-identifier failures, 404 for missing records, 500 for
//! everything else. Store failure detail is logged, never leaked to the
//! client.

use crate::task::services::TaskServiceError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Operator-facing message for a missing record.
pub const MSG_TASK_NOT_FOUND: &str = "Tarea no encontrada";
/// Operator-facing message for a malformed identifier.
pub const MSG_INVALID_ID: &str = "ID inválido";
/// Operator-facing message for a missing or empty title.
pub const MSG_TITLE_REQUIRED: &str = "El título es requerido";
/// Operator-facing message for an unmatched route.
pub const MSG_ENDPOINT_NOT_FOUND: &str = "Endpoint no encontrado";
/// Operator-facing message for an unexpected store failure.
pub const MSG_INTERNAL_ERROR: &str = "Error interno del servidor";

/// JSON error body emitted for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// API error response carrying a status code and message body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Message placed in the `error` field of the body.
    pub message: String,
}

impl ApiErrorResponse {
    /// Creates a new API error response.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request response.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found response.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error response.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<TaskServiceError> for ApiErrorResponse {
    fn from(error: TaskServiceError) -> Self {
        match error {
            TaskServiceError::Validation(_) => Self::bad_request(MSG_TITLE_REQUIRED),
            TaskServiceError::InvalidIdentifier(_) => Self::bad_request(MSG_INVALID_ID),
            TaskServiceError::NotFound(_) => Self::not_found(MSG_TASK_NOT_FOUND),
            TaskServiceError::Store(store_error) => {
                tracing::error!(error = %store_error, "store operation failed");
                Self::internal_error(MSG_INTERNAL_ERROR)
            }
        }
    }
}
