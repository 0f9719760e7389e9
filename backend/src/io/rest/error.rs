//! Translation of domain failures into HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use tracing::error;

use crate::domain::BookError;

/// Error returned by every book handler
#[derive(Debug)]
pub enum ApiError {
    Book(BookError),
    /// The request could not be decoded (bad JSON body, non-numeric id)
    InvalidRequest(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::Book(err @ BookError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
            }
            ApiError::Book(err @ BookError::IdMismatch { .. }) => {
                (StatusCode::BAD_REQUEST, "ID_MISMATCH", err.to_string())
            }
            ApiError::Book(err @ BookError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "CONSTRAINT_VIOLATION", err.to_string())
            }
            ApiError::Book(err @ BookError::DataIntegrity(_)) => {
                (StatusCode::BAD_REQUEST, "DATA_INTEGRITY_VIOLATION", err.to_string())
            }
            ApiError::Book(BookError::Storage(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
            ),
            ApiError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", message.clone())
            }
        }
    }
}

impl From<BookError> for ApiError {
    fn from(err: BookError) -> Self {
        ApiError::Book(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Book(BookError::Storage(cause)) = &self {
            error!("Storage failure while handling request: {:?}", cause);
        }

        let (status, code, message) = self.parts();
        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
