//! API error types with IntoResponse
//!
//! Errors are rendered as the standard envelope with the matching
//! status code. Store failures are logged in full and surfaced with a
//! generic message plus an operation code; internals never leak.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::response::{Envelope, ErrorBody};
use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Domain validation failed (400)
    Validation(ValidationError),

    /// Payload could not be interpreted, e.g. unknown patch fields (400)
    BadRequest { message: String },

    /// Upload rejected: wrong content type or malformed multipart (400)
    Upload { message: String },

    /// Resource not found (404)
    NotFound {
        message: &'static str,
        code: &'static str,
    },

    /// Store failure during the named operation (500, logged)
    Database { op: &'static str, source: DbError },

    /// Unexpected failure during the named operation (500, logged)
    Internal { op: &'static str, message: String },
}

impl ApiError {
    /// Tag a store failure with the operation it interrupted.
    pub fn db(op: &'static str, source: DbError) -> Self {
        Self::Database { op, source }
    }

    pub fn not_found(message: &'static str, code: &'static str) -> Self {
        Self::NotFound { message, code }
    }

    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn internal(op: &'static str, message: impl Into<String>) -> Self {
        Self::Internal {
            op,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, code) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string(), "VALIDATION_ERROR"),
            Self::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, message.clone(), "VALIDATION_ERROR")
            }
            Self::Upload { message } => (StatusCode::BAD_REQUEST, message.clone(), "UPLOAD_ERROR"),
            Self::NotFound { message, code } => {
                (StatusCode::NOT_FOUND, (*message).to_string(), *code)
            }
            Self::Database { op, source } => {
                // Log the actual error, return a generic message.
                tracing::error!(op, error = %source, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                    *op,
                )
            }
            Self::Internal { op, message } => {
                tracing::error!(op, detail = %message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                    *op,
                )
            }
        };

        let body = Envelope::<()> {
            success: false,
            data: None,
            error: Some(ErrorBody { message, code }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}
