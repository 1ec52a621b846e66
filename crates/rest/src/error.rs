//! Error types for the patient record API.
//!
//! This module defines the error type returned by every handler, with
//! automatic conversion to a JSON error response.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are mapped to HTTP status codes:
//!
//! | Storage Error | HTTP Status |
//! |--------------|-------------|
//! | Resource(NotFound) | 404 |
//! | Resource(NoMatches) | 404 |
//! | Resource(AlreadyExists) | 400 |
//! | Validation | 422 |
//! | Query (bad sort_by / order) | 400 |
//! | Backend | 500 |
//!
//! Request-level failures (unreadable JSON, non-JSON bodies, oversized bodies)
//! map to 400, 415 and 413.
//!
//! # Response Body
//!
//! ```json
//! {"detail": "Patient not found"}
//! ```
//!
//! Validation errors carry every violation:
//!
//! ```json
//! {"detail": [{"field": "age", "message": "must be greater than 0 and less than 120 (got 150)"}]}
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use vitals_persistence::error::{
    BackendError, FieldViolation, QueryError, ResourceError, StorageError, ValidationError,
};

/// The primary error type for REST API operations.
///
/// This enum provides semantic error types that map cleanly to HTTP status codes.
#[derive(Debug, Error)]
pub enum RestError {
    /// Record or match not found (HTTP 404).
    #[error("Not found: {message}")]
    NotFound {
        /// Error message.
        message: String,
    },

    /// Bad request: bad argument, duplicate id or unreadable body (HTTP 400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Field constraints violated (HTTP 422).
    #[error("Validation failed: {} violation(s)", .violations.len())]
    Validation {
        /// Every violated constraint.
        violations: Vec<FieldViolation>,
    },

    /// Request body is not JSON (HTTP 415).
    #[error("Unsupported media type: {content_type}")]
    UnsupportedMediaType {
        /// The rejected Content-Type.
        content_type: String,
    },

    /// Request body too large (HTTP 413).
    #[error("Payload too large: {message}")]
    PayloadTooLarge {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    #[error("Internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Creates a 422 error for a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        RestError::Validation {
            violations: vec![FieldViolation::new(field, message)],
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            RestError::Validation { violations } => {
                warn!(violations = violations.len(), "Rejecting invalid input");
                let detail: Vec<_> = violations
                    .iter()
                    .map(|v| json!({"field": v.field, "message": v.message}))
                    .collect();
                json!({ "detail": detail })
            }
            RestError::InternalError { message } => {
                error!(error = %message, "Request failed");
                json!({ "detail": message })
            }
            RestError::UnsupportedMediaType { content_type } => {
                json!({ "detail": format!("Unsupported media type: {}", content_type) })
            }
            RestError::NotFound { message }
            | RestError::BadRequest { message }
            | RestError::PayloadTooLarge { message } => json!({ "detail": message }),
        };

        (status, Json(body)).into_response()
    }
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Query(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { .. } => RestError::NotFound {
                message: "Patient not found".to_string(),
            },
            ResourceError::NoMatches => RestError::NotFound {
                message: "No matching patients found".to_string(),
            },
            ResourceError::AlreadyExists { id } => RestError::BadRequest {
                message: format!("Patient id already exists: {}", id),
            },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        RestError::Validation {
            violations: err.violations,
        }
    }
}

impl From<QueryError> for RestError {
    fn from(err: QueryError) -> Self {
        RestError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        RestError::InternalError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
