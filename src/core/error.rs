//! Typed error handling for the lexmatch API
//!
//! Errors fall into the three categories the HTTP surface distinguishes:
//!
//! - [`ValidationError`]: malformed client input, surfaced as 400
//! - not-found: a well-formed id with no record, surfaced as 404
//! - internal: store access failures, surfaced as a generic 500
//!
//! Every error renders as a JSON `{ "message": ... }` body, with an extra
//! `details` value when a filter body fails schema validation.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

use super::model::LawyerId;

/// The main error type for API operations
#[derive(Debug)]
pub enum ApiError {
    /// Client input errors (malformed ids, unknown enum values, bad ranges)
    Validation(ValidationError),

    /// A well-formed lawyer id with no matching record
    NotFound { id: LawyerId },

    /// Unexpected internal failure; the message is logged, never served
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "{}", e),
            ApiError::NotFound { .. } => write!(f, "Lawyer not found"),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

/// Error response body served to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Optional validation detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the response body
    ///
    /// Internal errors always serve a generic message; the underlying cause
    /// stays in the server log.
    pub fn to_response(&self) -> ErrorResponse {
        let message = match self {
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        ErrorResponse {
            message,
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            ApiError::Validation(ValidationError::InvalidBody { message }) => {
                Some(serde_json::json!(message))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(msg) = &self {
            tracing::error!(error = %msg, "request failed");
        }
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Client input errors, all mapping to 400
#[derive(Debug)]
pub enum ValidationError {
    /// Lawyer id is not a positive integer
    InvalidId { value: String },

    /// Practice area outside the enumeration
    UnknownPracticeArea { value: String },

    /// Experience level outside the enumeration
    UnknownExperienceLevel { value: String },

    /// Minimum rating missing the [1, 5] band
    RatingOutOfRange { value: f64 },

    /// Price bounds non-numeric, negative, or inverted
    InvalidPriceRange,

    /// Search endpoint called without a query
    EmptySearchQuery,

    /// Request body failed schema validation
    InvalidBody { message: String },

    /// Per-field validation failures on create/update payloads
    FieldErrors(Vec<FieldError>),
}

/// A single field validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidId { .. } => write!(f, "Invalid lawyer ID"),
            ValidationError::UnknownPracticeArea { .. } => write!(f, "Invalid practice area"),
            ValidationError::UnknownExperienceLevel { .. } => {
                write!(f, "Invalid experience level")
            }
            ValidationError::RatingOutOfRange { .. } => {
                write!(f, "Invalid rating. Must be between 1 and 5")
            }
            ValidationError::InvalidPriceRange => write!(f, "Invalid price range"),
            ValidationError::EmptySearchQuery => write!(f, "Search query is required"),
            ValidationError::InvalidBody { .. } => write!(f, "Invalid filter criteria"),
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Validation(ValidationError::InvalidBody {
            message: err.to_string(),
        })
    }
}

/// A specialized Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
