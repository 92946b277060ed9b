// HTTP API Error Types
use axum::{response::IntoResponse, http::StatusCode, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::database::RecordError;
use crate::middleware::flash::{redirect_with_flash, Flash};
use crate::services::{ServiceError, StudentListView};
use crate::types::Operation;

/// Notice shown when an unexpected failure sends the user back to the list view
pub const GENERIC_FAILURE: &str = "An internal error occurred. Please try again.";

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    ValidationError {
        message: String,
        field_errors: Option<HashMap<String, String>>
    },

    // 404 Not Found, answered with an empty list view
    NotFound(String),

    // 500 class; answered with a redirect to the list view and an error notice
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::ValidationError { message, .. } => message,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        let mut response = json!({
            "success": false,
            "error": true,
            "message": self.message(),
            "code": self.error_code()
        });

        match self {
            ApiError::ValidationError { field_errors: Some(field_errors), .. } => {
                response["field_errors"] = json!(field_errors);
            }
            ApiError::NotFound(_) => {
                response["data"] = json!(StudentListView::empty());
            }
            _ => {}
        }

        response
    }

    /// Like `From<ServiceError>`, but storage failures get the operation's own notice
    pub fn for_operation(err: ServiceError, operation: Operation) -> Self {
        match err {
            ServiceError::Storage(_) => ApiError::internal_server_error(operation.failure_message()),
            other => other.into(),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation_error(
        message: impl Into<String>,
        field_errors: Option<HashMap<String, String>>
    ) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            field_errors
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert other error types to ApiError
impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::MissingRequiredFields(fields) => {
                let field_errors = fields
                    .into_iter()
                    .map(|field| (field.to_string(), "This field is required".to_string()))
                    .collect();
                ApiError::validation_error("All fields are required!", Some(field_errors))
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(err) => err.into(),
            ServiceError::NotFound(id) => ApiError::not_found(format!("Student {} not found", id)),
            ServiceError::Storage(db_err) => {
                // Log the real error but return generic message
                tracing::error!("Database error: {}", db_err);
                ApiError::internal_server_error(GENERIC_FAILURE)
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            // Failures never strand the user on a broken page
            ApiError::InternalServerError(message) => redirect_with_flash(Flash::error(message)),
            other => (other.status_code(), Json(other.to_json())).into_response(),
        }
    }
}
