//! Typed error handling for the folio API
//!
//! Every failure a handler can produce maps to one variant here, and each
//! variant knows its HTTP status code and machine-readable error code.
//! Validation failures render the field→messages map clients expect from a
//! 422; everything else renders a `{code, message, details?}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// Per-field validation messages, keyed by field name.
///
/// A `BTreeMap` keeps key order stable across responses.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// The main error type for folio request handling
#[derive(Debug, Error)]
pub enum ApiError {
    /// A path-resolved entity does not exist
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: &'static str, id: Uuid },

    /// Input validation failed for one or more fields
    #[error("{}", first_message(.0))]
    Validation(FieldErrors),

    /// Missing or invalid bearer credential
    #[error("Unauthenticated.")]
    Unauthenticated,

    /// Storage or lock failure (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

fn first_message(errors: &FieldErrors) -> String {
    errors
        .values()
        .flatten()
        .next()
        .cloned()
        .unwrap_or_else(|| "The given data was invalid.".to_string())
}

/// Error response structure for non-validation errors
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Build a validation error for a single field
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        ApiError::Validation(errors)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "RESOURCE_NOT_FOUND",
            ApiError::Validation(_) => "VALIDATION_FAILED",
            ApiError::Unauthenticated => "UNAUTHENTICATED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::NotFound { resource, id } => Some(serde_json::json!({
                "resource": resource,
                "id": id.to_string(),
            })),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // 422 carries the field→messages map
            ApiError::Validation(errors) => {
                let body = serde_json::json!({
                    "message": first_message(&errors),
                    "errors": errors,
                });
                (status, Json(body)).into_response()
            }
            other => {
                let body = ErrorResponse {
                    code: other.error_code().to_string(),
                    message: other.to_string(),
                    details: other.details(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// A specialized Result type for folio handlers
pub type ApiResult<T> = Result<T, ApiError>;
