//! Application error type and HTTP response mapping.
//!
//! Two error kinds cross the handler boundary: validation failures (400) and
//! missing entities (404). Storage faults surface as 500 with a generic body;
//! the cause is logged, never leaked.
//!
//! # Response Bodies
//!
//! - 400 → `{"errors": ["<message>", ...]}`
//! - 404 → `{"error": "<message>"}`
//! - 500 → `{"error": "internal server error"}`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing, empty, or references a nonexistent row.
    #[error("validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    /// The requested entity id does not resolve.
    #[error("{message}")]
    NotFound { message: String },

    /// Storage or other unexpected failure.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            errors: vec![message.into()],
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            AppError::NotFound { message } => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            AppError::Internal { message } => {
                tracing::error!(%message, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();

        // Deterministic order for assertions and logs.
        messages.sort();

        Self::Validation { errors: messages }
    }
}
