//! Application error type and its HTTP mapping.
//!
//! Every failure leaves the service as a JSON body of the form
//!
//! ```json
//! {
//!   "error": { "code": "validation_error", "message": "Invalid book payload", "details": {} },
//!   "errors": ["author: author must not be empty"]
//! }
//! ```
//!
//! `errors` is only present for validation failures and lists every
//! violated constraint.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// Machine-readable error summary embedded in every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, errors: Vec<String> },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    /// Builds a validation error carrying the full list of violations.
    pub fn bad_request(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, errors } => (
                "validation_error",
                message.clone(),
                json!({ "count": errors.len() }),
            ),
            AppError::NotFound { message, details } => {
                ("not_found", message.clone(), details.clone())
            }
            AppError::Conflict { message, details } => {
                ("conflict", message.clone(), details.clone())
            }
            AppError::Internal { message, details } => {
                ("internal_error", message.clone(), details.clone())
            }
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_error_info();

        let errors = match self {
            AppError::Validation { errors, .. } => errors,
            _ => Vec::new(),
        };

        (status, Json(ErrorBody { error, errors })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Book with this isbn already exists",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request("Invalid book payload", flatten_validation_errors(&errors))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request("Invalid book payload", vec![rejection.body_text()])
    }
}

/// Flattens validator output into sorted `"<field>: <message>"` strings.
///
/// Fields without a custom message fall back to the validator code.
pub fn flatten_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .errors()
        .iter()
        .flat_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(field_errors) => field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: failed '{}' check", e.code),
                })
                .collect::<Vec<_>>(),
            ValidationErrorsKind::Struct(nested) => flatten_validation_errors(nested)
                .into_iter()
                .map(|m| format!("{field}.{m}"))
                .collect(),
            ValidationErrorsKind::List(items) => items
                .iter()
                .flat_map(|(index, nested)| {
                    flatten_validation_errors(nested)
                        .into_iter()
                        .map(move |m| format!("{field}[{index}].{m}"))
                })
                .collect(),
        })
        .collect();

    messages.sort();
    messages
}
