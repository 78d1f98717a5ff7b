//! HTTP error types with IntoResponse
//!
//! `ApiError` renders as JSON for the `/api` and `/health` routes.
//! `PageError` carries the same taxonomy but renders the HTML error page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::views;
use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code and user-facing message.
    ///
    /// Storage failures are logged here and replaced with a
    /// generic message.
    fn code_and_message(&self) -> (&'static str, String) {
        match self {
            Self::Validation(e) => ("validation_error", e.to_string()),
            Self::NotFound { resource, id } => {
                ("not_found", format!("{} '{}' not found", resource, id))
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                ("internal_error", "an internal error occurred".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = self.code_and_message();

        let body = json!({
            "error": code,
            "message": message
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

/// Error for HTML page handlers
#[derive(Debug)]
pub struct PageError(pub ApiError);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let (_, message) = self.0.code_and_message();

        (status, Html(views::error_page(status, &message))).into_response()
    }
}

impl From<ApiError> for PageError {
    fn from(e: ApiError) -> Self {
        Self(e)
    }
}

impl From<DbError> for PageError {
    fn from(e: DbError) -> Self {
        Self(e.into())
    }
}

impl From<ValidationError> for PageError {
    fn from(e: ValidationError) -> Self {
        Self(e.into())
    }
}
