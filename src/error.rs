//! Error types for the books server

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// The book operation a request-scoped error arose from.
///
/// Each operation carries its own fixed client-facing failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookOperation {
    Create,
    Fetch,
    List,
    Delete,
}

impl BookOperation {
    /// Message returned when the storage call for this operation fails
    pub fn failure_message(self) -> &'static str {
        match self {
            BookOperation::Create => "Could not create Book",
            BookOperation::Fetch => "Could not fetch Book",
            BookOperation::List => "Could not get Books",
            BookOperation::Delete => "Could not delete book",
        }
    }

    fn empty_id_response(self) -> (StatusCode, &'static str) {
        match self {
            BookOperation::Fetch => (StatusCode::BAD_GATEWAY, "Id cannot be empty"),
            BookOperation::Delete => (StatusCode::INTERNAL_SERVER_ERROR, "id cannot be empty"),
            BookOperation::Create | BookOperation::List => {
                (StatusCode::BAD_REQUEST, "id cannot be empty")
            }
        }
    }
}

impl fmt::Display for BookOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookOperation::Create => "create",
            BookOperation::Fetch => "fetch",
            BookOperation::List => "list",
            BookOperation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Empty id for {0}")]
    EmptyId(BookOperation),

    #[error("Invalid id {1:?} for {0}")]
    InvalidId(BookOperation, String),

    #[error("Book {1} not found for {0}")]
    NotFound(BookOperation, i64),

    #[error("Database error during {0}: {1}")]
    Database(BookOperation, #[source] sqlx::Error),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl AppError {
    /// Status code and fixed client message for this error
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidBody(_) => (StatusCode::UNPROCESSABLE_ENTITY, "request failed"),
            AppError::EmptyId(op) => op.empty_id_response(),
            AppError::InvalidId(op, _) | AppError::NotFound(op, _) | AppError::Database(op, _) => {
                (StatusCode::BAD_REQUEST, op.failure_message())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        match &self {
            AppError::Database(op, e) => {
                tracing::error!(operation = %op, "Database error: {:?}", e);
            }
            other => {
                tracing::warn!(status = status.as_u16(), "Request failed: {}", other);
            }
        }

        let body = Json(ErrorResponse {
            message: message.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
