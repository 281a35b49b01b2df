//! Domain error types for the defect record server.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Database could not be reached
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    /// Required configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code, response_message) = match self {
            AppError::Database(err_str) => {
                tracing::error!("Database error: {}", err_str);
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::Unavailable(_) => (
                actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                "DATABASE_UNAVAILABLE",
                "The database is currently unreachable".to_string(),
            ),
            AppError::Config(err_str) => {
                tracing::error!("Configuration error: {}", err_str);
                (
                    actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
                    "CONFIGURATION_ERROR",
                    "The server is not configured for storage".to_string(),
                )
            }
            AppError::InvalidInput(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INVALID_INPUT",
                self.to_string(),
            ),
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: error_code.to_string(),
            message: response_message,
        })
    }
}

/// Error response body matching OpenAPI schema.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

// Conversion implementations for common error types

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(e) => AppError::Unavailable(e.to_string()),
            other => AppError::Database(other.to_string()),
        }
    }
}
