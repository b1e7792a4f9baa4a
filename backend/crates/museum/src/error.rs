//! Museum Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Museum-specific result type alias
pub type MuseumResult<T> = Result<T, MuseumError>;

/// Museum-specific error variants
#[derive(Debug, Error)]
pub enum MuseumError {
    /// Requested record does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Request payload failed validation
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Image storage error
    #[error("Image storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MuseumError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MuseumError::NotFound(_) => StatusCode::NOT_FOUND,
            MuseumError::Validation(_) => StatusCode::BAD_REQUEST,
            MuseumError::Database(_) | MuseumError::Storage(_) | MuseumError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MuseumError::NotFound(_) => ErrorKind::NotFound,
            MuseumError::Validation(_) => ErrorKind::BadRequest,
            MuseumError::Database(_) | MuseumError::Storage(_) | MuseumError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MuseumError::Database(e) => {
                tracing::error!(error = %e, "Museum database error");
            }
            MuseumError::Storage(e) => {
                tracing::error!(error = %e, "Image storage error");
            }
            MuseumError::Internal(msg) => {
                tracing::error!(message = %msg, "Museum internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Museum error");
            }
        }
    }
}

impl IntoResponse for MuseumError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
