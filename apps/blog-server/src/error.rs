//! Error handling - translates each failure to its HTTP response.
//!
//! Client-facing failures carry plain-text reasons; lower-level faults are
//! logged and reported as a bare 500.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use blog_core::ValidationError;
use blog_core::error::{ImageError, RepoError};

/// Application-level error type covering every operation outcome.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized => write!(f, "Unauthorized"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(msg) => HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body(msg.clone()),
            AppError::BadRequest(msg) => HttpResponse::BadRequest()
                .content_type("text/plain; charset=utf-8")
                .body(msg.clone()),
            AppError::Unauthorized => HttpResponse::Unauthorized().finish(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Internal Server Error")
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<ImageError> for AppError {
    fn from(err: ImageError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
