//! Store-adapter error types.

use thiserror::Error;

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Image-store errors. Filesystem faults propagate; a missing file is not an
/// error here but an `Option`/`bool` on the relevant operations.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
