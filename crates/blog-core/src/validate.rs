//! Request field validation for post writes.
//!
//! Two entry points share one constraint table: [`validate_full`] for create
//! and full update, [`validate_partial`] for patch. Checks run in a fixed
//! order (title, author, content emptiness, content length) and the first
//! failure wins.

use thiserror::Error;

/// Maximum accepted content length, in characters. 1024 itself is valid.
pub const CONTENT_MAX_CHARS: usize = 1024;

/// A rejected write payload, carrying the exact reason reported to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is empty")]
    EmptyField(&'static str),

    #[error("Content exceed the max length of {CONTENT_MAX_CHARS} chars")]
    ContentTooLong,
}

/// Validate a payload where every field is required.
///
/// A missing field counts as empty, same as an empty string.
pub fn validate_full(
    title: Option<&str>,
    author: Option<&str>,
    content: Option<&str>,
) -> Result<(), ValidationError> {
    if title.is_none_or(str::is_empty) {
        return Err(ValidationError::EmptyField("Title"));
    }

    if author.is_none_or(str::is_empty) {
        return Err(ValidationError::EmptyField("Author"));
    }

    let content = content.filter(|c| !c.is_empty());
    let Some(content) = content else {
        return Err(ValidationError::EmptyField("Content"));
    };

    if content.chars().count() > CONTENT_MAX_CHARS {
        return Err(ValidationError::ContentTooLong);
    }

    Ok(())
}

/// Validate a patch payload: a missing field means "leave unchanged" and is
/// skipped, while a present-but-empty string is an attempt to clear a
/// required field and is rejected.
pub fn validate_partial(
    title: Option<&str>,
    author: Option<&str>,
    content: Option<&str>,
) -> Result<(), ValidationError> {
    if title.is_some_and(str::is_empty) {
        return Err(ValidationError::EmptyField("Title"));
    }

    if author.is_some_and(str::is_empty) {
        return Err(ValidationError::EmptyField("Author"));
    }

    if content.is_some_and(str::is_empty) {
        return Err(ValidationError::EmptyField("Content"));
    }

    if let Some(content) = content {
        if content.chars().count() > CONTENT_MAX_CHARS {
            return Err(ValidationError::ContentTooLong);
        }
    }

    Ok(())
}
