//! Invariant checks that surface as errors instead of panics.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// A failed invariant, carrying the message it was checked with.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct InvariantError(String);

/// Check a condition, returning an [`InvariantError`] when it does not hold.
///
/// Intended for guard clauses at the top of handlers and services:
///
/// ```
/// use server_utils::validation::invariant;
///
/// fn rename(name: &str) -> anyhow::Result<()> {
///     invariant(!name.is_empty(), "name must not be empty")?;
///     Ok(())
/// }
/// ```
pub fn invariant(condition: bool, message: impl Into<String>) -> Result<(), InvariantError> {
    if condition {
        Ok(())
    } else {
        Err(InvariantError(message.into()))
    }
}

/// Like [`invariant`], but only builds the message when the check fails.
pub fn invariant_with<F>(condition: bool, message: F) -> Result<(), InvariantError>
where
    F: FnOnce() -> String,
{
    if condition {
        Ok(())
    } else {
        Err(InvariantError(message()))
    }
}

/// Check a condition, returning a 400 response for the client when it fails.
pub fn invariant_response(condition: bool, message: &str) -> Result<(), Response> {
    invariant_response_with_status(condition, message, StatusCode::BAD_REQUEST)
}

/// Like [`invariant_response`] with a caller-chosen status code.
pub fn invariant_response_with_status(
    condition: bool,
    message: &str,
    status: StatusCode,
) -> Result<(), Response> {
    if condition {
        Ok(())
    } else {
        Err((status, message.to_owned()).into_response())
    }
}
