//! Handler failure model.

use thiserror::Error;

/// Result type returned by request handler logic.
///
/// A handler propagates any failure with `?`; the dispatch layer turns the
/// `Err` arm into the centralized error response.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// A request handler failure.
///
/// One catch-all kind: whatever error value the handler's work produced is
/// carried verbatim, with no further classification.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct HandlerError(#[from] anyhow::Error);

impl HandlerError {
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }
}
