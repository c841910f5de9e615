//! Service-level error taxonomy.

use thiserror::Error;

/// Errors surfaced by the service layer.
///
/// `Validation` and `NotFound` are caller errors (4xx at the HTTP
/// boundary); `Store` wraps persistence failures (5xx). Nothing here
/// is retried automatically.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed input: bad enum value, missing required field,
    /// unparseable upload, inconsistent pairwise ids.
    #[error("{0}")]
    Validation(String),

    /// A referenced entity is absent where a lookup was required.
    #[error("{0}")]
    NotFound(String),

    /// Underlying persistence failure.
    #[error("database error: {0}")]
    Store(#[from] diesel::result::Error),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
