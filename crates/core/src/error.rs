//! Error types for Scout.
//!
//! Two layers live here. [`AppError`] is the unified error for startup and
//! plumbing (configuration, I/O, serialization). [`SearchError`] is the
//! per-request taxonomy raised by search providers; the assistant turns it
//! into user-facing text instead of propagating it.

use thiserror::Error;

/// Unified error type for Scout.
///
/// All fallible plumbing returns `Result<T, AppError>`.
/// We never panic; errors must be represented and propagated.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (missing or invalid credentials, bad settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Search provider errors surfaced outside of `ask`
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

/// Failure raised by a search provider for a single request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Credentials were rejected or are missing
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Provider quota or rate limit exceeded
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Network failure, timeout, or provider outage
    #[error("search unavailable: {0}")]
    Unavailable(String),

    /// Provider answered with data we could not parse
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// The request itself was rejected (bad query or parameters)
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Discriminant of [`SearchError`], used for fallback lookup and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchErrorKind {
    Authentication,
    QuotaExceeded,
    Unavailable,
    MalformedResponse,
    InvalidRequest,
}

impl SearchErrorKind {
    /// Stable lowercase name, used in logs and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::QuotaExceeded => "quota_exceeded",
            Self::Unavailable => "unavailable",
            Self::MalformedResponse => "malformed_response",
            Self::InvalidRequest => "invalid_request",
        }
    }
}

impl std::fmt::Display for SearchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SearchError {
    /// Classify this error.
    pub fn kind(&self) -> SearchErrorKind {
        match self {
            Self::Authentication(_) => SearchErrorKind::Authentication,
            Self::QuotaExceeded(_) => SearchErrorKind::QuotaExceeded,
            Self::Unavailable(_) => SearchErrorKind::Unavailable,
            Self::MalformedResponse(_) => SearchErrorKind::MalformedResponse,
            Self::InvalidRequest(_) => SearchErrorKind::InvalidRequest,
        }
    }
}
