//! Shared error types for the services crate.

use thiserror::Error;

use edu_core::{FormError, InvalidSessionWrite};
use storage::StorageError;

/// Errors emitted by `SessionGuard` writes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    InvalidWrite(#[from] InvalidSessionWrite),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while resolving API configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid api base url `{value}`: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported api url scheme `{0}`")]
    UnsupportedScheme(String),
}

/// Errors emitted by `ApiClient` and the resource services built on it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend answered 401; the local session has been cleared.
    #[error("session expired, please sign in again")]
    AuthExpired,
    #[error("request failed with status {status}: {detail}")]
    Server { status: u16, detail: String },
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("invalid endpoint path: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    #[must_use]
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Form(#[from] FormError),
    /// Credentials refused by the backend, with its message.
    #[error("{0}")]
    Rejected(String),
    #[error("unexpected login response: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Api(#[from] ApiError),
}
