//! Error types for client–registry communication.

use thiserror::Error;

/// Errors that can occur while talking to the registry.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Authentication failed. Deliberately collapses every cause (bad
    /// password, wrong account id, unreachable registry); the real cause is
    /// logged at debug level.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// No package with the given name exists on the registry.
    #[error("cannot find a package named `{0}`")]
    PackageNotFound(String),
    /// No user with the given email exists on the registry.
    #[error("cannot find a user with email `{0}`")]
    UserNotFound(String),
    /// No token exists for the requested package/user combination.
    #[error("no access token exists for this package/user combination")]
    TokenNotFound,
    /// The token belongs to the account owner and must not be deleted.
    #[error("access tokens belonging to the account owner cannot be deleted")]
    OwnershipViolation,
    /// The registry answered with an unexpected HTTP status.
    #[error("registry returned unexpected status {status}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
    },
    /// The HTTP request itself failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// A local file could not be read for upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
