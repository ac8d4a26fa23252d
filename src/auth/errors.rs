//! Error types for authentication operations.

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur during authentication flows.
///
/// Network failures are reported with `status: 0`; HTTP-level rejections
/// carry the response status and the backend's error body.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login request was rejected or could not be sent.
    #[error("Login failed (status {status}): {message}")]
    LoginFailed {
        /// HTTP status code, or 0 for network errors.
        status: u16,
        /// Error message from the backend, or a transport error description.
        message: String,
    },

    /// The refresh request was rejected, could not be sent, or returned no
    /// usable access token.
    #[error("Token refresh failed (status {status}): {message}")]
    RefreshFailed {
        /// HTTP status code, or 0 for network errors.
        status: u16,
        /// Error message from the backend, or a transport error description.
        message: String,
    },

    /// A profile operation was rejected by the backend.
    #[error("Profile operation failed (status {status}): {message}")]
    ProfileFailed {
        /// HTTP status code of the rejection.
        status: u16,
        /// Error message from the backend.
        message: String,
    },

    /// Transport, validation, or session failure in the underlying client.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl AuthError {
    /// Returns `true` if this error means the session was terminated and
    /// the user must log in again.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::Http(HttpError::SessionExpired))
    }
}
