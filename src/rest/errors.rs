//! REST-specific error types.

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur when calling typed REST resources.
#[derive(Debug, Error)]
pub enum RestError {
    /// The backend rejected the request with a non-2xx status. The body
    /// carries the backend's JSON error payload (validation errors included)
    /// serialized as a string, or `HTTP <status>` when no body was returned.
    #[error("{body}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// Serialized JSON error body, or `HTTP <status>`.
        body: String,
    },

    /// An update or delete was attempted on a resource without an id.
    #[error("Cannot update or delete {resource} without an id.")]
    MissingId {
        /// The resource type name.
        resource: &'static str,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Transport, validation, or session failure in the underlying client.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Returns `true` if this error means the session was terminated and
    /// the user must log in again.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::Http(HttpError::SessionExpired))
    }
}
