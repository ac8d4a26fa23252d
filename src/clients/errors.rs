//! HTTP-specific error types for the Memoria API client.
//!
//! # Error Handling
//!
//! The authenticated client distinguishes three failure modes:
//!
//! - [`HttpError::Network`]: the transport failed before a status was
//!   received; propagated unchanged to the caller
//! - [`HttpError::SessionExpired`]: a 401 could not be recovered by the
//!   refresh flow; the session has been cleared
//! - [`HttpError::InvalidRequest`]: the request failed validation before
//!   being sent
//!
//! Application-level error statuses (4xx/5xx other than an unrecoverable
//! 401) are NOT errors at this layer; they come back as ordinary
//! [`crate::clients::HttpResponse`] values.
//!
//! # Example
//!
//! ```rust,ignore
//! use memoria_client::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("status {}: {}", response.code, response.body),
//!     Err(HttpError::SessionExpired) => {
//!         // Session was cleared; send the user back to the login page.
//!     }
//!     Err(HttpError::Network(e)) => println!("network error: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("bad request: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path is empty.
    #[error("Cannot send a request with an empty path.")]
    EmptyPath,

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for the authenticated HTTP client.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The session could not be recovered: there was no refresh token, the
    /// refresh call failed, or the retried request was rejected again. The
    /// stored session has been cleared.
    #[error("Session expired; stored credentials were cleared")]
    SessionExpired,

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
