//! HTTP client types for Memoria API communication.
//!
//! This module provides the foundational HTTP layer used by every other
//! call in the SDK. It handles bearer-token injection, transparent
//! access-token refresh on 401, and response parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: the authenticated async HTTP client
//! - [`HttpRequest`]: a request to be sent to the backend
//! - [`HttpResponse`]: a parsed response from the backend
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`Page`]: the paginated list envelope used by list endpoints
//!
//! # Recovery Behavior
//!
//! A 401 on any request triggers one refresh of the access token followed by
//! one retry of the original request. Any other status, success or error,
//! is returned to the caller unchanged. When recovery is impossible (no
//! refresh token, refresh rejected, or the retry rejected again), the
//! session is cleared, session-expired subscribers are notified, and the
//! call fails with [`HttpError::SessionExpired`].

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, Page};
