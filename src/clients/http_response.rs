//! HTTP response types for the Memoria API client.
//!
//! This module provides the [`HttpResponse`] type and the [`Page`] envelope
//! used by the backend's paginated list endpoints.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

/// An HTTP response from the backend.
///
/// Contains the status code, headers, and the body parsed as JSON. The
/// authenticated client returns every non-401 response unchanged, so the
/// status may be any success or error code; interpreting application-level
/// errors is the caller's concern.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON response body. Empty bodies parse as `{}`.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new response from its parts.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Deserializes the response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.body.clone())
    }
}

/// A page of results from a paginated list endpoint.
///
/// The backend paginates with page-number pagination: list responses carry
/// the total count, absolute URLs of the neighboring pages, and the page's
/// items under `results`.
///
/// # Example
///
/// ```rust
/// use memoria_client::clients::Page;
/// use serde_json::json;
///
/// let body = json!({
///     "count": 12,
///     "next": "http://localhost:8000/api/patentes/?page=2",
///     "previous": null,
///     "results": [{"numero": "P-100"}]
/// });
///
/// let page: Page<serde_json::Value> = serde_json::from_value(body).unwrap();
/// assert_eq!(page.count, 12);
/// assert!(page.has_next());
/// assert!(!page.has_previous());
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Page<T> {
    /// Total number of items across all pages.
    pub count: u64,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// The items on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns `true` if a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}
