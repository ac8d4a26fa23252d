//! REST client implementation for the Memoria backend.
//!
//! This module provides the [`RestClient`] type, a thin CRUD layer over the
//! authenticated [`HttpClient`]: convenience verbs, non-2xx to error
//! conversion, and typed body decoding.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::rest::errors::RestError;

/// REST client for the Memoria API.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) on top of
/// the authenticated HTTP client. Unlike [`HttpClient::request`], which
/// returns every non-401 status as a response, these methods convert any
/// non-2xx status into [`RestError::Api`] carrying the backend's error body.
///
/// The client shares the underlying [`HttpClient`], so token refresh and
/// session-expired notification behave identically across every resource.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use memoria_client::rest::RestClient;
///
/// let client = RestClient::new(Arc::new(http_client));
///
/// // GET request
/// let response = client.get("grupos/", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"nombre": "Sistemas Inteligentes"});
/// let response = client.post("grupos/", body).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    /// The shared authenticated HTTP client.
    http_client: Arc<HttpClient>,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client over the given HTTP client.
    #[must_use]
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    /// Returns the underlying authenticated HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Api`] for non-2xx responses and
    /// [`RestError::Http`] for transport or session failures.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a GET request and decodes the response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Decode`] if the body does not match `T`, in
    /// addition to the failure modes of [`get`](Self::get).
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<T, RestError> {
        let response = self.get(path, query).await?;
        Ok(response.json()?)
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Api`] for non-2xx responses and
    /// [`RestError::Http`] for transport or session failures.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), None)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Api`] for non-2xx responses and
    /// [`RestError::Http`] for transport or session failures.
    pub async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), None)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Api`] for non-2xx responses and
    /// [`RestError::Http`] for transport or session failures.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, None).await
    }

    /// Builds, sends, and error-checks one request.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let mut builder = HttpRequest::builder(method, path);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }
        let request = builder.build().map_err(crate::clients::HttpError::from)?;

        let response = self.http_client.request(request).await?;

        if response.is_ok() {
            return Ok(response);
        }

        Err(RestError::Api {
            status: response.code,
            body: Self::serialize_error(&response),
        })
    }

    /// Serializes a non-2xx response body for the error message, falling
    /// back to `HTTP <status>` when the body carries nothing useful.
    fn serialize_error(response: &HttpResponse) -> String {
        match &response.body {
            serde_json::Value::Object(map) if map.is_empty() => format!("HTTP {}", response.code),
            body => serde_json::to_string(body).unwrap_or_else(|_| format!("HTTP {}", response.code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_serialize_error_uses_body_when_present() {
        let response = HttpResponse::new(
            400,
            HashMap::new(),
            json!({"numero": ["Este campo debe ser único."]}),
        );
        let message = RestClient::serialize_error(&response);
        assert!(message.contains("numero"));
    }

    #[test]
    fn test_serialize_error_falls_back_to_status() {
        let response = HttpResponse::new(404, HashMap::new(), json!({}));
        assert_eq!(RestClient::serialize_error(&response), "HTTP 404");
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
