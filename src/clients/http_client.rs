//! Authenticated HTTP client for Memoria API communication.
//!
//! This module provides the [`HttpClient`] type, the single choke point for
//! outbound calls: it injects the bearer token, transparently recovers from
//! an expired access token with one refresh-and-retry cycle, and tears the
//! session down when recovery is impossible.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::auth::{refresh_access_token, SessionStore};
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiConfig, BaseUrl};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

type SessionExpiredHook = Box<dyn Fn() + Send + Sync>;

/// Authenticated HTTP client for the Memoria backend.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and `Authorization: Bearer`
/// - Transparent access-token refresh on 401, with a single retry
/// - Session teardown and subscriber notification on terminal auth failure
///
/// Per call, the recovery flow is:
///
/// 1. Send the request with the stored access token (or unauthenticated if
///    none is stored).
/// 2. Any status other than 401 is returned unchanged; success and
///    application errors alike are the caller's concern.
/// 3. On 401, exchange the stored refresh token for a new access token and
///    re-issue the original request exactly once.
/// 4. If there is no refresh token, the refresh call fails, or the retry is
///    rejected again, the whole session is cleared, session-expired
///    subscribers are notified, and the call fails with
///    [`HttpError::SessionExpired`].
///
/// Refresh attempts from concurrent calls are serialized: when several
/// in-flight requests hit 401 at once, one performs the refresh and the
/// rest reuse the rotated token.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use memoria_client::{ApiConfig, BaseUrl, MemorySessionStore};
/// use memoria_client::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8000/api").unwrap())
///     .build()
///     .unwrap();
/// let store = Arc::new(MemorySessionStore::new());
///
/// let client = HttpClient::new(&config, store);
/// client.on_session_expired(|| println!("back to the login page"));
///
/// let request = HttpRequest::builder(HttpMethod::Get, "grupos/")
///     .build()
///     .unwrap();
/// let response = client.request(request).await?;
/// ```
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API base URL (e.g., `http://localhost:8000/api`).
    base_url: BaseUrl,
    /// Store holding the process-wide session.
    store: Arc<dyn SessionStore>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Serializes refresh attempts across concurrent calls.
    refresh_gate: tokio::sync::Mutex<()>,
    /// Subscribers notified when the session is terminated.
    expired_hooks: Mutex<Vec<SessionExpiredHook>>,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new client for the given configuration and session store.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &ApiConfig, store: Arc<dyn SessionStore>) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Memoria API Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url().clone(),
            store,
            default_headers,
            refresh_gate: tokio::sync::Mutex::new(()),
            expired_hooks: Mutex::new(Vec::new()),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the session store this client reads credentials from.
    #[must_use]
    pub const fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Registers a callback invoked whenever the session is terminated.
    ///
    /// The presentation layer typically uses this to navigate back to the
    /// login entry point. Callbacks run on the task that hit the terminal
    /// failure, once per termination.
    pub fn on_session_expired(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.expired_hooks
            .lock()
            .expect("hook lock poisoned")
            .push(Box::new(hook));
    }

    /// Sends an HTTP request, transparently recovering from an expired
    /// access token at most once.
    ///
    /// Every non-401 response is returned unchanged, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The transport fails on the original request or the retry (`Network`)
    /// - A 401 cannot be recovered; the session has been cleared
    ///   (`SessionExpired`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);
        let token = self.store.access_token();

        let response = self.send(&request, &url, token.as_deref()).await?;
        if response.code != 401 {
            return Ok(response);
        }

        tracing::debug!(path = %request.path, "Received 401; attempting token refresh");
        self.refresh_and_retry(&request, &url, token).await
    }

    /// Runs the refresh leg of the recovery flow and re-issues the original
    /// request once.
    ///
    /// `stale_token` is the access token the rejected attempt was sent with;
    /// if the stored token no longer matches it, a concurrent call already
    /// rotated the credentials and the refresh call is skipped.
    async fn refresh_and_retry(
        &self,
        request: &HttpRequest,
        url: &str,
        stale_token: Option<String>,
    ) -> Result<HttpResponse, HttpError> {
        {
            let _guard = self.refresh_gate.lock().await;

            if self.store.access_token() == stale_token {
                let Some(refresh_token) = self.store.refresh_token() else {
                    return Err(self.terminate_session("no refresh token stored"));
                };

                match refresh_access_token(&self.client, &self.base_url, &refresh_token).await {
                    Ok(access_token) => {
                        self.store.set_access_token(access_token);
                        tracing::debug!("Access token refreshed after 401");
                    }
                    Err(e) => return Err(self.terminate_session(&e.to_string())),
                }
            } else {
                tracing::debug!("Token already rotated by a concurrent call; skipping refresh");
            }
        }

        let token = self.store.access_token();
        let retry = self.send(request, url, token.as_deref()).await?;

        // One recovery cycle per call: a second 401 is terminal.
        if retry.code == 401 {
            return Err(self.terminate_session("retried request was rejected again"));
        }

        Ok(retry)
    }

    /// Clears the session, notifies subscribers, and produces the terminal
    /// error for the caller.
    fn terminate_session(&self, reason: &str) -> HttpError {
        tracing::warn!("Session terminated: {reason}");
        self.store.clear();

        for hook in self.expired_hooks.lock().expect("hook lock poisoned").iter() {
            hook();
        }

        HttpError::SessionExpired
    }

    /// Builds and sends one HTTP attempt with the given bearer token.
    async fn send(
        &self,
        request: &HttpRequest,
        url: &str,
        access_token: Option<&str>,
    ) -> Result<HttpResponse, HttpError> {
        let headers = self.build_headers(request, access_token);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
            HttpMethod::Put => self.client.put(url),
            HttpMethod::Delete => self.client.delete(url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // For 5xx errors, keep the raw body for diagnostics
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Merges headers for one attempt: computed defaults first, bearer token
    /// if present, caller-supplied extras last so they win on collision.
    /// Header names are case-insensitive, so an extra replaces any default it
    /// matches regardless of casing.
    fn build_headers(
        &self,
        request: &HttpRequest,
        access_token: Option<&str>,
    ) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if let Some(token) = access_token {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
                headers.insert(key.clone(), value.clone());
            }
        }
        headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemorySessionStore, Session};

    fn create_test_config() -> ApiConfig {
        ApiConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8000/api").unwrap())
            .build()
            .unwrap()
    }

    fn create_test_client() -> HttpClient {
        HttpClient::new(&create_test_config(), Arc::new(MemorySessionStore::new()))
    }

    #[test]
    fn test_client_construction_with_config() {
        let client = create_test_client();
        assert_eq!(client.base_url().as_ref(), "http://localhost:8000/api");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Memoria API Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = ApiConfig::builder()
            .base_url(BaseUrl::new("http://localhost:8000/api").unwrap())
            .user_agent_prefix("MemoriaWeb/2.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config, Arc::new(MemorySessionStore::new()));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MemoriaWeb/2.0 | "));
        assert!(user_agent.contains("Memoria API Client"));
    }

    #[test]
    fn test_default_headers_are_json() {
        let client = create_test_client();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_authorization_is_not_a_default_header() {
        // The bearer header is computed per attempt from the store, never
        // cached on the client.
        let store = Arc::new(MemorySessionStore::new());
        store.set_session(Session::new("a1", Some("r1".to_string()), None));
        let client = HttpClient::new(&create_test_config(), store);

        assert!(!client.default_headers().contains_key("Authorization"));
    }

    #[test]
    fn test_caller_header_overrides_default_case_insensitively() {
        let client = create_test_client();

        let request = HttpRequest::builder(HttpMethod::Get, "grupos/")
            .header("content-type", "text/csv")
            .build()
            .unwrap();

        let headers = client.build_headers(&request, None);

        // One entry survives and it carries the caller's value.
        let matches: Vec<_> = headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].1, "text/csv");
    }

    #[test]
    fn test_caller_authorization_replaces_injected_bearer() {
        let client = create_test_client();

        let request = HttpRequest::builder(HttpMethod::Get, "grupos/")
            .header("authorization", "Bearer custom")
            .build()
            .unwrap();

        let headers = client.build_headers(&request, Some("A1"));

        let matches: Vec<_> = headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("authorization"))
            .collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].1, "Bearer custom");
    }

    #[test]
    fn test_bearer_attached_when_no_caller_override() {
        let client = create_test_client();

        let request = HttpRequest::builder(HttpMethod::Get, "grupos/")
            .build()
            .unwrap();

        let headers = client.build_headers(&request, Some("A1"));
        assert_eq!(headers.get("Authorization"), Some(&"Bearer A1".to_string()));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_session_expired_hooks_run_on_termination() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let store = Arc::new(MemorySessionStore::new());
        store.set_session(Session::new("a1", Some("r1".to_string()), None));
        let client = HttpClient::new(&create_test_config(), Arc::clone(&store) as Arc<dyn SessionStore>);

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_hook = Arc::clone(&calls);
        client.on_session_expired(move || {
            calls_in_hook.fetch_add(1, Ordering::SeqCst);
        });

        let error = client.terminate_session("test teardown");

        assert!(matches!(error, HttpError::SessionExpired));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(store.session().is_none());
    }
}
