//! Login and logout against the backend auth endpoints.
//!
//! `POST /auth/login/` authenticates with email and password and returns an
//! access/refresh token pair plus the user's record. On success the tokens
//! and profile are written to the [`SessionStore`]; from then on every call
//! made through [`crate::clients::HttpClient`] is authenticated.

use crate::auth::errors::AuthError;
use crate::auth::session::{Session, SessionStore};
use crate::config::ApiConfig;
use serde::{Deserialize, Serialize};

/// Path of the login endpoint, relative to the API base URL.
pub const LOGIN_PATH: &str = "auth/login/";

/// Request body for login. Field names follow the backend contract.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    correo: &'a str,
    contrasena: &'a str,
}

/// An access/refresh token pair as issued by the backend.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer access token.
    pub access: String,
    /// Longer-lived refresh token.
    pub refresh: String,
}

/// Successful login response body.
///
/// Unknown fields are ignored; `tokens` and `persona` may each be absent if
/// the backend chooses not to issue them.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Human-readable status message from the backend.
    pub mensaje: Option<String>,
    /// The authenticated user's record.
    pub persona: Option<serde_json::Value>,
    /// Issued token pair.
    pub tokens: Option<TokenPair>,
}

/// Error body shape used by the backend for rejected logins.
#[derive(Debug, Deserialize)]
struct LoginErrorBody {
    error: Option<String>,
}

/// Authenticates against the backend and stores the resulting session.
///
/// On a 2xx response with tokens, the access token, refresh token, and user
/// profile are written to `store`, replacing any previous session. A 2xx
/// response without tokens leaves the store untouched.
///
/// # Errors
///
/// Returns [`AuthError::LoginFailed`] with the backend's `error` message for
/// non-2xx responses, or with `status: 0` for network errors.
///
/// # Example
///
/// ```rust,ignore
/// use memoria_client::{ApiConfig, BaseUrl, MemorySessionStore};
/// use memoria_client::auth::login;
///
/// let config = ApiConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:8000/api").unwrap())
///     .build()
///     .unwrap();
/// let store = MemorySessionStore::new();
///
/// let response = login(&config, &store, "ana@example.edu", "secret").await?;
/// println!("{:?}", response.mensaje);
/// ```
pub async fn login(
    config: &ApiConfig,
    store: &dyn SessionStore,
    correo: &str,
    contrasena: &str,
) -> Result<LoginResponse, AuthError> {
    let url = config.base_url().join(LOGIN_PATH);
    let request_body = LoginRequest { correo, contrasena };

    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .json(&request_body)
        .send()
        .await
        .map_err(|e| AuthError::LoginFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let body_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<LoginErrorBody>(&body_text)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or(body_text);
        return Err(AuthError::LoginFailed { status, message });
    }

    let login_response: LoginResponse =
        response.json().await.map_err(|e| AuthError::LoginFailed {
            status,
            message: format!("Failed to parse login response: {e}"),
        })?;

    if let Some(tokens) = &login_response.tokens {
        store.set_session(Session::new(
            tokens.access.clone(),
            Some(tokens.refresh.clone()),
            login_response.persona.clone(),
        ));
        tracing::debug!("Login succeeded; session stored");
    }

    Ok(login_response)
}

/// Destroys the stored session.
pub fn logout(store: &dyn SessionStore) {
    store.clear();
    tracing::debug!("Session cleared on logout");
}

/// Returns `true` if an access token is currently stored.
#[must_use]
pub fn is_authenticated(store: &dyn SessionStore) -> bool {
    store.access_token().is_some()
}
