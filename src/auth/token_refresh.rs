//! Access-token refresh against the backend refresh endpoint.
//!
//! The backend issues short-lived access tokens alongside a longer-lived
//! refresh token. When an access token expires, `POST /auth/refresh/` with
//! the refresh token in the body yields a fresh access token. The refresh
//! token itself is not rotated by this endpoint.
//!
//! [`crate::clients::HttpClient`] calls [`refresh_access_token`] internally
//! when it sees a 401; it is also exposed for applications that want to
//! refresh proactively.

use crate::auth::errors::AuthError;
use crate::config::BaseUrl;
use serde::{Deserialize, Serialize};

/// Path of the refresh endpoint, relative to the API base URL.
pub const REFRESH_PATH: &str = "auth/refresh/";

/// Request body for token refresh.
#[derive(Debug, Serialize)]
struct TokenRefreshRequest<'a> {
    refresh: &'a str,
}

/// Successful refresh response body.
#[derive(Debug, Deserialize)]
struct TokenRefreshResponse {
    access: String,
}

/// Exchanges a refresh token for a new access token.
///
/// Every failure mode (transport error, non-2xx status, or a 2xx body
/// without a usable `access` field) is reported as
/// [`AuthError::RefreshFailed`];
/// callers treat them all as "the session cannot be recovered".
///
/// # Errors
///
/// Returns [`AuthError::RefreshFailed`] with `status: 0` for network errors,
/// or with the response status for HTTP-level rejections and malformed
/// bodies.
pub async fn refresh_access_token(
    client: &reqwest::Client,
    base_url: &BaseUrl,
    refresh_token: &str,
) -> Result<String, AuthError> {
    let url = base_url.join(REFRESH_PATH);
    let request_body = TokenRefreshRequest {
        refresh: refresh_token,
    };

    let response = client
        .post(&url)
        .json(&request_body)
        .send()
        .await
        .map_err(|e| AuthError::RefreshFailed {
            status: 0,
            message: format!("Network error: {e}"),
        })?;

    let status = response.status().as_u16();

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        return Err(AuthError::RefreshFailed {
            status,
            message: error_body,
        });
    }

    let token_response: TokenRefreshResponse =
        response
            .json()
            .await
            .map_err(|e| AuthError::RefreshFailed {
                status,
                message: format!("Failed to parse refresh response: {e}"),
            })?;

    Ok(token_response.access)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_request_serializes_refresh_field() {
        let request = TokenRefreshRequest { refresh: "r1" };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"refresh":"r1"}"#);
    }

    #[test]
    fn test_refresh_response_requires_access_field() {
        let ok: TokenRefreshResponse = serde_json::from_str(r#"{"access":"a2"}"#).unwrap();
        assert_eq!(ok.access, "a2");

        let missing: Result<TokenRefreshResponse, _> = serde_json::from_str(r#"{"token":"a2"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_refresh_path_constant() {
        assert_eq!(REFRESH_PATH, "auth/refresh/");
    }

    #[tokio::test]
    async fn test_refresh_reports_network_error_with_status_zero() {
        // Port 9 (discard) is not listening; the request fails at transport level.
        let base = BaseUrl::new("http://127.0.0.1:9/api").unwrap();
        let client = reqwest::Client::new();

        let result = refresh_access_token(&client, &base, "r1").await;

        match result {
            Err(AuthError::RefreshFailed { status, message }) => {
                assert_eq!(status, 0);
                assert!(!message.is_empty());
            }
            other => panic!("Expected RefreshFailed, got: {other:?}"),
        }
    }
}
