//! Profile operations for the signed-in user.
//!
//! The backend exposes the user's own record under `auth/perfil/<id>/`:
//! fetch, partial update, and password change, plus the option lists the
//! profile form offers (`auth/opciones-perfil/`). These calls go through
//! the authenticated [`HttpClient`], so they participate in the normal
//! 401 refresh-and-retry recovery.
//!
//! A successful profile update also rewrites the profile stored in the
//! client's session, keeping `user_profile` in sync with the backend.

use serde::Deserialize;

use crate::auth::errors::AuthError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

/// Path prefix of the profile endpoints, relative to the API base URL.
pub const PROFILE_PATH: &str = "auth/perfil";

/// Path of the profile-options endpoint, relative to the API base URL.
pub const PROFILE_OPTIONS_PATH: &str = "auth/opciones-perfil/";

/// Successful profile-update response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdateResponse {
    /// Human-readable status message from the backend.
    pub mensaje: Option<String>,
    /// The updated person record.
    pub persona: Option<serde_json::Value>,
}

fn member_path(person_id: i64) -> String {
    format!("{PROFILE_PATH}/{person_id}/")
}

fn update_path(person_id: i64) -> String {
    format!("{PROFILE_PATH}/{person_id}/actualizar/")
}

fn password_path(person_id: i64) -> String {
    format!("{PROFILE_PATH}/{person_id}/cambiar-contrasena/")
}

/// Maps a rejected profile response to [`AuthError::ProfileFailed`],
/// preferring the backend's `error` field.
fn profile_error(response: &HttpResponse) -> AuthError {
    let message = response
        .body
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map_or_else(
            || match &response.body {
                serde_json::Value::Object(map) if map.is_empty() => {
                    format!("HTTP {}", response.code)
                }
                body => body.to_string(),
            },
            str::to_string,
        );

    AuthError::ProfileFailed {
        status: response.code,
        message,
    }
}

/// Fetches the person record behind the given id.
///
/// The backend wraps the record as `{"persona": ...}`; the inner record is
/// returned directly.
///
/// # Errors
///
/// Returns [`AuthError::ProfileFailed`] for backend rejections (e.g. an
/// unknown person id) and [`AuthError::Http`] for transport or session
/// failures.
pub async fn profile(
    client: &HttpClient,
    person_id: i64,
) -> Result<serde_json::Value, AuthError> {
    let request = HttpRequest::builder(HttpMethod::Get, member_path(person_id))
        .build()
        .map_err(crate::clients::HttpError::from)?;
    let response = client.request(request).await?;

    if !response.is_ok() {
        return Err(profile_error(&response));
    }

    Ok(response
        .body
        .get("persona")
        .cloned()
        .unwrap_or(response.body))
}

/// Applies a partial update to the person record and returns the result.
///
/// When the backend echoes the updated record, the profile stored in the
/// client's session is rewritten to match, so `user_profile` stays current
/// without a separate fetch.
///
/// # Errors
///
/// Returns [`AuthError::ProfileFailed`] carrying the backend's validation
/// errors when the payload is rejected, and [`AuthError::Http`] for
/// transport or session failures.
pub async fn update_profile(
    client: &HttpClient,
    person_id: i64,
    changes: serde_json::Value,
) -> Result<ProfileUpdateResponse, AuthError> {
    let request = HttpRequest::builder(HttpMethod::Put, update_path(person_id))
        .body(changes)
        .build()
        .map_err(crate::clients::HttpError::from)?;
    let response = client.request(request).await?;

    if !response.is_ok() {
        return Err(profile_error(&response));
    }

    let parsed: ProfileUpdateResponse =
        response.json().map_err(|e| AuthError::ProfileFailed {
            status: response.code,
            message: format!("Failed to parse profile response: {e}"),
        })?;

    if let Some(persona) = &parsed.persona {
        if let Some(mut session) = client.store().session() {
            session.user_profile = Some(persona.clone());
            client.store().set_session(session);
            tracing::debug!("Stored profile updated after profile change");
        }
    }

    Ok(parsed)
}

/// Changes the user's password.
///
/// Returns the backend's status message, if one was sent.
///
/// # Errors
///
/// Returns [`AuthError::ProfileFailed`] when the current password is wrong
/// or the new one is rejected, and [`AuthError::Http`] for transport or
/// session failures.
pub async fn change_password(
    client: &HttpClient,
    person_id: i64,
    current_password: &str,
    new_password: &str,
) -> Result<Option<String>, AuthError> {
    let body = serde_json::json!({
        "currentPassword": current_password,
        "newPassword": new_password,
    });
    let request = HttpRequest::builder(HttpMethod::Post, password_path(person_id))
        .body(body)
        .build()
        .map_err(crate::clients::HttpError::from)?;
    let response = client.request(request).await?;

    if !response.is_ok() {
        return Err(profile_error(&response));
    }

    Ok(response
        .body
        .get("mensaje")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string))
}

/// Fetches the option lists offered by the profile form (personnel types,
/// groups, academic degrees, and the like).
///
/// # Errors
///
/// Returns [`AuthError::ProfileFailed`] for backend rejections and
/// [`AuthError::Http`] for transport or session failures.
pub async fn profile_options(client: &HttpClient) -> Result<serde_json::Value, AuthError> {
    let request = HttpRequest::builder(HttpMethod::Get, PROFILE_OPTIONS_PATH)
        .build()
        .map_err(crate::clients::HttpError::from)?;
    let response = client.request(request).await?;

    if !response.is_ok() {
        return Err(profile_error(&response));
    }

    Ok(response.body)
}
