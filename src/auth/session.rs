//! Session state and the pluggable session store.
//!
//! A [`Session`] holds the credentials and profile of the single signed-in
//! user: a short-lived access token, a longer-lived refresh token, and the
//! last-known user record. At most one session exists at a time.
//!
//! The [`SessionStore`] trait abstracts where that state lives so the HTTP
//! client never touches ambient global storage. The in-process
//! [`MemorySessionStore`] is the default; applications embedding the SDK can
//! provide their own implementation backed by whatever persistence they use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::RwLock;

/// An authenticated session for Memoria API calls.
///
/// Created on successful login; the access token is replaced in place on
/// successful refresh; the whole session is destroyed on logout or
/// unrecoverable refresh failure.
///
/// # Example
///
/// ```rust
/// use memoria_client::Session;
///
/// let session = Session::new("access-token", Some("refresh-token".to_string()), None);
/// assert_eq!(session.access_token, "access-token");
///
/// // Sessions can be serialized for storage
/// let json = serde_json::to_string(&session).unwrap();
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// The opaque bearer access token.
    pub access_token: String,

    /// The opaque refresh token, if one was issued.
    pub refresh_token: Option<String>,

    /// Last-known user record, as returned by the backend.
    pub user_profile: Option<serde_json::Value>,
}

impl Session {
    /// Creates a new session with the specified credentials.
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        user_profile: Option<serde_json::Value>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            user_profile,
        }
    }
}

// Tokens are credentials; keep them out of debug output.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"*****")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "*****"),
            )
            .field("user_profile", &self.user_profile)
            .finish()
    }
}

/// Storage abstraction for the process-wide session.
///
/// Implementations must be safe to call from concurrent tasks; semantics are
/// last-writer-wins. The [`crate::clients::HttpClient`] only mutates the
/// store through [`set_access_token`](Self::set_access_token) (token
/// rotation) and [`clear`](Self::clear) (session teardown).
pub trait SessionStore: Send + Sync {
    /// Returns a snapshot of the current session, if one exists.
    fn session(&self) -> Option<Session>;

    /// Replaces the current session.
    fn set_session(&self, session: Session);

    /// Replaces the access token in place, keeping the refresh token and
    /// profile. If no session exists, one is created holding only the
    /// access token.
    fn set_access_token(&self, access_token: String);

    /// Destroys the session entirely: access token, refresh token, profile.
    fn clear(&self);

    /// Returns the current access token, if any.
    fn access_token(&self) -> Option<String> {
        self.session().map(|s| s.access_token)
    }

    /// Returns the current refresh token, if any.
    fn refresh_token(&self) -> Option<String> {
        self.session().and_then(|s| s.refresh_token)
    }

    /// Returns the stored user profile, if any.
    fn user_profile(&self) -> Option<serde_json::Value> {
        self.session().and_then(|s| s.user_profile)
    }
}

/// In-process [`SessionStore`] backed by an `RwLock`.
///
/// This is the default store for applications that keep the session in
/// memory for the lifetime of the process.
///
/// # Example
///
/// ```rust
/// use memoria_client::{MemorySessionStore, Session, SessionStore};
///
/// let store = MemorySessionStore::new();
/// assert!(store.session().is_none());
///
/// store.set_session(Session::new("a1", Some("r1".to_string()), None));
/// assert_eq!(store.access_token(), Some("a1".to_string()));
///
/// store.clear();
/// assert!(store.session().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn session(&self) -> Option<Session> {
        self.inner.read().expect("session lock poisoned").clone()
    }

    fn set_session(&self, session: Session) {
        *self.inner.write().expect("session lock poisoned") = Some(session);
    }

    fn set_access_token(&self, access_token: String) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        match guard.as_mut() {
            Some(session) => session.access_token = access_token,
            None => *guard = Some(Session::new(access_token, None, None)),
        }
    }

    fn clear(&self) {
        *self.inner.write().expect("session lock poisoned") = None;
    }
}

// Verify store types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
    assert_send_sync::<MemorySessionStore>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_store_has_no_session() {
        let store = MemorySessionStore::new();
        assert!(store.session().is_none());
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
        assert!(store.user_profile().is_none());
    }

    #[test]
    fn test_set_session_replaces_everything() {
        let store = MemorySessionStore::new();
        store.set_session(Session::new(
            "a1",
            Some("r1".to_string()),
            Some(json!({"nombre": "Ana"})),
        ));

        assert_eq!(store.access_token(), Some("a1".to_string()));
        assert_eq!(store.refresh_token(), Some("r1".to_string()));
        assert_eq!(store.user_profile(), Some(json!({"nombre": "Ana"})));

        store.set_session(Session::new("a2", None, None));
        assert_eq!(store.access_token(), Some("a2".to_string()));
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn test_set_access_token_preserves_refresh_and_profile() {
        let store = MemorySessionStore::new();
        store.set_session(Session::new(
            "a1",
            Some("r1".to_string()),
            Some(json!({"nombre": "Ana"})),
        ));

        store.set_access_token("a2".to_string());

        assert_eq!(store.access_token(), Some("a2".to_string()));
        assert_eq!(store.refresh_token(), Some("r1".to_string()));
        assert_eq!(store.user_profile(), Some(json!({"nombre": "Ana"})));
    }

    #[test]
    fn test_set_access_token_on_empty_store_creates_session() {
        let store = MemorySessionStore::new();
        store.set_access_token("a1".to_string());

        let session = store.session().unwrap();
        assert_eq!(session.access_token, "a1");
        assert!(session.refresh_token.is_none());
        assert!(session.user_profile.is_none());
    }

    #[test]
    fn test_clear_removes_all_fields() {
        let store = MemorySessionStore::new();
        store.set_session(Session::new(
            "a1",
            Some("r1".to_string()),
            Some(json!({"nombre": "Ana"})),
        ));

        store.clear();

        assert!(store.session().is_none());
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
        assert!(store.user_profile().is_none());
    }

    #[test]
    fn test_debug_masks_tokens() {
        let session = Session::new("secret-access", Some("secret-refresh".to_string()), None);
        let debug = format!("{session:?}");
        assert!(!debug.contains("secret-access"));
        assert!(!debug.contains("secret-refresh"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_session_serde_round_trip() {
        let session = Session::new("a1", Some("r1".to_string()), Some(json!({"id": 7})));
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
