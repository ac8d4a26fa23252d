//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated API base URL.
///
/// This newtype ensures the base URL carries an `http` or `https` scheme and
/// normalizes away any trailing slash, so joining resource paths never
/// produces a double slash.
///
/// # Accepted Formats
///
/// - `https://records.example.edu/api`
/// - `http://localhost:8000/api/` - trailing slash is stripped
///
/// # Serialization
///
/// `BaseUrl` serializes to and deserializes from the normalized URL string:
///
/// ```rust
/// use memoria_client::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8000/api/").unwrap();
/// let json = serde_json::to_string(&url).unwrap();
/// assert_eq!(json, r#""http://localhost:8000/api""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is empty, has no
    /// `http`/`https` scheme, or has no host part after the scheme.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        if url.is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Ok(Self(url)),
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }

    /// Joins a resource path onto this base URL.
    ///
    /// Leading slashes on `path` are ignored; the base never ends with one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use memoria_client::BaseUrl;
    ///
    /// let url = BaseUrl::new("http://localhost:8000/api").unwrap();
    /// assert_eq!(url.join("grupos/"), "http://localhost:8000/api/grupos/");
    /// assert_eq!(url.join("/grupos/"), "http://localhost:8000/api/grupos/");
    /// ```
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
