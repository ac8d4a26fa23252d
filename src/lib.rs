//! # Memoria API Rust Client
//!
//! A Rust client for the Memoria research-records API, providing type-safe
//! configuration, session-token authentication with transparent refresh, and
//! typed access to the backend's record collections.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`ApiConfig`] and [`ApiConfigBuilder`]
//! - A validated [`BaseUrl`] newtype for the backend location
//! - Login, logout, and session storage via [`auth`]
//! - An async HTTP client that injects the bearer token and transparently
//!   refreshes it once on 401 via [`clients::HttpClient`]
//! - Session-expired notification for callers that need to react to a
//!   terminated session
//! - Typed CRUD access to groups, projects, publications, patents, and the
//!   rest of the record collections via [`rest`]
//!
//! ## Quick Start
//!
//! ```rust
//! use memoria_client::{ApiConfig, BaseUrl};
//!
//! // Create configuration using the builder pattern
//! let config = ApiConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:8000/api").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Logging In
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use memoria_client::auth::{self, MemorySessionStore};
//!
//! let store = Arc::new(MemorySessionStore::new());
//! let response = auth::login(&config, store.as_ref(), "ana@frre.utn.edu.ar", "secreta").await?;
//! println!("Logged in: {:?}", response.mensaje);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use memoria_client::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config, store.clone());
//!
//! // React to session termination (e.g. send the user to the login page)
//! client.on_session_expired(|| println!("session expired, log in again"));
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "grupos/")
//!     .build()
//!     .unwrap();
//!
//! // A 401 here triggers one token refresh and one retry before failing.
//! let response = client.request(request).await?;
//! ```
//!
//! ## Typed Resources
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use memoria_client::rest::{self, RestClient};
//! use memoria_client::rest::resources::{Patent, ResearchGroup};
//!
//! let rest_client = RestClient::new(Arc::new(client));
//!
//! let groups = rest::all::<ResearchGroup>(&rest_client).await?;
//! let patents = rest::list::<Patent>(&rest_client, 1, 10).await?;
//! println!("{} patents total", patents.count);
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and session storage are
//!   instance-based and passed explicitly
//! - **Injectable storage**: Session persistence lives behind the
//!   [`SessionStore`] trait; the in-memory implementation is provided
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **At most one refresh per request**: A 401 never triggers more than one
//!   token refresh and one retry

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthError, MemorySessionStore, Session, SessionStore};
pub use config::{ApiConfig, ApiConfigBuilder, BaseUrl};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, Page, SDK_VERSION,
};

// Re-export the REST layer entry points
pub use rest::{RestClient, RestError, RestResource};
