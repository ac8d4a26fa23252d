//! Authentication: session state, login/logout, and token refresh.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Session`]: the three-field session record (access token, refresh
//!   token, user profile)
//! - [`SessionStore`]: pluggable storage for the process-wide session
//! - [`MemorySessionStore`]: the default in-process store
//! - [`login`] / [`logout`] / [`is_authenticated`]: the auth operations
//! - [`profile`] / [`update_profile`] / [`change_password`] /
//!   [`profile_options`]: the signed-in user's profile operations
//! - [`refresh_access_token`]: manual access-token refresh
//! - [`AuthError`]: error type for auth operations

mod errors;
mod login;
mod profile;
mod session;
mod token_refresh;

pub use errors::AuthError;
pub use login::{is_authenticated, login, logout, LoginResponse, TokenPair, LOGIN_PATH};
pub use profile::{
    change_password, profile, profile_options, update_profile, ProfileUpdateResponse,
    PROFILE_OPTIONS_PATH, PROFILE_PATH,
};
pub use session::{MemorySessionStore, Session, SessionStore};
pub use token_refresh::{refresh_access_token, REFRESH_PATH};
