//! Typed REST access to the Memoria backend.
//!
//! The layer is split in three:
//!
//! - [`RestClient`]: verbs plus non-2xx to error conversion, over the
//!   authenticated HTTP client
//! - [`RestResource`] and the generic operations ([`all`], [`list`],
//!   [`create`], [`update`], [`delete`]): CRUD implemented once for every
//!   collection
//! - [`resources`]: the typed structs for each backend collection

mod client;
mod errors;
mod resource;
pub mod resources;

pub use client::RestClient;
pub use errors::RestError;
pub use resource::{all, create, delete, list, list_filtered, update, RestResource};
