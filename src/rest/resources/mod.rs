//! Typed resources for the Memoria backend collections.
//!
//! Each type maps one backend collection: Spanish wire names on the wire,
//! idiomatic field names in Rust. All of them implement
//! [`RestResource`](crate::rest::RestResource), so the generic operations
//! in [`crate::rest`] work uniformly across them.

mod activity;
mod author;
mod patent;
mod person;
mod presented_work;
mod published_work;
mod registration;
mod research_group;
mod research_project;

pub use activity::{Activity, ResearchLine};
pub use author::Author;
pub use patent::Patent;
pub use person::{directory, Person, DIRECTORY_PATH};
pub use presented_work::PresentedWork;
pub use published_work::{published, PublishedWork, PublishedWorkKind, STATE_PUBLISHED};
pub use registration::{Registration, RegistrationKind};
pub use research_group::ResearchGroup;
pub use research_project::ResearchProject;
