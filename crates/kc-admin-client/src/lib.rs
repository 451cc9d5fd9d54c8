//! # kc-admin-client
//!
//! Minimal client for the realm-scoped Keycloak admin REST API.
//!
//! This crate provides:
//! - Client-credentials token acquisition
//! - User and group lookup by name
//! - Paginated group member listing
//! - Adding a user to a group
//!
//! Every call is sequential and takes the run's [`AccessToken`] by reference.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod credentials;
pub mod error;
pub mod members;
pub mod membership;
pub mod resolver;
pub mod token;

pub use client::{AdminClient, USER_AGENT};
pub use credentials::CredentialContext;
pub use error::{AdminError, AdminResult, EntityKind};
pub use members::{MemberRecord, PageOptions, PageTermination, DEFAULT_PAGE_SIZE};
pub use resolver::EntityId;
pub use token::AccessToken;
