//! # kc-group-tools
//!
//! Bulk group membership tools for Keycloak realms.
//!
//! This crate provides two command-line tools:
//! - `kc-bulk-users`: add every user listed in a file to a group
//! - `kc-group-members`: export the members of a group to CSV

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;

pub use cli::{BulkUsersCli, GroupMembersCli};
pub use error::{CliError, CliResult};
