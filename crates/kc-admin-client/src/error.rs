//! Admin client error types.

use std::fmt;

use thiserror::Error;

/// Kind of provider-side entity looked up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A realm user.
    User,
    /// A realm group.
    Group,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Group => f.write_str("group"),
        }
    }
}

/// Admin client error type.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Network, DNS, timeout or body decoding failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint refused the client credentials.
    #[error("authentication failed ({status}): {body}")]
    Authentication {
        /// HTTP status code returned by the token endpoint.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A name lookup returned no match.
    #[error("{kind} not found: {name}")]
    NotFound {
        /// Type of entity searched for.
        kind: EntityKind,
        /// Name that was searched for.
        name: String,
    },

    /// A read endpoint answered with an unexpected status.
    #[error("API error: {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Adding a user to a group did not return `204 No Content`.
    #[error("could not add user {user_id} to group {group_id} ({status}): {body}")]
    Mutation {
        /// User identifier.
        user_id: String,
        /// Group identifier.
        group_id: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A server kept returning full pages until the offset ran out of range.
    #[error("member listing exceeded the maximum offset after {offset}")]
    PageOffsetOverflow {
        /// Offset of the last page fetched.
        offset: u32,
    },

    /// Credential context could not be built.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AdminError {
    /// Returns `true` when the error must abort a bulk run instead of
    /// being recorded against the current user.
    ///
    /// Lookup misses and refused mutations concern a single user. Anything
    /// that means no further call can succeed is fatal.
    pub fn is_fatal_for_member(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Authentication { .. } | Self::InvalidConfig(_)
        )
    }

    /// Returns the raw server response body, if the error carries one.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Authentication { body, .. }
            | Self::Api { body, .. }
            | Self::Mutation { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Admin client result type.
pub type AdminResult<T> = Result<T, AdminError>;
