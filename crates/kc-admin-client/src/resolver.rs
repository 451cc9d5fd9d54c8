//! Name to identifier resolution.

use std::fmt;

use serde::Deserialize;

use crate::client::AdminClient;
use crate::error::{AdminError, AdminResult, EntityKind};
use crate::token::AccessToken;

/// Provider-side identifier of a user or group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    /// Wraps a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Deserialize)]
struct UserSummary {
    id: String,
    #[serde(default)]
    username: String,
}

#[derive(Debug, Deserialize)]
struct GroupSummary {
    id: String,
    #[serde(default)]
    name: String,
}

impl AdminClient<'_> {
    /// Resolves a username to its user id.
    pub async fn resolve_user(&self, token: &AccessToken, username: &str) -> AdminResult<EntityId> {
        let query = [("username", username), ("exact", "true")];
        let users: Vec<UserSummary> = self
            .get_json(token, "/users", &query)
            .await
            .inspect_err(|e| log_lookup_failure(EntityKind::User, username, e))?;

        let candidates = users.into_iter().map(|u| (u.id, u.username));
        pick_match(EntityKind::User, username, candidates)
    }

    /// Resolves a group name to its group id.
    ///
    /// The provider only offers a substring search on group names. An exact
    /// name match wins; otherwise the first group in server order is used.
    pub async fn resolve_group(&self, token: &AccessToken, name: &str) -> AdminResult<EntityId> {
        let query = [("search", name)];
        let groups: Vec<GroupSummary> = self
            .get_json(token, "/groups", &query)
            .await
            .inspect_err(|e| log_lookup_failure(EntityKind::Group, name, e))?;

        let candidates = groups.into_iter().map(|g| (g.id, g.name));
        pick_match(EntityKind::Group, name, candidates)
    }
}

/// Chooses the identifier for `name` among `(id, name)` candidates.
fn pick_match(
    kind: EntityKind,
    name: &str,
    candidates: impl IntoIterator<Item = (String, String)>,
) -> AdminResult<EntityId> {
    let candidates: Vec<(String, String)> = candidates.into_iter().collect();

    if let Some((id, _)) = candidates.iter().find(|(_, n)| n == name) {
        return Ok(EntityId(id.clone()));
    }

    let mut iter = candidates.into_iter();
    match iter.next() {
        Some((id, found)) => {
            let remaining = iter.len();
            if remaining > 0 {
                tracing::warn!(
                    %kind,
                    requested = name,
                    chosen = %found,
                    ignored = remaining,
                    "Ambiguous lookup, using first result"
                );
            }
            Ok(EntityId(id))
        }
        None => {
            tracing::error!(%kind, name, "Problem resolving {} id - no match", kind);
            Err(AdminError::NotFound {
                kind,
                name: name.to_string(),
            })
        }
    }
}

fn log_lookup_failure(kind: EntityKind, name: &str, err: &AdminError) {
    match err.response_body() {
        Some(body) => tracing::error!(
            %kind,
            name,
            "Problem resolving {} id - Server response: {}",
            kind,
            body
        ),
        None => tracing::error!(%kind, name, error = %err, "Problem resolving {} id", kind),
    }
}
