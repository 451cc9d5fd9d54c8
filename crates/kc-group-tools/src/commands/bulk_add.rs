//! Bulk-add command implementation.

use std::path::Path;

use kc_admin_client::{AccessToken, AdminClient, CredentialContext, EntityId};

use super::resolve_target_group;

/// A username that could not be added to the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedUser {
    /// Username as read from the input file.
    pub username: String,
    /// Why the user was not added.
    pub reason: String,
}

/// Outcome of a bulk-add run.
#[derive(Debug, Default)]
pub struct BulkAddSummary {
    /// Usernames added to the group, in input order.
    pub added: Vec<String>,
    /// Usernames that failed, in input order.
    pub failed: Vec<FailedUser>,
    /// Number of blank lines skipped.
    pub skipped_blank: usize,
}

impl BulkAddSummary {
    /// Number of usernames processed.
    pub fn processed(&self) -> usize {
        self.added.len() + self.failed.len()
    }
}

/// Splits the input file into usernames.
///
/// Lines are trimmed; blank lines are dropped and counted.
pub fn parse_usernames(content: &str) -> (Vec<&str>, usize) {
    let mut blank = 0;
    let usernames = content
        .lines()
        .map(str::trim)
        .filter(|line| {
            let keep = !line.is_empty();
            if !keep {
                blank += 1;
            }
            keep
        })
        .collect();
    (usernames, blank)
}

/// Runs the bulk-add command.
///
/// Authenticates, resolves the target group and adds every username of
/// `file` to it. Only fatal errors are returned; per-user failures end up in
/// the summary.
pub async fn run_bulk_add(
    ctx: &CredentialContext,
    groupname: &str,
    file: &Path,
) -> crate::CliResult<BulkAddSummary> {
    let client = AdminClient::new(ctx)?;
    let token = client.acquire_token().await?;
    let group_id = resolve_target_group(&client, &token, groupname).await?;

    let content = std::fs::read_to_string(file)?;
    let (usernames, skipped_blank) = parse_usernames(&content);
    tracing::info!(
        groupname,
        file = %file.display(),
        users = usernames.len(),
        "Adding users to group"
    );

    let mut summary = add_users_to_group(&client, &token, &group_id, &usernames).await?;
    summary.skipped_blank = skipped_blank;

    tracing::info!(
        groupname,
        added = summary.added.len(),
        failed = summary.failed.len(),
        skipped = summary.skipped_blank,
        "Bulk add finished"
    );
    Ok(summary)
}

/// Adds each user to the group, one at a time.
///
/// A user that cannot be resolved or added is logged and recorded, and the
/// loop moves on. Transport failures abort the run.
pub async fn add_users_to_group(
    client: &AdminClient<'_>,
    token: &AccessToken,
    group_id: &EntityId,
    usernames: &[&str],
) -> crate::CliResult<BulkAddSummary> {
    let mut summary = BulkAddSummary::default();

    for &username in usernames {
        let outcome = match client.resolve_user(token, username).await {
            Ok(user_id) => client.add_user_to_group(token, &user_id, group_id).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => summary.added.push(username.to_string()),
            Err(e) if e.is_fatal_for_member() => return Err(e.into()),
            Err(e) => {
                if let kc_admin_client::AdminError::Mutation {
                    user_id,
                    group_id,
                    body,
                    ..
                } = &e
                {
                    tracing::error!(
                        username,
                        "Problem when put user with user_id {} in group_id {} - Server response: {}",
                        user_id,
                        group_id,
                        body
                    );
                }
                summary.failed.push(FailedUser {
                    username: username.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(summary)
}
