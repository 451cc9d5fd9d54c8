//! Command implementations.

pub mod bulk_add;
pub mod export;

pub use bulk_add::{run_bulk_add, BulkAddSummary};
pub use export::{run_export, ExportSummary};

use kc_admin_client::{AccessToken, AdminClient, AdminError, EntityId};

/// Resolves the group a run operates on.
///
/// A missing group, or a lookup the server refuses, ends the run.
pub async fn resolve_target_group(
    client: &AdminClient<'_>,
    token: &AccessToken,
    groupname: &str,
) -> crate::CliResult<EntityId> {
    match client.resolve_group(token, groupname).await {
        Ok(id) => {
            tracing::debug!(groupname, group_id = %id, "Resolved group");
            Ok(id)
        }
        Err(AdminError::NotFound { .. } | AdminError::Api { .. }) => {
            tracing::error!("Group name {} not found", groupname);
            Err(crate::CliError::GroupNotFound {
                name: groupname.to_string(),
            })
        }
        Err(e) => Err(e.into()),
    }
}
