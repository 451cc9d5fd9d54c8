//! Export command implementation.

use std::path::{Path, PathBuf};

use kc_admin_client::{AdminClient, CredentialContext};

use super::resolve_target_group;
use crate::report::write_member_report_file;

/// Outcome of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Report location.
    pub path: PathBuf,
    /// Number of member rows written.
    pub members: usize,
}

/// Runs the export command.
///
/// Authenticates, resolves the group, lists all of its members and writes
/// them to `output` as CSV.
pub async fn run_export(
    ctx: &CredentialContext,
    groupname: &str,
    output: &Path,
) -> crate::CliResult<ExportSummary> {
    let client = AdminClient::new(ctx)?;
    let token = client.acquire_token().await?;
    let group_id = resolve_target_group(&client, &token, groupname).await?;

    let members = client.list_group_members(&token, &group_id).await?;
    let rows = write_member_report_file(output, &members)?;

    tracing::info!(
        groupname,
        members = rows,
        path = %output.display(),
        "Exported group members"
    );

    Ok(ExportSummary {
        path: output.to_path_buf(),
        members: rows,
    })
}
