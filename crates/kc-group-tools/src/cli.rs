//! CLI argument parsing.

use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser};

/// Add a list of users to a Keycloak group.
#[derive(Debug, Parser)]
#[command(name = "kc-bulk-users")]
#[command(author, version, about, long_about = None)]
pub struct BulkUsersCli {
    /// Group name to add users to.
    #[arg(short, long)]
    pub groupname: String,

    /// File with a list of usernames, one per line.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Connection settings.
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Logging settings.
    #[command(flatten)]
    pub log: LogArgs,
}

/// Export the members of a Keycloak group to CSV.
#[derive(Debug, Parser)]
#[command(name = "kc-group-members")]
#[command(author, version, about, long_about = None)]
pub struct GroupMembersCli {
    /// Group name to export.
    #[arg(short, long)]
    pub groupname: String,

    /// Output file (defaults to `<groupname>.csv`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Connection settings.
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Logging settings.
    #[command(flatten)]
    pub log: LogArgs,
}

impl GroupMembersCli {
    /// Path of the CSV report.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.csv", self.groupname)))
    }
}

/// Keycloak connection settings, read from the environment by default.
#[derive(Clone, Args)]
pub struct ConnectionArgs {
    /// Service account client id.
    #[arg(long, env = "KEYCLOAK_CLIENT_ID")]
    pub client_id: String,

    /// Service account client secret.
    #[arg(long, env = "KEYCLOAK_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// Server base URL (e.g., https://sso.example.com).
    #[arg(long, env = "KEYCLOAK_BASE_URL")]
    pub base_url: String,

    /// Realm to administer.
    #[arg(long, env = "KEYCLOAK_REALM")]
    pub realm: String,
}

impl fmt::Debug for ConnectionArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionArgs")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("realm", &self.realm)
            .finish()
    }
}

/// Logging settings.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Directory for the dated log file.
    #[arg(long, default_value = ".")]
    pub log_dir: PathBuf,
}
