//! Run configuration.
//!
//! Connection settings come from the environment (optionally seeded from a
//! `.env` file) or from command line flags, and are turned into a
//! [`CredentialContext`] once at startup.

use kc_admin_client::{AdminError, CredentialContext};

use crate::cli::ConnectionArgs;

/// Loads a `.env` file from the working directory, if there is one.
///
/// Variables already set in the environment take precedence.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

impl ConnectionArgs {
    /// Validates the settings into a credential context.
    pub fn credentials(&self) -> crate::CliResult<CredentialContext> {
        CredentialContext::new(
            self.client_id.as_str(),
            self.client_secret.as_str(),
            &self.base_url,
            self.realm.as_str(),
        )
        .map_err(|e| match e {
            AdminError::InvalidConfig(msg) => crate::CliError::Config(msg),
            other => crate::CliError::Admin(other),
        })
    }
}
