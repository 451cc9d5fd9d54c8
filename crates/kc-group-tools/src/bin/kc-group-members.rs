//! # kc-group-members
//!
//! Exports the members of a Keycloak group to a CSV file.

#![forbid(unsafe_code)]
#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use kc_group_tools::{
    cli::GroupMembersCli,
    commands::run_export,
    config::load_dotenv,
    logging::{self, GROUP_MEMBERS_LOG},
    output::{error, success},
};

#[tokio::main]
async fn main() {
    load_dotenv();
    let cli = GroupMembersCli::parse();

    if let Err(e) = logging::init(&cli.log.log_dir, GROUP_MEMBERS_LOG) {
        error(&e.to_string());
        std::process::exit(1);
    }

    let ctx = match cli.connection.credentials() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{}", e);
            error(&e.to_string());
            std::process::exit(1);
        }
    };

    let output = cli.output_path();
    match run_export(&ctx, &cli.groupname, &output).await {
        Ok(summary) => success(&format!(
            "Wrote {} member(s) of '{}' to {}",
            summary.members,
            cli.groupname,
            summary.path.display()
        )),
        Err(e) => {
            tracing::error!("{}", e);
            error(&e.to_string());
            std::process::exit(1);
        }
    }
}
