//! # kc-bulk-users
//!
//! Adds a list of users to a Keycloak group.

#![forbid(unsafe_code)]
#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use kc_group_tools::{
    cli::BulkUsersCli,
    commands::run_bulk_add,
    config::load_dotenv,
    logging::{self, BULK_USERS_LOG},
    output::{error, success, warning},
};

#[tokio::main]
async fn main() {
    load_dotenv();
    let cli = BulkUsersCli::parse();

    if let Err(e) = logging::init(&cli.log.log_dir, BULK_USERS_LOG) {
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

    match run_bulk_add(&ctx, &cli.groupname, &cli.file).await {
        Ok(summary) => {
            for failed in &summary.failed {
                warning(&format!("{}: {}", failed.username, failed.reason));
            }
            success(&format!(
                "Added {} of {} user(s) to group '{}'",
                summary.added.len(),
                summary.processed(),
                cli.groupname
            ));
        }
        Err(e) => {
            tracing::error!("{}", e);
            error(&e.to_string());
            std::process::exit(1);
        }
    }
}
