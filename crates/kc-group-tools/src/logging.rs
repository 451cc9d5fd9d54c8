//! Logging setup.
//!
//! Every run logs to stderr and to a log file named after the tool and the
//! current date, e.g. `bulk-users-16-10-2026.log`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Timestamp format of log lines.
pub const LOG_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Log file prefix of the bulk-add tool.
pub const BULK_USERS_LOG: &str = "bulk-users";

/// Log file prefix of the export tool.
pub const GROUP_MEMBERS_LOG: &str = "get-users";

/// Returns the dated log file name for a tool.
pub fn log_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.log", prefix, date.format("%d-%m-%Y"))
}

/// Opens the dated log file for `date` in `log_dir`, creating it if needed.
fn open_log_file(
    log_dir: &Path,
    prefix: &str,
    date: NaiveDate,
) -> crate::CliResult<(RollingFileAppender, PathBuf)> {
    let file_name = log_file_name(prefix, date);
    let stem = file_name.trim_end_matches(".log");

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(stem)
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| {
            crate::CliError::Config(format!(
                "cannot open log file in '{}': {e}",
                log_dir.display()
            ))
        })?;

    Ok((appender, log_dir.join(file_name)))
}

/// Installs the global subscriber and returns the log file path.
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init(log_dir: &Path, prefix: &str) -> crate::CliResult<PathBuf> {
    let today = chrono::Local::now().date_naive();
    let (file_appender, log_path) = open_log_file(log_dir, prefix, today)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
                .with_target(false)
                .with_ansi(false)
                .with_writer(file_appender),
        )
        .try_init()
        .map_err(|e| crate::CliError::Config(format!("failed to initialise logging: {e}")))?;

    Ok(log_path)
}
