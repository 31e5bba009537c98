//! Logging configuration using tracing
//!
//! The terminal belongs to the TUI, so all output goes to a rolling file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "SKYADMIN_LOG";

const LOG_FILE_NAME: &str = "skyadmin.log";
const DEFAULT_FILTER: &str = "skyadmin=info,skygarden_admin=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_local_dir>/skygarden-admin/logs/`.
/// Log level is controlled by the `SKYADMIN_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SKYADMIN_LOG=debug skyadmin
/// SKYADMIN_LOG=skyadmin_api=trace skyadmin
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Skygarden Admin starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Directory the rolling log files are written to
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("skygarden-admin").join("logs")
}
