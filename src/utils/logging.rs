//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to `fcu_overlay.log` in the
//! data directory. Previous sessions are rotated on startup, keeping nine.

use crate::error::{FcuOverlayError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "fcu_overlay.log";

/// Maximum number of historical log files to keep (`.1` through `.9`)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system writing into `log_dir`
///
/// Log level defaults to INFO but can be configured via `RUST_LOG`. Fails if
/// a global subscriber is already installed.
pub fn init_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_path = log_dir.join(LOG_FILE_NAME);
    rotate_logs_on_startup(&log_path)?;

    // Rotation is handled above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("fcu_overlay")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| FcuOverlayError::LoggingError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| FcuOverlayError::LoggingError(Box::new(e)))?;

    tracing::info!("FCU overlay v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Shift `name.log.N` to `name.log.N+1`, dropping the oldest, then move the
/// current log to `.1`
///
/// Runs on every startup regardless of file size, so each session's log is
/// kept separately. A missing current log is not an error.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| FcuOverlayError::LoggingError(StringError::new("Invalid log path")))?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| FcuOverlayError::LoggingError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        if current_log.exists() {
            std::fs::rename(&current_log, log_dir.join(format!("{log_name}.{}", i + 1)))?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;

    tracing::info!("Log rotation completed on startup");

    Ok(())
}
