//! File logging.
//!
//! The terminal belongs to the renderer while a session runs, so all logs go
//! to `<temp dir>/lil-guy.log`. Fatal errors are additionally printed to
//! stderr by the binary once the terminal has been restored.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// File name of the log, inside [`std::env::temp_dir`].
pub const LOG_FILE_NAME: &str = "lil-guy.log";

/// Full path of the log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("lilguy={level},lil_guy={level}")
}

/// Install the global subscriber writing to [`log_path`].
///
/// Keep the returned guard alive until exit; dropping it flushes the log.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(debug: bool) -> anyhow::Result<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("lil-guy")
        .filename_suffix("log")
        .build(std::env::temp_dir())?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    tracing::info!(path = %log_path().display(), "logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "lilguy=info,lil_guy=info");
        assert_eq!(default_filter(true), "lilguy=debug,lil_guy=debug");
        assert!(EnvFilter::try_new(default_filter(true)).is_ok());
    }

    #[test]
    fn test_log_path_in_temp_dir() {
        let path = log_path();
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
        assert!(path.starts_with(std::env::temp_dir()));
    }
}
