//! Tracing setup.
//!
//! The TUI owns stdout/stderr, so logs only ever go to a file under
//! `${PULSE_HOME}/logs`. If the file cannot be created, logging is disabled
//! rather than corrupting the screen.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE_PREFIX: &str = "pulse";
pub const LOG_FILE_SUFFIX: &str = "log";

/// Installs the global subscriber writing to `log_dir/pulse.log`.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Keep the returned
/// guard alive for the lifetime of the program so buffered lines are flushed.
/// Returns `None` when the log file could not be opened.
pub fn init(log_dir: &Path) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(log_dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let installed = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(env_filter)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(dir = %log_dir.display(), "Logging initialized");
    }
    Some(guard)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let guard = init(&log_dir);
        assert!(guard.is_some());
        drop(guard);

        assert!(log_dir.join("pulse.log").exists());
    }
}
