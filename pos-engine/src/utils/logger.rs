//! Logging Infrastructure
//!
//! Structured logging via `tracing`. Console output by default; a daily
//! rolling file under `log_dir` when one is configured.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "pos-engine");
            if subscriber.with_writer(file_appender).try_init().is_err() {
                tracing::debug!("Logger already initialized");
            }
            return;
        }
    }

    if subscriber.try_init().is_err() {
        tracing::debug!("Logger already initialized");
    }
}
