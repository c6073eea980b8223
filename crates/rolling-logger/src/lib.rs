//! Rolling Logger
//!
//! `tracing` setup for Tauri applications: events go to stderr and to a
//! time-rotated file in the app log directory, written off-thread through
//! `tracing_appender::non_blocking`. Only the newest `max_files` files are
//! kept. On Android events are also forwarded to logcat.

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

pub use tracing_appender::rolling::Rotation;

const LOG_FILE_SUFFIX: &str = "log";

/// Rotation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Number of log files kept, including the active one
    pub max_files: usize,
    /// How often a new file is started
    pub rotation: Rotation,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_files: 5,
            rotation: Rotation::DAILY,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to prepare log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to create log file appender: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    #[error("invalid logger configuration: {0}")]
    InvalidConfig(String),

    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

/// Keeps the background writer alive; pending lines are flushed on drop.
#[must_use = "dropping the logger stops file logging"]
pub struct Logger {
    _guard: WorkerGuard,
}

/// Local wall-clock timestamps for log lines
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber, writing `<app_name>.<date>.log` files
/// into `log_dir`.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logger(
    log_dir: &Path,
    app_name: &str,
    config: LoggerConfig,
) -> Result<Logger, LoggerError> {
    if app_name.trim().is_empty() {
        return Err(LoggerError::InvalidConfig("app name cannot be empty".to_string()));
    }
    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfig("max_files must be greater than zero".to_string()));
    }

    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(config.rotation)
        .filename_prefix(app_name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(config.max_files)
        .build(log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_timer(LocalTimer),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(LocalTimer)
                .compact(),
        );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag(app_name),
    );

    tracing::info!(app = app_name, dir = %log_dir.display(), "logger initialized");
    Ok(Logger { _guard: guard })
}

/// Log an informational message
pub fn info(msg: &str) {
    tracing::info!(target: "app", "{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn log_files(dir: &Path, app_name: &str) -> Vec<std::path::PathBuf> {
        let prefix = format!("{}.", app_name);
        std::fs::read_dir(dir)
            .unwrap()
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| name.starts_with(&prefix) && name.ends_with(".log"))
                    .unwrap_or(false)
            })
            .collect()
    }

    // Installs the process-wide subscriber, so it is the only test that
    // gets past validation in `init_logger`.
    #[test]
    fn test_init_writes_to_file_once() {
        let dir = TempDir::new().unwrap();
        let logs = dir.path().join("logs");
        std::fs::create_dir_all(&logs).unwrap();
        let foreign = logs.join("Trolley_Beta.2024-01-01.log");
        std::fs::write(&foreign, b"not ours").unwrap();

        let logger = init_logger(&logs, "Trolley", LoggerConfig::default()).unwrap();
        info("hello from test");
        drop(logger);

        let files = log_files(&logs, "Trolley");
        assert_eq!(files.len(), 1);
        let contents = std::fs::read_to_string(&files[0]).unwrap();
        assert!(contents.contains("logger initialized"));
        assert!(contents.contains("hello from test"));
        assert_eq!(std::fs::read(&foreign).unwrap(), b"not ours");

        let second = init_logger(&logs, "Trolley", LoggerConfig::default());
        assert!(matches!(second, Err(LoggerError::AlreadyInitialized)));
    }

    #[test]
    fn test_rejects_zero_max_files() {
        let dir = TempDir::new().unwrap();
        let config = LoggerConfig {
            max_files: 0,
            ..LoggerConfig::default()
        };

        let result = init_logger(dir.path(), "Trolley", config);
        assert!(matches!(result, Err(LoggerError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_blank_app_name() {
        let dir = TempDir::new().unwrap();

        let result = init_logger(dir.path(), "  ", LoggerConfig::default());
        assert!(matches!(result, Err(LoggerError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.max_files, 5);
        assert_eq!(config.rotation, Rotation::DAILY);
    }
}
