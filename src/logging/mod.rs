//! File logging for the booking session.
//!
//! The terminal belongs to the UI, so nothing is ever logged to stdout. The
//! first record of every session names the theme, the dealer and where the
//! configuration came from, which is what a support request usually needs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{expand_home, LoggingConfig};
use crate::ui::Theme;

/// Session facts written once the log file is open
#[derive(Debug, Clone, Copy)]
pub struct SessionInfo<'a> {
    pub theme: Theme,
    pub brand: &'a str,
    /// `None` when no config file was found or it could not be loaded
    pub config_source: Option<&'a Path>,
}

/// Open the log file and record the session start
pub fn init_logging(config: &LoggingConfig, session: &SessionInfo) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = parse_log_level(&config.level)?;
    let log_path = expand_home(Path::new(&config.file))?;
    let (log_dir, log_filename) = split_log_path(&log_path)?;

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_filename)
        .build(&log_dir)
        .context("Failed to open booking log file")?;

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_target(false);

    // RUST_LOG wins over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::info!(
        theme = ?session.theme,
        brand = session.brand,
        config = %describe_source(session.config_source),
        log_file = %log_path.display(),
        %level,
        "Booking session started"
    );

    Ok(())
}

/// Directory to create and file name to write for a log path
fn split_log_path(path: &Path) -> Result<(PathBuf, String)> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    Ok((dir, name.to_string()))
}

fn describe_source(source: Option<&Path>) -> String {
    match source {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    }
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {}", level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SessionInfo<'static> {
        SessionInfo {
            theme: Theme::Light,
            brand: "PEUGEOT",
            config_source: None,
        }
    }

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("trace"), Ok(Level::TRACE)));
        assert!(matches!(parse_log_level("DEBUG"), Ok(Level::DEBUG)));
        assert!(matches!(parse_log_level("warning"), Ok(Level::WARN)));
        assert!(matches!(parse_log_level("error"), Ok(Level::ERROR)));
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("/tmp/booking/session.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/booking"));
        assert_eq!(name, "session.log");

        let (dir, name) = split_log_path(Path::new("session.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "session.log");

        assert!(split_log_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_describe_source() {
        assert_eq!(describe_source(None), "built-in defaults");
        assert_eq!(
            describe_source(Some(Path::new("./service-booking.yml"))),
            "./service-booking.yml"
        );
    }

    #[test]
    fn test_disabled_logging_is_noop() {
        let config = LoggingConfig {
            enabled: false,
            file: String::new(),
            level: "bogus".to_string(),
        };
        assert!(init_logging(&config, &session()).is_ok());
    }

    #[test]
    fn test_bad_level_rejected_before_touching_disk() {
        let config = LoggingConfig {
            enabled: true,
            file: "/nonexistent/dir/session.log".to_string(),
            level: "loud".to_string(),
        };
        let err = init_logging(&config, &session()).unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }
}
