//! Tracing setup for the selectmenu binary
//!
//! The menu owns the terminal while it runs, so logs go to a file rather
//! than the screen.
//!
//! Usage:
//!   selectmenu --debug ...                    # Debug logging
//!   RUST_LOG=selectmenu_tui=trace selectmenu  # Fine-grained log control
//!
//! Environment variables:
//!   RUST_LOG                                  # Log filter (default: info)

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
    /// Filter used when RUST_LOG is unset and debug is off
    pub level: Option<String>,
    /// Log file, appended to
    pub log_file: PathBuf,
}

/// Default log file: ~/.selectmenu/selectmenu.log
pub fn default_log_path() -> PathBuf {
    log_dir().join("selectmenu.log")
}

fn log_dir() -> PathBuf {
    selectmenu_core::MenuConfig::config_path()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Filter from RUST_LOG, `--debug`, then the configured level
///
/// Also returns a warning when the configured level had to be replaced.
fn build_filter(config: &TracingConfig) -> (EnvFilter, Option<String>) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, None);
    }
    if config.debug {
        return (EnvFilter::new("debug"), None);
    }
    level_filter(config.level.as_deref())
}

/// Parse a configured level, falling back to `info` when it is invalid
///
/// Bare directives must be level names. `EnvFilter` would otherwise read a
/// typo such as `debgu` as a target and quietly drop everything else.
fn level_filter(level: Option<&str>) -> (EnvFilter, Option<String>) {
    let Some(level) = level else {
        return (EnvFilter::new("info"), None);
    };

    let unknown = level
        .split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty() && !directive.contains('='))
        .find(|directive| directive.parse::<LevelFilter>().is_err());

    let parsed = match unknown {
        Some(directive) => Err(format!("unknown level '{}'", directive)),
        None => EnvFilter::try_new(level).map_err(|err| err.to_string()),
    };

    match parsed {
        Ok(filter) => (filter, None),
        Err(reason) => (
            EnvFilter::new("info"),
            Some(format!(
                "Invalid log level {:?} in config ({}), using info",
                level, reason
            )),
        ),
    }
}

/// Initialize tracing, writing compact lines to the configured log file
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    if let Some(dir) = config.log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .context(format!("Failed to create log directory: {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .context(format!("Failed to open log file: {}", config.log_file.display()))?;

    let (filter, filter_warning) = build_filter(config);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug) // Show targets in debug mode
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))?;

    if let Some(message) = filter_warning {
        warn!("{}", message);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path() {
        let path = default_log_path();
        assert!(path.ends_with(".selectmenu/selectmenu.log"));
    }

    #[test]
    fn test_level_filter_accepts_levels_and_directives() {
        let (filter, warning) = level_filter(Some("debug"));
        assert_eq!(filter.to_string(), "debug");
        assert!(warning.is_none());

        let (_, warning) = level_filter(Some("warn,selectmenu_tui=trace"));
        assert!(warning.is_none());

        let (filter, warning) = level_filter(None);
        assert_eq!(filter.to_string(), "info");
        assert!(warning.is_none());
    }

    #[test]
    fn test_level_filter_falls_back_on_typo() {
        let (filter, warning) = level_filter(Some("debgu"));
        assert_eq!(filter.to_string(), "info");
        assert!(warning.is_some_and(|w| w.contains("debgu")));

        let (filter, warning) = level_filter(Some("selectmenu_tui=loud"));
        assert_eq!(filter.to_string(), "info");
        assert!(warning.is_some());
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_file = dir.path().join("logs").join("selectmenu.log");

        init_tracing(&TracingConfig {
            debug: true,
            level: None,
            log_file: log_file.clone(),
        })
        .unwrap();

        tracing::info!("written to file");
        assert!(log_file.exists());
    }
}
