//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the UI, so log output goes to a file under the
//! user's local data directory instead of stderr. The filter comes from
//! [`BrowserConfig::log_filter`] (`NEWSDECK_LOG`), e.g. `debug` or
//! `newsdeck::app=trace`.
//!
//! Logging is optional: if the file cannot be opened the app runs without it.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::BrowserConfig;

pub const LOG_DIR_NAME: &str = "newsdeck";
pub const LOG_FILE_NAME: &str = "newsdeck.log";

/// Fallback directive when the configured one does not parse
const DEFAULT_FILTER: &str = "info";

/// `<data-local-dir>/newsdeck/newsdeck.log`, if the platform has such a dir.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Parse a filter directive, falling back to `info` if it is invalid.
pub fn build_env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("ignoring invalid log filter {:?}: {}", directive, e);
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// Install the global subscriber writing to the default log file.
///
/// Returns the log path when logging is active. Calling it again is a no-op.
pub fn init_logging(config: &BrowserConfig) -> Option<PathBuf> {
    let path = default_log_path()?;
    match init_logging_to(&path, &config.log_filter) {
        Ok(true) => Some(path),
        Ok(false) | Err(_) => None,
    }
}

/// Install the global subscriber writing to `path`.
///
/// Creates the parent directory if needed. Returns `Ok(false)` if a global
/// subscriber was already installed.
pub fn init_logging_to(path: &Path, filter: &str) -> io::Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let installed = tracing_subscriber::registry()
        .with(build_env_filter(filter))
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            log = %path.display(),
            "logging initialised"
        );
    }
    Ok(installed)
}
