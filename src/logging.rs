use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

use crate::utils::paths::{ensure_app_dir_exists, get_log_path};

/// Send tracing output to the app's log file.
///
/// The terminal UI owns stdout, so nothing is written there. `RUST_LOG`
/// overrides the default `info` filter.
pub fn init() -> Result<()> {
    ensure_app_dir_exists()?;
    let log_path = get_log_path()?;
    init_with_file(&log_path)
}

/// Like `init`, but a log file that can't be opened only costs the log.
/// Returns whether file logging is active.
pub fn init_or_warn() -> bool {
    match init() {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: file logging disabled: {e:#}");
            false
        }
    }
}

pub fn init_with_file(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {e}"))?;

    Ok(())
}
