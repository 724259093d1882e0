//! Log subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the level follows `-q`/`-v`.
//! Headless commands log to stderr. The TUI owns the terminal, so it only
//! logs when a file is given.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{CliError, CliResult};

/// Where log events go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Human-readable lines on stderr
    Stderr,
    /// JSON lines appended to a file
    File(&'a Path),
    /// Discard everything
    Off,
}

impl<'a> LogTarget<'a> {
    /// Picks a target for a command
    #[must_use]
    pub const fn select(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Off,
            (None, false) => Self::Stderr,
        }
    }
}

/// Filter from `RUST_LOG`, falling back to the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber
pub fn init(verbosity: Verbosity, target: LogTarget<'_>) -> CliResult<()> {
    let filter = env_filter(verbosity);
    let installed = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };
    installed.map_err(|e| CliError::config(format!("logging already initialized: {e}")))
}
