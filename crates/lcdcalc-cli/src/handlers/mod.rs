//! Command handlers
//!
//! Each handler takes the effective [`CliConfig`] and writes its output to a
//! caller-supplied writer so it can be tested without a process.

pub mod config;
pub mod history;
pub mod pattern;
pub mod press;
pub mod tui;

pub use config::execute_config;
pub use history::execute_history;
pub use pattern::execute_pattern;
pub use press::execute_press;
pub use tui::execute_tui;

use lcdcalc::core::PatternCycler;
use lcdcalc::storage::FileStorage;

use crate::config::CliConfig;

/// Storage under the configured data directory
#[must_use]
pub fn open_storage(config: &CliConfig) -> FileStorage {
    FileStorage::new(&config.data_dir)
}

/// Cycler over the configured pattern urls
#[must_use]
pub fn pattern_cycler(config: &CliConfig) -> PatternCycler {
    PatternCycler::from_urls(config.patterns.iter().cloned())
}
