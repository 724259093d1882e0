//! CLI configuration
//!
//! Flags build a [`CliConfig`]; an optional YAML [`FileConfig`] fills in what
//! flags leave unset.

use std::fs;
use std::path::{Path, PathBuf};

use lcdcalc::core::pattern::DEFAULT_PATTERN_URLS;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Default animation tick in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Directory name under the platform data and config dirs
const APP_DIR: &str = "lcdcalc";

/// Config file name under the platform config dir
const CONFIG_FILE: &str = "config.yaml";

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - library debug events
    Debug,
    /// Trace - every display transition
    Trace,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug | Self::Trace)
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => console::Term::stdout().features().colors_supported(),
        }
    }
}

/// Settings read from the YAML config file
///
/// Every field is optional; absent fields keep the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Where history and pattern state are stored
    pub data_dir: Option<PathBuf>,
    /// Background pattern urls, in cycling order
    pub patterns: Option<Vec<String>>,
    /// Open the history drawer on start
    pub drawer_open: Option<bool>,
    /// Animation tick in milliseconds
    pub tick_ms: Option<u64>,
}

impl FileConfig {
    /// Parses YAML text
    pub fn from_yaml(yaml: &str, path: &Path) -> CliResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(yaml).map_err(|e| CliError::config_file(path, e))
    }

    /// Reads and parses a config file
    pub fn load(path: &Path) -> CliResult<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&yaml, path)
    }

    /// Reads the platform default config file if there is one
    pub fn load_default() -> CliResult<Self> {
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<data dir>/lcdcalc`, or `.lcdcalc` when the platform has none
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".lcdcalc"), |dir| dir.join(APP_DIR))
}

/// `<config dir>/lcdcalc/config.yaml`
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Where history and pattern state are stored
    pub data_dir: PathBuf,
    /// Background pattern urls, in cycling order
    pub patterns: Vec<String>,
    /// Open the history drawer on start
    pub drawer_open: bool,
    /// Animation tick in milliseconds
    pub tick_ms: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            data_dir: default_data_dir(),
            patterns: DEFAULT_PATTERN_URLS.iter().map(ToString::to_string).collect(),
            drawer_open: false,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set data directory
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Applies the fields the config file sets
    #[must_use]
    pub fn with_file(mut self, file: FileConfig) -> Self {
        if let Some(dir) = file.data_dir {
            self.data_dir = dir;
        }
        if let Some(patterns) = file.patterns {
            self.patterns = patterns;
        }
        if let Some(open) = file.drawer_open {
            self.drawer_open = open;
        }
        if let Some(tick) = file.tick_ms {
            self.tick_ms = tick;
        }
        self
    }

    /// Checks values no type can rule out
    pub fn validate(&self) -> CliResult<()> {
        if self.tick_ms == 0 {
            return Err(CliError::config("tick_ms must be greater than zero"));
        }
        if self.patterns.iter().any(|url| url.trim().is_empty()) {
            return Err(CliError::config("pattern urls must not be empty"));
        }
        Ok(())
    }

    /// Effective configuration rendered as YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
