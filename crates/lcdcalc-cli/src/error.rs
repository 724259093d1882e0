//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Config file could not be parsed
    #[error("Invalid config file {path}: {source}")]
    ConfigFile {
        /// File that failed to parse
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Calculator error (bad key script, persistence failure)
    #[error("{0}")]
    Calc(#[from] lcdcalc::core::CalcError),

    /// Storage error
    #[error("{0}")]
    Storage(#[from] lcdcalc::storage::StorageError),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML output could not be produced
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a config file parse error
    #[must_use]
    pub fn config_file(path: impl Into<PathBuf>, source: serde_yaml_ng::Error) -> Self {
        Self::ConfigFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use lcdcalc::core::CalcError;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad config");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad config"));
    }

    #[test]
    fn test_config_file_error_names_path() {
        let source = serde_yaml_ng::from_str::<u32>("[").unwrap_err();
        let err = CliError::config_file("/tmp/lcdcalc.yaml", source);
        assert!(err.to_string().contains("/tmp/lcdcalc.yaml"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_calc_error_passes_message_through() {
        let err: CliError = CalcError::UnknownKey('q').into();
        assert_eq!(err.to_string(), "Unknown key: 'q'");
    }
}
