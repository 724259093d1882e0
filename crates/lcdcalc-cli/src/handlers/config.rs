//! Config command handler

use std::io::Write;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Prints the effective configuration as YAML
pub fn execute_config(config: &CliConfig, out: &mut impl Write) -> CliResult<()> {
    write!(out, "{}", config.to_yaml()?)?;
    Ok(())
}
