//! Pattern command handler

use std::io::Write;

use lcdcalc::storage::Storage;
use tracing::info;

use super::pattern_cycler;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::pattern_line;
use crate::PatternArgs;

/// Shows the stored background pattern, advancing it first with `--next`
pub fn execute_pattern<S: Storage>(
    config: &CliConfig,
    args: &PatternArgs,
    storage: &mut S,
    out: &mut impl Write,
) -> CliResult<()> {
    let mut cycler = pattern_cycler(config);
    cycler.restore(storage);

    if args.next {
        if let Some(pattern) = cycler.advance() {
            info!(pattern = %pattern.name, "pattern advanced");
        }
        cycler.persist(storage)?;
    }

    match cycler.current() {
        Some(pattern) => writeln!(out, "{}", pattern_line(pattern))?,
        None => writeln!(out, "No patterns configured")?,
    }
    Ok(())
}
