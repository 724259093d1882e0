//! History command handler

use std::io::Write;

use lcdcalc::core::{Calculation, CalculationLog};
use lcdcalc::storage::Storage;
use tracing::info;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::history_line;
use crate::HistoryArgs;

/// Lists stored calculations newest first, or clears them
pub fn execute_history<S: Storage>(
    config: &CliConfig,
    args: &HistoryArgs,
    storage: &mut S,
    out: &mut impl Write,
) -> CliResult<()> {
    let mut log = CalculationLog::restore(storage);

    if args.clear {
        let removed = log.len();
        log.clear_persisted(storage)?;
        info!(removed, "history cleared");
        if !config.verbosity.is_quiet() {
            writeln!(out, "Cleared {removed} calculation(s)")?;
        }
        return Ok(());
    }

    if args.json {
        let newest_first: Vec<&Calculation> = log.iter_newest_first().collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&newest_first)?)?;
        return Ok(());
    }

    if log.is_empty() {
        if !config.verbosity.is_quiet() {
            writeln!(out, "No calculations yet")?;
        }
        return Ok(());
    }
    for calculation in log.iter_newest_first() {
        writeln!(out, "{}", history_line(calculation))?;
    }
    Ok(())
}
