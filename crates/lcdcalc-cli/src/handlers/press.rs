//! Press command handler

use std::io::Write;

use lcdcalc::app::CalculatorApp;
use lcdcalc::storage::Storage;
use serde_json::json;
use tracing::info;

use super::pattern_cycler;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{display_line, history_line};
use crate::PressArgs;

/// Feeds a key script to a calculator backed by `storage`
///
/// Prints the final display. Committed calculations are written back to
/// storage, and a failed write is an error here rather than a warning.
pub fn execute_press<S: Storage>(
    config: &CliConfig,
    args: &PressArgs,
    storage: S,
    out: &mut impl Write,
) -> CliResult<()> {
    let mut app = CalculatorApp::new(storage, pattern_cycler(config));
    let committed = app.press_keys(&args.keys)?;
    info!(keys = %args.keys, committed = committed.len(), "key script applied");

    if !committed.is_empty() {
        app.save_history()?;
    }

    if args.json {
        let report = json!({
            "display": app.display().signed_text(),
            "calculations": committed,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "{}", display_line(app.display()))?;
    if config.verbosity.is_verbose() {
        for calculation in &committed {
            writeln!(out, "  {}", history_line(calculation))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Verbosity;
    use lcdcalc::storage::{MemoryStorage, CALCULATED_KEY, PATTERN_KEY};

    fn press(config: &CliConfig, keys: &str, json: bool, storage: &mut MemoryStorage) -> String {
        let args = PressArgs {
            keys: keys.to_string(),
            json,
        };
        let mut out = Vec::new();
        execute_press(config, &args, storage, &mut out).unwrap();
        console::strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned()
    }

    #[test]
    fn test_prints_display() {
        let mut storage = MemoryStorage::new();
        assert_eq!(press(&CliConfig::new(), "12*3=", false, &mut storage), "36\n");
        assert!(storage.contains(CALCULATED_KEY));
    }

    #[test]
    fn test_no_commit_leaves_storage_alone() {
        let mut storage = MemoryStorage::new();
        assert_eq!(press(&CliConfig::new(), "12*3", false, &mut storage), "3\n");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_commit_does_not_write_pattern() {
        let mut storage = MemoryStorage::new();
        press(&CliConfig::new(), "4+4=", false, &mut storage);
        assert!(storage.contains(CALCULATED_KEY));
        assert!(!storage.contains(PATTERN_KEY));
    }

    #[test]
    fn test_history_accumulates_across_runs() {
        let mut storage = MemoryStorage::new();
        press(&CliConfig::new(), "1+1=", false, &mut storage);
        press(&CliConfig::new(), "2+2=", false, &mut storage);
        let app = CalculatorApp::new(&mut storage, pattern_cycler(&CliConfig::new()));
        assert_eq!(app.log().len(), 2);
    }

    #[test]
    fn test_verbose_lists_commits() {
        let config = CliConfig::new().with_verbosity(Verbosity::Verbose);
        let text = press(&config, "2+3*4=", false, &mut MemoryStorage::new());
        assert_eq!(text, "20\n  2 + 3 = 5\n  5 * 4 = 20\n");
    }

    #[test]
    fn test_json_report() {
        let text = press(&CliConfig::new(), "9-12=", true, &mut MemoryStorage::new());
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(report["display"], "-3");
        assert_eq!(report["calculations"][0]["operand1"], 9.0);
        assert_eq!(report["calculations"][0]["result"], -3.0);
    }

    #[test]
    fn test_unknown_key_is_error() {
        let args = PressArgs {
            keys: "1+q".to_string(),
            json: false,
        };
        let mut out = Vec::new();
        let err = execute_press(&CliConfig::new(), &args, MemoryStorage::new(), &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("Unknown key"));
        assert!(out.is_empty());
    }
}
