//! Tui command handler

use std::time::Duration;

use lcdcalc::app::CalculatorApp;
use lcdcalc::storage::Storage;
use lcdcalc::tui::{self, TuiApp};
use tracing::info;

use super::{open_storage, pattern_cycler};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::TuiArgs;

/// Builds the terminal app from the config and flags
pub fn build_app<S: Storage>(config: &CliConfig, args: &TuiArgs, storage: S) -> TuiApp<S> {
    let app = CalculatorApp::new(storage, pattern_cycler(config))
        .with_drawer_open(args.drawer || config.drawer_open);
    TuiApp::new(app)
}

/// Animation tick, flag over config
#[must_use]
pub fn tick_rate(config: &CliConfig, args: &TuiArgs) -> Duration {
    Duration::from_millis(args.tick_ms.unwrap_or(config.tick_ms).max(1))
}

/// Runs the interactive calculator until the user quits
pub fn execute_tui(config: &CliConfig, args: &TuiArgs) -> CliResult<()> {
    let mut app = build_app(config, args, open_storage(config));
    let tick = tick_rate(config, args);
    info!(data_dir = %config.data_dir.display(), ?tick, "starting terminal calculator");

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run(&mut terminal, &mut app, tick);
    tui::restore_terminal(&mut terminal)?;
    result?;

    info!(history = app.app().log().len(), "terminal calculator closed");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::FileConfig;
    use lcdcalc::storage::MemoryStorage;

    #[test]
    fn test_drawer_from_flag_or_config() {
        let config = CliConfig::new();
        let closed = build_app(&config, &TuiArgs::default(), MemoryStorage::new());
        assert!(!closed.app().is_drawer_open());

        let args = TuiArgs {
            drawer: true,
            tick_ms: None,
        };
        let open = build_app(&config, &args, MemoryStorage::new());
        assert!(open.app().is_drawer_open());

        let config = config.with_file(FileConfig {
            drawer_open: Some(true),
            ..FileConfig::default()
        });
        let open = build_app(&config, &TuiArgs::default(), MemoryStorage::new());
        assert!(open.app().is_drawer_open());
    }

    #[test]
    fn test_configured_patterns_used() {
        let config = CliConfig::new().with_file(FileConfig {
            patterns: Some(vec!["img/waves.svg".to_string()]),
            ..FileConfig::default()
        });
        let app = build_app(&config, &TuiArgs::default(), MemoryStorage::new());
        assert_eq!(app.app().patterns().current().unwrap().name, "waves");
    }

    #[test]
    fn test_tick_rate_flag_wins() {
        let config = CliConfig::new();
        assert_eq!(
            tick_rate(&config, &TuiArgs::default()),
            Duration::from_millis(250)
        );
        let args = TuiArgs {
            drawer: false,
            tick_ms: Some(40),
        };
        assert_eq!(tick_rate(&config, &args), Duration::from_millis(40));
    }

    #[test]
    fn test_tick_rate_never_zero() {
        let args = TuiArgs {
            drawer: false,
            tick_ms: Some(0),
        };
        assert_eq!(tick_rate(&CliConfig::new(), &args), Duration::from_millis(1));
    }
}
