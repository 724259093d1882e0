//! lcdcalc: keypad calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! lcdcalc tui                  # Interactive calculator
//! lcdcalc press "200+10%="     # Run a key script, print the display
//! lcdcalc history              # Past calculations, newest first
//! lcdcalc pattern --next       # Switch the background pattern
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use lcdcalc_cli::{
    handlers::{self, open_storage},
    logging::{self, LogTarget},
    Cli, CliConfig, CliResult, ColorChoice, Commands, FileConfig, Verbosity,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    console::set_colors_enabled(config.color.should_color());

    let interactive = matches!(cli.command, Commands::Tui(_));
    logging::init(
        config.verbosity,
        LogTarget::select(cli.log_file.as_deref(), interactive),
    )?;
    debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    match cli.command {
        Commands::Tui(args) => handlers::execute_tui(&config, &args),
        Commands::Press(args) => {
            handlers::execute_press(&config, &args, open_storage(&config), &mut stdout.lock())
        }
        Commands::History(args) => handlers::execute_history(
            &config,
            &args,
            &mut open_storage(&config),
            &mut stdout.lock(),
        ),
        Commands::Pattern(args) => handlers::execute_pattern(
            &config,
            &args,
            &mut open_storage(&config),
            &mut stdout.lock(),
        ),
        Commands::Config => handlers::execute_config(&config, &mut stdout.lock()),
    }
}

/// Defaults, then the config file, then flags
fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::load_default()?,
    };

    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();

    let mut config = CliConfig::new()
        .with_file(file)
        .with_verbosity(verbosity)
        .with_color(color);
    if let Some(dir) = &cli.data_dir {
        config = config.with_data_dir(dir);
    }
    config.validate()?;
    Ok(config)
}
