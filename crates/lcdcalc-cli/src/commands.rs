//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// lcdcalc: keypad calculator with history and background patterns
#[derive(Parser, Debug)]
#[command(name = "lcdcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// YAML config file (defaults to <config dir>/lcdcalc/config.yaml)
    #[arg(long, env = "LCDCALC_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding history and pattern state
    #[arg(long, env = "LCDCALC_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Write logs to this file as JSON lines
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal calculator
    Tui(TuiArgs),

    /// Press a key script and print the display
    ///
    /// Keys: 0-9 . + - * / = % s(qrt) n(egate) <(backspace) c(lear);
    /// whitespace is ignored.
    Press(PressArgs),

    /// List or clear the calculation history
    History(HistoryArgs),

    /// Show or advance the background pattern
    Pattern(PatternArgs),

    /// Print the effective configuration as YAML
    Config,
}

/// Arguments for the tui command
#[derive(Args, Debug, Default)]
pub struct TuiArgs {
    /// Open the history drawer on start
    #[arg(long)]
    pub drawer: bool,

    /// Animation tick in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Key script, e.g. "12*3="
    pub keys: String,

    /// Print the display and committed calculations as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the history command
#[derive(Args, Debug, Default)]
pub struct HistoryArgs {
    /// Remove every stored calculation
    #[arg(long)]
    pub clear: bool,

    /// Print as JSON
    #[arg(long, conflicts_with = "clear")]
    pub json: bool,
}

/// Arguments for the pattern command
#[derive(Args, Debug, Default)]
pub struct PatternArgs {
    /// Switch to the next pattern
    #[arg(long)]
    pub next: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
