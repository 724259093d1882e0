//! lcdcalc CLI library
//!
//! Argument parsing, configuration, logging and command handlers for the
//! `lcdcalc` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod output;

pub use commands::{Cli, ColorArg, Commands, HistoryArgs, PatternArgs, PressArgs, TuiArgs};
pub use config::{
    default_config_path, default_data_dir, CliConfig, ColorChoice, FileConfig, Verbosity,
    DEFAULT_TICK_MS,
};
pub use error::{CliError, CliResult};
