//! Core calculator state machine
//!
//! Everything in here is pure state plus transition rules. Nothing touches
//! storage or the terminal; the [`crate::app`] layer wires those in.

pub mod accumulator;
pub mod calculation;
pub mod calculator;
pub mod display;
pub mod input;
pub mod log;
pub mod pattern;

pub use accumulator::Accumulator;
pub use calculation::{Calculation, Operator};
pub use calculator::Calculator;
pub use display::DisplayBuffer;
pub use input::{parse_keys, Input};
pub use log::CalculationLog;
pub use pattern::{Pattern, PatternCycler};

use thiserror::Error;

use crate::storage::StorageError;

/// Decimal places kept on every committed result
pub const RESULT_PRECISION: usize = 11;

/// Decimal places kept on a percent preview
pub const PERCENT_PRECISION: usize = 4;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The state machine itself never fails; these cover parsing of external
/// input and the persistence boundary.
#[derive(Debug, Error)]
pub enum CalcError {
    /// A key script contained a character with no keypad equivalent
    #[error("Unknown key: {0:?}")]
    UnknownKey(char),

    /// An operator name or symbol could not be parsed
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    /// Persistence failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Rounds `value` to `places` decimals by fixed-point formatting and
/// re-parsing, which strips binary float noise such as `0.30000000000000004`.
///
/// Non-finite values pass through untouched.
#[must_use]
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Formats a number the way the display shows it
///
/// Shortest round-trip decimal with no exponent; integers have no fraction,
/// negative zero shows as `0`, non-finite values use `NaN` / `Infinity`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}
