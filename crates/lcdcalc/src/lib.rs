//! lcdcalc - keypad calculator with an LCD, a history drawer and backgrounds
//!
//! The calculator reads one key at a time. Digits build up the LCD text,
//! an operator latches the first operand, equals commits a [`Calculation`]
//! to the history log. Logged results can be recalled into either operand.
//! History and the chosen background pattern survive restarts through a
//! pluggable [`Storage`].
//!
//! # Layers
//!
//! - [`core`]: display buffer, accumulator, controller, history log, patterns
//! - [`storage`]: key/value persistence (in memory or one file per key)
//! - [`app`]: the headless application tying the core to storage
//! - [`driver`]: one scenario API for every front end
//! - `tui`: ratatui front end (feature `tui`, on by default)
//!
//! # Example
//!
//! ```rust
//! use lcdcalc::prelude::*;
//!
//! let mut app = CalculatorApp::new(MemoryStorage::new(), PatternCycler::default());
//!
//! app.press_keys("12*3=").unwrap();
//! assert_eq!(app.display().text(), Some("36"));
//!
//! // the result seeds the next operation
//! app.press_keys("+4=").unwrap();
//! assert_eq!(app.display().text(), Some("40"));
//! assert_eq!(app.log().len(), 2);
//! ```
//!
//! [`Calculation`]: core::Calculation
//! [`Storage`]: storage::Storage

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod app;
pub mod core;
pub mod driver;
pub mod storage;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::app::CalculatorApp;
    pub use crate::core::{
        format_number, parse_keys, Accumulator, CalcError, CalcResult, Calculation,
        CalculationLog, Calculator, DisplayBuffer, Input, Operator, Pattern, PatternCycler,
    };
    pub use crate::driver::{CalculatorDriver, HistoryItem};
    pub use crate::storage::{FileStorage, MemoryStorage, Storage, StorageError};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::TuiApp;
}
