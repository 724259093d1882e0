//! Unified calculator driver
//!
//! **Write the scenario once, run it against every front end.** The headless
//! [`CalculatorApp`] and the terminal [`TuiDriver`] both implement
//! [`CalculatorDriver`], and the `verify_*` functions below exercise either.

use crate::app::CalculatorApp;
use crate::core::{format_number, parse_keys, CalcResult, Input};
use crate::storage::Storage;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use lcdcalc::prelude::*;
///
/// let mut app = CalculatorApp::new(MemoryStorage::new(), PatternCycler::default());
/// app.enter_keys("200+10%=").unwrap();
/// assert_eq!(app.display_text(), "220");
/// ```
pub trait CalculatorDriver {
    /// Presses a single key
    fn press(&mut self, input: Input);

    /// What the LCD shows, sign included; empty while the placeholder shows
    fn display_text(&self) -> String;

    /// History entries, newest first
    fn history(&self) -> Vec<HistoryItem>;

    /// Name of the background pattern
    fn pattern_name(&self) -> Option<String>;

    /// Presses every key in a key script
    fn enter_keys(&mut self, keys: &str) -> CalcResult<()> {
        for input in parse_keys(keys)? {
            self.press(input);
        }
        Ok(())
    }

    /// Presses the clear key
    fn clear(&mut self) {
        self.press(Input::Clear);
    }
}

/// A history entry as shown in the drawer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// `a op b`
    pub expression: String,
    /// Result as displayed
    pub result: String,
}

fn history_items<S: Storage>(app: &CalculatorApp<S>) -> Vec<HistoryItem> {
    app.log()
        .iter_newest_first()
        .map(|calc| HistoryItem {
            expression: calc.expression(),
            result: format_number(calc.result()),
        })
        .collect()
}

impl<S: Storage> CalculatorDriver for CalculatorApp<S> {
    fn press(&mut self, input: Input) {
        self.handle(input);
    }

    fn display_text(&self) -> String {
        self.display().signed_text()
    }

    fn history(&self) -> Vec<HistoryItem> {
        history_items(self)
    }

    fn pattern_name(&self) -> Option<String> {
        self.patterns().current().map(|p| p.name.clone())
    }
}

/// TUI driver: feeds keys through the terminal key mapping
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{history_items, CalculatorDriver, HistoryItem};
    use crate::app::CalculatorApp;
    use crate::core::{Input, PatternCycler};
    use crate::storage::{MemoryStorage, Storage};
    use crate::tui::TuiApp;

    /// Drives a [`TuiApp`] with synthesized key events
    #[derive(Debug)]
    pub struct TuiDriver<S: Storage = MemoryStorage> {
        app: TuiApp<S>,
    }

    impl Default for TuiDriver<MemoryStorage> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver<MemoryStorage> {
        /// Driver over fresh in-memory state
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(TuiApp::new(CalculatorApp::new(
                MemoryStorage::new(),
                PatternCycler::default(),
            )))
        }
    }

    impl<S: Storage> TuiDriver<S> {
        /// Creates a TUI driver with an existing app
        pub fn with_app(app: TuiApp<S>) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &TuiApp<S> {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut TuiApp<S> {
            &mut self.app
        }

        /// Key that produces `input`, if the terminal has one
        fn key_for(input: Input) -> Option<KeyCode> {
            let code = match input {
                Input::Digit(d) => KeyCode::Char(char::from(b'0' + d.min(9))),
                Input::Decimal => KeyCode::Char('.'),
                Input::Operator(op) => KeyCode::Char(op.symbol()),
                Input::Equals => KeyCode::Enter,
                Input::Percent => KeyCode::Char('%'),
                Input::SquareRoot => KeyCode::Char('r'),
                Input::ToggleSign => KeyCode::Char('n'),
                Input::Backspace => KeyCode::Backspace,
                Input::Clear => KeyCode::Esc,
                Input::ClearHistory => KeyCode::Char('x'),
                Input::ToggleHistory => KeyCode::Char('h'),
                Input::AdvancePattern => KeyCode::Char('p'),
                Input::ToggleAnimation => KeyCode::Char('a'),
                Input::RecallHistory(_) => return None,
            };
            Some(code)
        }
    }

    impl<S: Storage> CalculatorDriver for TuiDriver<S> {
        fn press(&mut self, input: Input) {
            match Self::key_for(input) {
                Some(code) => self
                    .app
                    .handle_key(KeyEvent::new(code, KeyModifiers::NONE)),
                // drawer clicks have no key; go straight to the app
                None => self.app.press(input),
            }
        }

        fn display_text(&self) -> String {
            self.app.app().display().signed_text()
        }

        fn history(&self) -> Vec<HistoryItem> {
            history_items(self.app.app())
        }

        fn pattern_name(&self) -> Option<String> {
            self.app.app().patterns().current().map(|p| p.name.clone())
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified scenarios =====
// These work with ANY CalculatorDriver implementation

/// Basic arithmetic, one operation at a time
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("5+3=", "8"),
        ("10-4=", "6"),
        ("6*7=", "42"),
        ("20/4=", "5"),
        ("0.1+0.2=", "0.3"),
        ("3-5=", "-2"),
    ] {
        driver.clear();
        driver.enter_keys(keys).ok();
        assert_eq!(driver.display_text(), expected, "keys: {keys}");
    }
    driver.clear();
}

/// Results feed the next operation
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("5+3=").ok();
    driver.enter_keys("+2=").ok();
    assert_eq!(driver.display_text(), "10");

    driver.clear();
    driver.enter_keys("2+3*4=").ok();
    assert_eq!(driver.display_text(), "20");

    driver.clear();
    driver.enter_keys("7++-2=").ok();
    assert_eq!(driver.display_text(), "5");
    driver.clear();
}

/// Percent, square root, sign and backspace
pub fn verify_functions<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("200+10%").ok();
    assert_eq!(driver.display_text(), "20");
    driver.enter_keys("=").ok();
    assert_eq!(driver.display_text(), "220");

    driver.clear();
    driver.enter_keys("81s").ok();
    assert_eq!(driver.display_text(), "9");

    driver.clear();
    driver.enter_keys("4n").ok();
    assert_eq!(driver.display_text(), "-4");

    driver.clear();
    driver.enter_keys("5<").ok();
    assert_eq!(driver.display_text(), "0");
    driver.enter_keys("5").ok();
    assert_eq!(driver.display_text(), "5");
    driver.clear();
}

/// Non-finite results reach the display unguarded
pub fn verify_non_finite<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.enter_keys("5/0=").ok();
    assert_eq!(driver.display_text(), "Infinity");

    driver.clear();
    driver.enter_keys("5/0=*0=").ok();
    assert_eq!(driver.display_text(), "NaN");

    driver.clear();
    driver.enter_keys("9ns").ok();
    assert_eq!(driver.display_text(), "-3");
    driver.clear();
}

/// History is recorded newest first and can be cleared
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.press(Input::ClearHistory);
    driver.enter_keys("1+1=").ok();
    driver.enter_keys("2+2=").ok();
    driver.enter_keys("3+3=").ok();

    let history = driver.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].expression, "3 + 3");
    assert_eq!(history[0].result, "6");

    driver.press(Input::ClearHistory);
    assert!(driver.history().is_empty());
    driver.clear();
}

/// Pattern cycling never repeats immediately
pub fn verify_patterns<D: CalculatorDriver>(driver: &mut D) {
    let before = driver.pattern_name();
    driver.press(Input::AdvancePattern);
    let after = driver.pattern_name();
    if before.is_some() {
        assert_ne!(before, after);
    }
}

/// Complete verification suite
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_functions(driver);
    verify_non_finite(driver);
    verify_history(driver);
    verify_patterns(driver);
}
