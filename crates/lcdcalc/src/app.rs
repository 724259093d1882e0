//! Application composition root
//!
//! [`CalculatorApp`] owns the calculator, the history drawer, the pattern
//! cycler and the storage they persist to. Every front end feeds it
//! [`Input`]s; it decides which component handles each one and writes
//! changed state back to storage.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::{
    parse_keys, CalcResult, Calculation, CalculationLog, Calculator, DisplayBuffer, Input,
    PatternCycler,
};
use crate::storage::Storage;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp<S: Storage> {
    calculator: Calculator,
    log: CalculationLog,
    patterns: PatternCycler,
    storage: S,
    drawer_open: bool,
    /// Selected drawer row, counted newest first
    selected: Option<usize>,
}

impl<S: Storage> CalculatorApp<S> {
    /// Creates the app and restores history and pattern from `storage`
    pub fn new(storage: S, mut patterns: PatternCycler) -> Self {
        let log = CalculationLog::restore(&storage);
        patterns.restore(&storage);
        info!(
            history = log.len(),
            pattern = patterns.current().map(|p| p.name.as_str()),
            "calculator started"
        );
        Self {
            calculator: Calculator::new(),
            log,
            patterns,
            storage,
            drawer_open: false,
            selected: None,
        }
    }

    /// Starts with the history drawer open or closed
    #[must_use]
    pub fn with_drawer_open(mut self, open: bool) -> Self {
        self.drawer_open = open;
        self
    }

    /// Applies one input; returns the calculation it committed, if any
    pub fn handle(&mut self, input: Input) -> Option<Calculation> {
        if input.is_keypad() {
            let committed = self.calculator.dispatch(input)?;
            self.log.push(committed.clone());
            if let Err(e) = self.log.persist(&mut self.storage) {
                warn!(error = %e, "failed to persist calculation history");
            }
            return Some(committed);
        }

        match input {
            Input::ClearHistory => self.clear_history(),
            Input::ToggleHistory => self.toggle_drawer(),
            Input::RecallHistory(id) => self.recall(id),
            Input::AdvancePattern => self.advance_pattern(),
            Input::ToggleAnimation => {
                let paused = self.patterns.toggle_animation();
                debug!(paused, "animation toggled");
            }
            _ => {}
        }
        None
    }

    /// Parses and applies a key script, returning every committed calculation
    pub fn press_keys(&mut self, script: &str) -> CalcResult<Vec<Calculation>> {
        let inputs = parse_keys(script)?;
        Ok(inputs
            .into_iter()
            .filter_map(|input| self.handle(input))
            .collect())
    }

    fn clear_history(&mut self) {
        if let Err(e) = self.log.clear_persisted(&mut self.storage) {
            warn!(error = %e, "failed to remove stored history");
        }
        self.selected = None;
        debug!("history cleared");
    }

    fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
        if !self.drawer_open {
            self.selected = None;
        }
    }

    fn recall(&mut self, id: Uuid) {
        match self.log.get(id) {
            Some(calculation) => {
                let value = calculation.result();
                self.calculator.recall(value);
                debug!(%id, value, "recalled history item");
            }
            None => debug!(%id, "recall of unknown history item ignored"),
        }
    }

    fn advance_pattern(&mut self) {
        if self.patterns.advance().is_none() {
            return;
        }
        if let Err(e) = self.patterns.persist(&mut self.storage) {
            warn!(error = %e, "failed to persist pattern");
        }
    }

    // ===== Drawer selection =====

    /// Moves the drawer selection one row down (towards older entries)
    pub fn select_next(&mut self) {
        if self.log.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.log.len() - 1;
        self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
    }

    /// Moves the drawer selection one row up (towards newer entries)
    pub fn select_previous(&mut self) {
        if self.log.is_empty() {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Selected drawer row (0 is the newest entry)
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Calculation under the drawer selection
    #[must_use]
    pub fn selected_calculation(&self) -> Option<&Calculation> {
        self.log.iter_newest_first().nth(self.selected?)
    }

    /// Recalls the selected drawer row onto the display
    pub fn recall_selected(&mut self) {
        if let Some(id) = self.selected_calculation().map(Calculation::id) {
            self.handle(Input::RecallHistory(id));
        }
    }

    // ===== Accessors =====

    /// The calculator
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The display
    #[must_use]
    pub const fn display(&self) -> &DisplayBuffer {
        self.calculator.display()
    }

    /// Committed calculations
    #[must_use]
    pub const fn log(&self) -> &CalculationLog {
        &self.log
    }

    /// Background patterns
    #[must_use]
    pub const fn patterns(&self) -> &PatternCycler {
        &self.patterns
    }

    /// Whether the history drawer is open
    #[must_use]
    pub const fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Writes the calculation history to storage
    ///
    /// [`handle`](Self::handle) already persists as it goes and only logs
    /// failures; this surfaces them. The pattern key is left alone.
    pub fn save_history(&mut self) -> CalcResult<()> {
        self.log.persist(&mut self.storage)
    }

    /// Backing storage
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the app, returning its storage
    pub fn into_storage(self) -> S {
        self.storage
    }
}
