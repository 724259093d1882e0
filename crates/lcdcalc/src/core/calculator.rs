//! Calculator controller
//!
//! Routes keypad [`Input`]s to the [`DisplayBuffer`] and the [`Accumulator`].
//! Holds no history; a committed [`Calculation`] is handed back to the caller.

use tracing::debug;

use crate::core::{Accumulator, Calculation, DisplayBuffer, Input, Operator};

/// Display plus pending operation
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    display: DisplayBuffer,
    accumulator: Accumulator,
}

impl Calculator {
    /// Creates a calculator showing the placeholder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a keypad input
    ///
    /// Returns the calculation committed by this input, if any. Non-keypad
    /// inputs (drawer, pattern) are ignored.
    pub fn dispatch(&mut self, input: Input) -> Option<Calculation> {
        match input {
            Input::Digit(d) => self.display.enter_digit(d),
            Input::Decimal => self
                .display
                .enter_decimal(self.accumulator.is_operator_ready()),
            Input::Operator(op) => return self.select_operator(op),
            Input::Equals => return self.complete(),
            Input::Percent => self.percent(),
            Input::SquareRoot => self.display.square_root(),
            Input::ToggleSign => self.display.toggle_negative(),
            Input::Backspace => self.display.backspace(),
            Input::Clear => self.clear_entry(),
            Input::ClearHistory
            | Input::ToggleHistory
            | Input::RecallHistory(_)
            | Input::AdvancePattern
            | Input::ToggleAnimation => {}
        }
        None
    }

    /// Selects a binary operator
    ///
    /// With an operator already pending and a second operand entered, the
    /// pending calculation is committed first and its result chained into
    /// operand1.
    pub fn select_operator(&mut self, op: Operator) -> Option<Calculation> {
        let value = self.display.numeric_value()?;

        let mut committed = None;
        if self.accumulator.is_operator_ready() {
            if self.display.is_ready() {
                self.display.set_chain(true);
                committed = self.complete();
            }
            if self.accumulator.operator() == Some(op) {
                return committed;
            }
            self.accumulator = self.accumulator.with_operator(op);
        } else {
            self.accumulator = self.accumulator.with_operand1(value).with_operator(op);
        }

        debug!(operator = %op, operand1 = ?self.accumulator.operand1(), "operator selected");
        self.display.set_ready(false).set_append(false);
        committed
    }

    /// Commits the pending calculation (equals)
    pub fn complete(&mut self) -> Option<Calculation> {
        if !self.display.is_ready() || !self.accumulator.is_operator_ready() {
            return None;
        }

        let value = self.display.numeric_value()?;
        let calculation = self.accumulator.with_operand2(value).resolve()?;

        self.reset();
        self.display.render_result(calculation.result());
        self.display.set_result(true);

        if self.display.is_chain() {
            self.accumulator = self.accumulator.with_operand1(calculation.result());
            self.display.set_chain(false);
        }

        debug!(%calculation, "calculation committed");
        Some(calculation)
    }

    /// Replaces the second operand with a percentage of the first
    pub fn percent(&mut self) {
        if !self.display.is_ready()
            || !self.accumulator.is_operator_ready()
            || self.display.is_percent()
        {
            return;
        }
        let Some(value) = self.display.numeric_value() else {
            return;
        };

        self.accumulator = self.accumulator.with_operand2(value);
        if let Some(percentage) = self.accumulator.percentage() {
            self.display.render_result(percentage);
            self.display.set_percent(true).set_append(false);
            debug!(percentage, "percent applied");
        }
    }

    /// Drops the pending operation and the display modes
    ///
    /// The text itself is left alone.
    pub fn reset(&mut self) {
        self.accumulator = self.accumulator.reset();
        self.display
            .set_ready(false)
            .set_append(false)
            .set_percent(false)
            .clear_negative();
    }

    /// Clear key: pending operation gone, display back to `0`
    pub fn clear_entry(&mut self) {
        self.accumulator = self.accumulator.reset();
        self.display.clear();
    }

    /// Loads a past result so it can serve as either operand
    pub fn recall(&mut self, value: f64) {
        self.display.render_result(value);
        self.display
            .set_ready(true)
            .set_append(false)
            .set_percent(false)
            .set_result(false);
    }

    /// The display
    #[must_use]
    pub const fn display(&self) -> &DisplayBuffer {
        &self.display
    }

    /// The pending operation
    #[must_use]
    pub const fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }
}
