//! Display buffer: the LCD text and its mode flags
//!
//! The buffer owns the visible numeral and every flag that decides how the
//! next key changes it. The sign is never part of `text`; it lives in
//! `negative` and is drawn as a separate indicator.

use tracing::trace;

use crate::core::format_number;

const NAN_TOKEN: &str = "NaN";
const INFINITY_TOKEN: &str = "Infinity";

/// Calculator display state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    /// Unsigned numeral (or `NaN` / `Infinity`)
    text: String,
    /// Nothing entered yet; `text` is hidden behind a placeholder
    placeholder: bool,
    /// A value is being composed and may become operand2
    ready: bool,
    /// Next digit extends `text` instead of replacing it
    append: bool,
    /// A percent preview is showing
    percent: bool,
    /// Sign indicator
    negative: bool,
    /// A committed result is showing
    result: bool,
    /// The next completion should carry its result forward as operand1
    chain: bool,
    /// Backspaced down to the bare `0`
    backspace_exhausted: bool,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Creates a display showing the placeholder
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: "0".to_string(),
            placeholder: true,
            ready: false,
            append: false,
            percent: false,
            negative: false,
            result: false,
            chain: false,
            backspace_exhausted: false,
        }
    }

    // ===== Key transitions =====

    /// Enters a digit (0-9)
    pub fn enter_digit(&mut self, digit: u8) {
        let digit = digit.min(9);
        if self.text() == Some("0") && digit == 0 {
            return;
        }

        self.percent = false;

        if !self.append || self.backspace_exhausted || !self.is_finite_text() {
            self.ready = true;
            self.negative = false;
            self.result = false;
            self.replace(&digit.to_string());
            self.append = true;
            self.backspace_exhausted = false;
            trace!(text = %self.text, "digit replaced display");
            return;
        }

        if self.text == "0" {
            self.text.clear();
        }
        self.text.push(char::from(b'0' + digit));
        trace!(text = %self.text, "digit appended");
    }

    /// Enters a decimal point
    ///
    /// `operator_pending` tells the buffer whether an operator is waiting for
    /// its second operand.
    pub fn enter_decimal(&mut self, operator_pending: bool) {
        if self.placeholder {
            return;
        }

        if !self.is_finite_text() {
            self.ready = true;
            self.append = true;
            self.negative = false;
            self.result = false;
            self.replace("0.");
            return;
        }

        if self.is_decimal() || self.result {
            if !self.ready {
                self.result = false;
                self.ready = true;
                self.append = true;
                self.replace("0.");
            }
            return;
        }

        if operator_pending && !self.append {
            self.ready = true;
            self.append = true;
            self.negative = false;
            self.replace("0.");
            return;
        }

        if self.text == "0" {
            self.text.push('.');
            self.ready = true;
            self.append = true;
            self.backspace_exhausted = false;
            return;
        }

        self.text.push('.');
    }

    /// Removes the last character
    pub fn backspace(&mut self) {
        if self.placeholder {
            return;
        }

        if !self.is_finite_text() {
            self.negative = false;
        }
        if self.text.len() == 1 || self.text == "0." || !self.is_finite_text() {
            self.text = "0".to_string();
            self.backspace_exhausted = true;
            return;
        }

        self.text.pop();
    }

    /// Flips the sign indicator
    pub fn toggle_negative(&mut self) {
        if self.is_clear() {
            return;
        }
        self.negative = !self.negative;
    }

    /// Replaces the numeral with its square root
    ///
    /// Works on the unsigned text; the sign indicator is left as it was.
    pub fn square_root(&mut self) {
        if self.is_clear() {
            return;
        }
        let negative = self.negative;
        if let Some(magnitude) = self.numeric_value().map(f64::abs) {
            self.render_result(magnitude.sqrt());
            self.negative = negative;
        }
    }

    /// Shows a computed value
    pub fn render_result(&mut self, value: f64) {
        let formatted = format_number(value);
        match formatted.strip_prefix('-') {
            Some(magnitude) => {
                self.negative = true;
                self.replace(magnitude);
            }
            None => {
                self.negative = false;
                self.replace(&formatted);
            }
        }
        trace!(text = %self.text, negative = self.negative, "rendered value");
    }

    /// Resets to a plain `0` with every mode cleared
    pub fn clear(&mut self) {
        *self = Self {
            placeholder: false,
            ..Self::new()
        };
    }

    fn replace(&mut self, text: &str) {
        self.placeholder = false;
        self.text.clear();
        self.text.push_str(text);
    }

    fn is_finite_text(&self) -> bool {
        self.text != NAN_TOKEN && self.text != INFINITY_TOKEN
    }

    // ===== Queries =====

    /// Visible numeral without sign; `None` while the placeholder shows
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        (!self.placeholder).then_some(self.text.as_str())
    }

    /// Text including the sign, as a single string (empty on placeholder)
    #[must_use]
    pub fn signed_text(&self) -> String {
        match self.text() {
            None => String::new(),
            Some(text) if self.negative => format!("-{text}"),
            Some(text) => text.to_string(),
        }
    }

    /// Signed numeric value; `None` while the placeholder shows
    #[must_use]
    pub fn numeric_value(&self) -> Option<f64> {
        let text = self.text()?;
        let magnitude = match text {
            NAN_TOKEN => f64::NAN,
            INFINITY_TOKEN => f64::INFINITY,
            _ => text.parse::<f64>().unwrap_or(f64::NAN),
        };
        Some(if self.negative { -magnitude } else { magnitude })
    }

    /// Placeholder or a bare `0`
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.placeholder || self.text == "0"
    }

    /// Whether the text already holds a decimal point
    #[must_use]
    pub fn is_decimal(&self) -> bool {
        !self.is_clear() && self.text.contains('.')
    }

    /// Whether the placeholder is showing
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Whether a value is being composed
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether the next digit appends
    #[must_use]
    pub const fn is_append(&self) -> bool {
        self.append
    }

    /// Whether a percent preview is showing
    #[must_use]
    pub const fn is_percent(&self) -> bool {
        self.percent
    }

    /// Whether the sign indicator is on
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether a committed result is showing
    #[must_use]
    pub const fn is_result(&self) -> bool {
        self.result
    }

    /// Whether the next completion chains
    #[must_use]
    pub const fn is_chain(&self) -> bool {
        self.chain
    }

    /// Whether backspace has emptied the entry
    #[must_use]
    pub const fn is_backspace_exhausted(&self) -> bool {
        self.backspace_exhausted
    }

    // ===== Mode setters used by the calculator =====

    /// Sets the ready flag
    pub fn set_ready(&mut self, ready: bool) -> &mut Self {
        self.ready = ready;
        self
    }

    /// Sets the append flag
    pub fn set_append(&mut self, append: bool) -> &mut Self {
        self.append = append;
        self
    }

    /// Sets the percent flag
    pub fn set_percent(&mut self, percent: bool) -> &mut Self {
        self.percent = percent;
        self
    }

    /// Sets the result flag
    pub fn set_result(&mut self, result: bool) -> &mut Self {
        self.result = result;
        self
    }

    /// Sets the chain flag
    pub fn set_chain(&mut self, chain: bool) -> &mut Self {
        self.chain = chain;
        self
    }

    /// Clears the sign indicator
    pub fn clear_negative(&mut self) -> &mut Self {
        self.negative = false;
        self
    }
}
