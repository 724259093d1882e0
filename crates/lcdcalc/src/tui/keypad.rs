//! On-screen keypad
//!
//! The keypad can be clicked with the mouse and lights up the button that
//! matches the last key pressed on the keyboard.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{Input, Operator};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: &'static str,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// Input sent when the button is clicked
    pub input: Input,
}

impl KeypadButton {
    /// Creates a button
    #[must_use]
    pub const fn new(label: &'static str, input: Input) -> Self {
        Self {
            label,
            pressed: false,
            input,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub const fn digit(d: u8) -> Self {
        const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        let d = if d > 9 { 9 } else { d };
        Self::new(LABELS[d as usize], Input::Digit(d))
    }

    /// Creates an operator button
    #[must_use]
    pub const fn operator(op: Operator) -> Self {
        let label = match op {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        };
        Self::new(label, Input::Operator(op))
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout - a 5x4 grid of buttons
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ √ ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::new("C", Input::Clear),
            KeypadButton::new("±", Input::ToggleSign),
            KeypadButton::new("%", Input::Percent),
            KeypadButton::operator(Operator::Divide),
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Multiply),
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Subtract),
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Add),
            KeypadButton::digit(0),
            KeypadButton::new(".", Input::Decimal),
            KeypadButton::new("√", Input::SquareRoot),
            KeypadButton::new("=", Input::Equals),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button that sends `input`
    #[must_use]
    pub fn find_button(&self, input: Input) -> Option<usize> {
        self.buttons.iter().position(|b| b.input == input)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for `input`, releasing every other one
    pub fn highlight(&mut self, input: Input) {
        self.release_all();
        if let Some(btn) = self
            .find_button(input)
            .and_then(|idx| self.buttons.get_mut(idx))
        {
            btn.set_pressed(true);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Converts a click position to the input of the button under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Input> {
        if x < area.x || y < area.y || x >= area.right() || y >= area.bottom() {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border is one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.get_button_at(row, col).map(|btn| btn.input)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub const fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.input {
        Input::Digit(_) | Input::Decimal => Style::default().fg(Color::White),
        Input::Operator(_) => Style::default().fg(Color::Yellow),
        Input::Equals => Style::default().fg(Color::Green),
        Input::Clear => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Cyan),
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let btn_width = inner.width / cols as u16;
        let btn_height = inner.height / rows as u16;

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);

            if btn_width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_len = label.chars().count() as u16;
                let label_x = x + btn_width.saturating_sub(label_len) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(
                        label_x,
                        label_y,
                        &Span::styled(label, button_style(btn)),
                        btn_width,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rendered(keypad: &Keypad, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(keypad).render(area, &mut buf);
        buf
    }

    fn content(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== KeypadButton tests =====

    #[test]
    fn test_digit_button_creation() {
        for d in 0..=9 {
            let btn = KeypadButton::digit(d);
            assert_eq!(btn.label, d.to_string());
            assert!(!btn.pressed);
            assert_eq!(btn.input, Input::Digit(d));
        }
    }

    #[test]
    fn test_operator_button_labels() {
        assert_eq!(KeypadButton::operator(Operator::Multiply).label, "×");
        assert_eq!(KeypadButton::operator(Operator::Divide).label, "÷");
        assert_eq!(
            KeypadButton::operator(Operator::Add).input,
            Input::Operator(Operator::Add)
        );
    }

    #[test]
    fn test_button_pressed_state() {
        let mut btn = KeypadButton::digit(5);
        btn.set_pressed(true);
        assert!(btn.pressed);
        btn.set_pressed(false);
        assert!(!btn.pressed);
    }

    // ===== Keypad layout =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_rows() {
        let keypad = Keypad::new();
        let row = |r: usize| -> Vec<&str> {
            (0..4)
                .map(|c| keypad.get_button_at(r, c).unwrap().label)
                .collect()
        };
        assert_eq!(row(0), vec!["C", "±", "%", "÷"]);
        assert_eq!(row(1), vec!["7", "8", "9", "×"]);
        assert_eq!(row(2), vec!["4", "5", "6", "-"]);
        assert_eq!(row(3), vec!["1", "2", "3", "+"]);
        assert_eq!(row(4), vec!["0", ".", "√", "="]);
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_every_keypad_input_has_a_button() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            assert!(keypad.find_button(Input::Digit(d)).is_some());
        }
        for op in Operator::ALL {
            assert!(keypad.find_button(Input::Operator(op)).is_some());
        }
        for input in [
            Input::Decimal,
            Input::Equals,
            Input::Percent,
            Input::SquareRoot,
            Input::ToggleSign,
            Input::Clear,
        ] {
            assert!(keypad.find_button(input).is_some(), "{input:?}");
        }
        assert!(keypad.find_button(Input::Backspace).is_none());
    }

    #[test]
    fn test_highlight_releases_others() {
        let mut keypad = Keypad::new();
        keypad.highlight(Input::Digit(7));
        keypad.highlight(Input::Equals);
        let pressed: Vec<&str> = keypad
            .buttons()
            .filter(|b| b.pressed)
            .map(|b| b.label)
            .collect();
        assert_eq!(pressed, vec!["="]);

        keypad.highlight(Input::Backspace);
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 0);
    }

    // ===== Hit testing =====

    #[test]
    fn test_hit_test_inside() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        // first inner cell is the clear button
        assert_eq!(keypad.hit_test(area, 1, 1), Some(Input::Clear));
        // bottom-right inner cell is equals
        assert_eq!(keypad.hit_test(area, 20, 10), Some(Input::Equals));
    }

    #[test]
    fn test_hit_test_outside_and_border() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 22, 12);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 100, 100).is_none());
        assert!(keypad.hit_test(area, 10, 10).is_none());
    }

    #[test]
    fn test_hit_test_area_at_screen_edge() {
        let keypad = Keypad::new();
        let area = Rect {
            x: u16::MAX - 5,
            y: u16::MAX - 5,
            width: 22,
            height: 12,
        };
        assert!(keypad.hit_test(area, u16::MAX - 5, u16::MAX - 5).is_none());
        assert_eq!(
            keypad.hit_test(area, u16::MAX - 4, u16::MAX - 4),
            Some(Input::Clear)
        );
    }

    #[test]
    fn test_hit_test_tiny_area() {
        let keypad = Keypad::new();
        assert!(keypad.hit_test(Rect::new(0, 0, 4, 4), 1, 1).is_none());
    }

    // ===== KeypadWidget tests =====

    #[test]
    fn test_keypad_widget_render() {
        let keypad = Keypad::new();
        let buf = rendered(&keypad, Rect::new(0, 0, 22, 12));
        let text = content(&buf);
        assert!(text.contains("Keypad"));
        assert!(text.contains("[7]"));
        assert!(text.contains("[+]"));
        assert!(text.contains("[=]"));
    }

    #[test]
    fn test_keypad_widget_render_small() {
        let keypad = Keypad::new();
        let buf = rendered(&keypad, Rect::new(0, 0, 5, 5));
        assert!(!content(&buf).contains("[7]"));
    }

    #[test]
    fn test_keypad_widget_pressed_style() {
        let mut keypad = Keypad::new();
        keypad.highlight(Input::Digit(7));
        let buf = rendered(&keypad, Rect::new(0, 0, 22, 12));
        let highlighted = buf
            .content()
            .iter()
            .filter(|c| c.bg == Color::Yellow)
            .count();
        assert_eq!(highlighted, 3);
    }
}
