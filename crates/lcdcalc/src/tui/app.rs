//! Terminal application state
//!
//! Wraps the headless [`CalculatorApp`] with what only the terminal needs:
//! the keypad highlight, the animation tick and the quit flag.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use crate::app::CalculatorApp;
use crate::core::Input;
use crate::storage::Storage;

/// Terminal front end state
#[derive(Debug)]
pub struct TuiApp<S: Storage> {
    app: CalculatorApp<S>,
    keypad: Keypad,
    input_handler: InputHandler,
    /// Pattern band scroll position
    tick: u64,
    should_quit: bool,
}

impl<S: Storage> TuiApp<S> {
    /// Wraps a calculator app
    pub fn new(app: CalculatorApp<S>) -> Self {
        Self {
            app,
            keypad: Keypad::new(),
            input_handler: InputHandler::new(),
            tick: 0,
            should_quit: false,
        }
    }

    /// Handles a key press
    pub fn handle_key(&mut self, event: KeyEvent) {
        let action = self.input_handler.handle_key(event);
        self.apply(action);
    }

    /// Handles a mouse event; clicks inside `keypad_area` press buttons
    pub fn handle_mouse(&mut self, event: MouseEvent, keypad_area: Rect) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(input) = self.keypad.hit_test(keypad_area, event.column, event.row) {
            self.apply(KeyAction::Input(input));
        }
    }

    /// Applies an already mapped action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(input) => self.press(input),
            KeyAction::SelectNext => self.app.select_next(),
            KeyAction::SelectPrevious => self.app.select_previous(),
            KeyAction::RecallSelected => self.app.recall_selected(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Sends an input to the calculator and lights its button
    pub fn press(&mut self, input: Input) {
        self.keypad.highlight(input);
        self.app.handle(input);
    }

    /// Advances the pattern animation unless paused
    pub fn on_tick(&mut self) {
        if !self.app.patterns().is_paused() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Current animation offset
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// The keypad with its highlight state
    #[must_use]
    pub const fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The wrapped calculator app
    #[must_use]
    pub const fn app(&self) -> &CalculatorApp<S> {
        &self.app
    }

    /// Mutable access to the wrapped app
    pub fn app_mut(&mut self) -> &mut CalculatorApp<S> {
        &mut self.app
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
