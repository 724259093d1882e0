//! Keyboard mapping
//!
//! Physical keys mirror the on-screen buttons. Keys that only make sense in
//! the terminal (drawer navigation, quit) get their own actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Input;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// A calculator or drawer input
    Input(Input),
    /// Move the drawer selection towards older entries
    SelectNext,
    /// Move the drawer selection towards newer entries
    SelectPrevious,
    /// Recall the selected drawer entry
    RecallSelected,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Enter => KeyAction::Input(Input::Equals),
            KeyCode::Backspace => KeyAction::Input(Input::Backspace),
            KeyCode::Esc | KeyCode::Char(' ') => KeyAction::Input(Input::Clear),
            KeyCode::Up => KeyAction::SelectPrevious,
            KeyCode::Down => KeyAction::SelectNext,
            KeyCode::Tab => KeyAction::RecallSelected,
            KeyCode::Char(c) => Input::from_char(c).map_or(KeyAction::None, KeyAction::Input),
            _ => KeyAction::None,
        }
    }
}
