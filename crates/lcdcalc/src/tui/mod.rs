//! Terminal front end (ratatui + crossterm)

mod app;
mod input;
mod keypad;
mod ui;

pub use app::TuiApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{layout, pattern_glyphs, render, CalculatorUI, UiLayout};

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::debug;

use crate::storage::Storage;

/// Terminal type used by [`run`]
pub type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Switches the terminal to raw mode on the alternate screen
pub fn setup_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Undoes [`setup_terminal`]
pub fn restore_terminal(terminal: &mut CrosstermTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()
}

/// Runs the event loop until the user quits
///
/// `tick_rate` drives the pattern animation only.
pub fn run<B: Backend, S: Storage>(
    terminal: &mut Terminal<B>,
    app: &mut TuiApp<S>,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        terminal.draw(|frame| render(app, frame))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    app.handle_mouse(mouse, layout(area).keypad);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    debug!("event loop finished");
    Ok(())
}
