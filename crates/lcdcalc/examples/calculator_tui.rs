//! Calculator TUI Example
//!
//! Runs the terminal calculator on throwaway in-memory storage.
//!
//! Run with: cargo run --example calculator_tui --features tui

use std::time::Duration;

use lcdcalc::prelude::*;
use lcdcalc::tui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = CalculatorApp::new(MemoryStorage::new(), PatternCycler::default())
        .with_drawer_open(true);
    let mut app = TuiApp::new(app);

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run(&mut terminal, &mut app, Duration::from_millis(250));
    tui::restore_terminal(&mut terminal)?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    for calculation in app.app().log() {
        println!("{calculation}");
    }

    Ok(())
}
