//! TUI rendering
//!
//! A pure projection of [`TuiApp`] state onto a ratatui buffer.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
    Frame,
};

use super::app::TuiApp;
use super::keypad::KeypadWidget;
use crate::core::format_number;
use crate::storage::Storage;

/// Width of the calculator column
const CALCULATOR_WIDTH: u16 = 26;

/// Title shown on the outer frame
pub const TITLE: &str = " lcdcalc ";

/// Key reminder shown in the status line
pub const STATUS_KEYS: &str = "h history  x clear  p pattern  a animate  ^C quit";

/// Screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Background pattern band along the top
    pub pattern: Rect,
    /// LCD panel
    pub lcd: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Right-hand area: history drawer when open, more pattern otherwise
    pub side: Rect,
    /// Status line
    pub status: Rect,
}

/// Splits the terminal area into regions
#[must_use]
pub fn layout(area: Rect) -> UiLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Pattern band
            Constraint::Min(0),    // Calculator and drawer
            Constraint::Length(1), // Status
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CALCULATOR_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    let calculator = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // LCD: hint line and value line
            Constraint::Min(0),    // Keypad
        ])
        .split(columns[0]);

    UiLayout {
        pattern: rows[0],
        lcd: calculator[0],
        keypad: calculator[1],
        side: columns[1],
        status: rows[2],
    }
}

/// Renders the calculator UI to the frame
pub fn render<S: Storage>(app: &TuiApp<S>, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Glyph cycle used to draw a pattern in the terminal
#[must_use]
pub fn pattern_glyphs(name: &str) -> &'static [char] {
    match name {
        "bubbles" => &['o', ' ', '°', ' ', 'O', ' ', '.', ' '],
        "circuit-board" => &['─', '┬', '─', '─', '┴', '─', '┼', '─'],
        "diagonal-lines" => &['╱', ' ', '╱', ' '],
        "hexagons" => &['⬡', ' ', '⬡', '⬢', ' '],
        "topography" => &['~', '≈', '~', ' ', '-', '~'],
        _ => &['·', ' '],
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a, S: Storage> {
    app: &'a TuiApp<S>,
}

impl<'a, S: Storage> CalculatorUI<'a, S> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub const fn new(app: &'a TuiApp<S>) -> Self {
        Self { app }
    }

    fn render_pattern(&self, area: Rect, buf: &mut Buffer) {
        let name = self
            .app
            .app()
            .patterns()
            .current()
            .map_or("", |p| p.name.as_str());
        let glyphs = pattern_glyphs(name);
        let offset = (self.app.tick() % glyphs.len() as u64) as usize;
        let style = Style::default().fg(Color::DarkGray);

        for row in 0..area.height {
            let line: String = (0..area.width as usize)
                .map(|x| glyphs[(x + offset + row as usize) % glyphs.len()])
                .collect();
            buf.set_string(area.x, area.y + row, line, style);
        }
    }

    fn render_lcd(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.app().display();
        let accumulator = self.app.app().calculator().accumulator();

        let hint = match (accumulator.operand1(), accumulator.operator()) {
            (Some(a), Some(op)) => format!("{} {}", format_number(a), op),
            _ => String::new(),
        };

        let sign = Span::styled(
            if display.is_negative() { "-" } else { " " },
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        );
        let value = match display.text() {
            Some(text) => Span::styled(
                text.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("0", Style::default().fg(Color::DarkGray)),
        };
        let percent = if display.is_percent() { " %" } else { "" };

        let inner_width = area.width.saturating_sub(2) as usize;
        let body_width = value.content.chars().count() + percent.len();
        let padding = " ".repeat(inner_width.saturating_sub(body_width + 1));

        let lines = vec![
            Line::from(Span::styled(hint, Style::default().fg(Color::Gray)))
                .alignment(Alignment::Right),
            Line::from(vec![sign, Span::raw(padding), value, Span::raw(percent)]),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_drawer(&self, area: Rect, buf: &mut Buffer) {
        let app = self.app.app();
        let block = Block::default()
            .title(" History (newest first) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        if app.log().is_empty() {
            Paragraph::new(Span::styled(
                "No calculations yet",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = app
            .log()
            .iter_newest_first()
            .map(|calc| {
                ListItem::new(Line::from(vec![
                    Span::styled(calc.expression(), Style::default().fg(Color::Gray)),
                    Span::raw(" = "),
                    Span::styled(
                        format_number(calc.result()),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        let mut state = ListState::default().with_selected(app.selected());
        StatefulWidget::render(list, area, buf, &mut state);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let patterns = self.app.app().patterns();
        let name = patterns.current().map_or("none", |p| p.name.as_str());
        let paused = if patterns.is_paused() { " (paused)" } else { "" };

        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("pattern: {name}{paused}"),
                Style::default().fg(Color::Magenta),
            ),
            Span::raw("  "),
            Span::styled(STATUS_KEYS, Style::default().fg(Color::DarkGray)),
        ]))
        .render(area, buf);
    }
}

impl<S: Storage> Widget for CalculatorUI<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = layout(area);
        self.render_pattern(regions.pattern, buf);
        self.render_lcd(regions.lcd, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);

        if self.app.app().is_drawer_open() {
            self.render_drawer(regions.side, buf);
        } else {
            self.render_pattern(regions.side, buf);
        }

        self.render_status(regions.status, buf);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::app::CalculatorApp;
    use crate::core::{Input, PatternCycler};
    use crate::storage::MemoryStorage;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn tui() -> TuiApp<MemoryStorage> {
        TuiApp::new(CalculatorApp::new(
            MemoryStorage::new(),
            PatternCycler::default(),
        ))
    }

    fn press(app: &mut TuiApp<MemoryStorage>, keys: &str) {
        for input in crate::core::parse_keys(keys).unwrap() {
            app.press(input);
        }
    }

    fn draw(app: &TuiApp<MemoryStorage>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn lcd_line(app: &TuiApp<MemoryStorage>) -> String {
        let area = Rect::new(0, 0, 80, 24);
        let regions = layout(area);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let y = regions.lcd.y + 2;
        (regions.lcd.x..regions.lcd.x + regions.lcd.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    // ===== Layout =====

    #[test]
    fn test_layout_regions_fit() {
        let area = Rect::new(0, 0, 80, 24);
        let regions = layout(area);
        assert_eq!(regions.lcd.width, CALCULATOR_WIDTH);
        assert_eq!(regions.lcd.height, 4);
        assert_eq!(regions.pattern.height, 1);
        assert_eq!(regions.status.height, 1);
        assert!(regions.keypad.height >= 12);
        assert_eq!(regions.side.x, regions.lcd.x + CALCULATOR_WIDTH);
    }

    // ===== LCD =====

    #[test]
    fn test_render_placeholder() {
        let app = tui();
        let content = draw(&app, 80, 24);
        assert!(content.contains("Display"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("lcdcalc"));
    }

    #[test]
    fn test_render_value_right_aligned() {
        let mut app = tui();
        press(&mut app, "123");
        let line = lcd_line(&app);
        assert!(line.trim_end_matches('│').trim_end().ends_with("123"));
    }

    #[test]
    fn test_render_negative_indicator_separate() {
        let mut app = tui();
        press(&mut app, "3-5=");
        let line = lcd_line(&app);
        let inner = line.trim_start_matches('│');
        assert!(inner.starts_with('-'));
        assert!(!inner.contains("-2"));
        assert!(inner.trim_end_matches('│').trim_end().ends_with('2'));
    }

    #[test]
    fn test_render_pending_hint() {
        let mut app = tui();
        press(&mut app, "200+");
        assert!(draw(&app, 80, 24).contains("200 +"));
    }

    #[test]
    fn test_render_percent_marker() {
        let mut app = tui();
        press(&mut app, "200+10%");
        let line = lcd_line(&app);
        assert!(line.contains("20 %"));
    }

    // ===== Drawer =====

    #[test]
    fn test_drawer_hidden_by_default() {
        let mut app = tui();
        press(&mut app, "1+1=");
        assert!(!draw(&app, 80, 24).contains("History"));
    }

    #[test]
    fn test_drawer_lists_newest_first() {
        let mut app = tui();
        press(&mut app, "1+1=5*5=");
        app.press(Input::ToggleHistory);
        let content = draw(&app, 80, 24);
        assert!(content.contains("History"));
        let newest = content.find("5 * 5 = 25").unwrap();
        let oldest = content.find("1 + 1 = 2").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn test_drawer_empty_message() {
        let mut app = tui();
        app.press(Input::ToggleHistory);
        assert!(draw(&app, 80, 24).contains("No calculations yet"));
    }

    // ===== Pattern band and status =====

    #[test]
    fn test_status_shows_pattern() {
        let mut app = tui();
        let content = draw(&app, 100, 24);
        assert!(content.contains("pattern: bubbles"));
        app.press(Input::AdvancePattern);
        app.press(Input::ToggleAnimation);
        let content = draw(&app, 100, 24);
        assert!(content.contains("pattern: circuit-board (paused)"));
    }

    #[test]
    fn test_pattern_band_scrolls_with_tick() {
        let mut app = tui();
        let before = draw(&app, 80, 24);
        app.on_tick();
        let after = draw(&app, 80, 24);
        assert_ne!(before, after);
    }

    #[test]
    fn test_pattern_glyphs_known_and_fallback() {
        assert!(pattern_glyphs("hexagons").contains(&'⬡'));
        assert_eq!(pattern_glyphs("unknown"), &['·', ' ']);
    }

    #[test]
    fn test_render_small_terminal() {
        let app = tui();
        let _ = draw(&app, 20, 10);
    }
}
