//! Text rendering for command output

use console::style;
use lcdcalc::core::{format_number, Calculation, DisplayBuffer, Pattern};

/// LCD value as a single line; the placeholder shows as a dimmed `0`
#[must_use]
pub fn display_line(display: &DisplayBuffer) -> String {
    if display.is_placeholder() {
        return style("0").dim().to_string();
    }
    let text = display.signed_text();
    if display.is_percent() {
        format!("{} %", style(text).bold())
    } else {
        style(text).bold().to_string()
    }
}

/// One history row, `a op b = r`
#[must_use]
pub fn history_line(calculation: &Calculation) -> String {
    format!(
        "{} {} {}",
        calculation.expression(),
        style("=").dim(),
        style(format_number(calculation.result())).bold()
    )
}

/// Pattern name followed by its url
#[must_use]
pub fn pattern_line(pattern: &Pattern) -> String {
    format!("{} {}", style(&pattern.name).cyan(), style(&pattern.url).dim())
}
