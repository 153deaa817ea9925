//! Styled fragments for terminal output.

use console::{style, Emoji, StyledObject};

use backfocus_core::{ComponentList, Status};

static OK: Emoji<'_, '_> = Emoji("✅ ", "[ok] ");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
static FAIL: Emoji<'_, '_> = Emoji("❌ ", "[x] ");

/// Icon prefix for a status.
#[must_use]
pub fn status_icon(status: Status) -> String {
    match status {
        Status::Success => OK.to_string(),
        Status::Warning | Status::InputRequired => WARN.to_string(),
        Status::Error => FAIL.to_string(),
    }
}

/// Colour a message by its status.
#[must_use]
pub fn styled_message(status: Status, message: &str) -> StyledObject<String> {
    let text = format!("{}{message}", status_icon(status));
    match status {
        Status::Success => style(text).green(),
        Status::Warning => style(text).yellow(),
        Status::InputRequired => style(text).yellow().dim(),
        Status::Error => style(text).red().bold(),
    }
}

/// Section heading.
#[must_use]
pub fn heading(text: &str) -> StyledObject<&str> {
    style(text).cyan().bold()
}

/// One line per component, `  name ....... 20 mm`.
#[must_use]
pub fn component_lines(components: &ComponentList) -> Vec<String> {
    components
        .iter()
        .map(|c| {
            let name = if c.name.trim().is_empty() {
                "(unnamed)"
            } else {
                c.name.as_str()
            };
            format!("  {name:<20} {} mm", c.length.trim())
        })
        .collect()
}
