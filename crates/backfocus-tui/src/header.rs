//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    model_label: &str,
    dark: bool,
    theme: &ColorTheme,
) {
    let mode = if dark { "dark" } else { "light" };
    let text = vec![Line::from(vec![
        Span::styled("Backfocus Calculator", theme.header_style()),
        Span::styled(
            format!(" | {model_label} | Theme: {mode}"),
            theme.text_style(),
        ),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style());

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
