//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use backfocus_core::Status;

use crate::styles::ColorTheme;

/// Render the footer panel with keyboard shortcuts.
///
/// A pending `notice` replaces the hints until the next key press.
pub fn render_footer(frame: &mut Frame, area: Rect, notice: Option<&str>, theme: &ColorTheme) {
    let line = if let Some(notice) = notice {
        Line::from(Span::styled(
            notice.to_string(),
            theme.status_style(Status::Warning),
        ))
    } else {
        let key = |k: &'static str| Span::styled(k, theme.header_style());
        let hint = |h: &'static str| Span::styled(h, theme.muted_style());
        Line::from(vec![
            key("Tab"),
            hint(": next | "),
            key("\u{2190}\u{2192}"),
            hint(": model | "),
            key("Space"),
            hint(": corrector | "),
            key("^N"),
            hint(": add | "),
            key("^D"),
            hint(": remove | "),
            key("^T"),
            hint(": theme | "),
            key("Esc"),
            hint(": quit"),
        ])
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style());
    let paragraph = Paragraph::new(vec![line]).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn footer_row(notice: Option<&str>) -> String {
        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, notice, &ColorTheme::dark());
            })
            .unwrap();

        // Row 1 (after the border) holds the hints
        (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn render_footer_contains_all_shortcuts() {
        let content = footer_row(None);
        assert!(content.contains("quit"));
        assert!(content.contains("add"));
        assert!(content.contains("remove"));
        assert!(content.contains("theme"));
        assert!(content.contains("corrector"));
    }

    #[test]
    fn render_footer_notice_replaces_hints() {
        let content = footer_row(Some("Theme preference not saved"));
        assert!(content.contains("Theme preference not saved"));
        assert!(!content.contains("quit"));
    }

    #[test]
    fn render_footer_small_area() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area, None, &ColorTheme::light());
            })
            .unwrap();
    }
}
