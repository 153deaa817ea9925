//! TUI styles and color themes.

use ratatui::style::{Color, Modifier, Style};

use backfocus_core::Status;

/// Color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTheme {
    pub background: Color,
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub focus_bg: Color,
}

impl ColorTheme {
    /// Theme for dark terminals.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            focus_bg: Color::Rgb(40, 48, 64),
        }
    }

    /// Theme for light terminals.
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::White,
            primary: Color::Blue,
            success: Color::Rgb(0, 120, 0),
            error: Color::Rgb(170, 0, 0),
            warning: Color::Rgb(150, 100, 0),
            text: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            focus_bg: Color::Rgb(210, 225, 245),
        }
    }

    #[must_use]
    pub fn for_dark_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Base style painted over the whole screen.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Highlight for the focused form row.
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.focus_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a verdict of the given status.
    #[must_use]
    pub fn status_style(&self, status: Status) -> Style {
        match status {
            Status::Success => Style::default().fg(self.success),
            Status::Warning => Style::default().fg(self.warning),
            Status::InputRequired => Style::default()
                .fg(self.warning)
                .add_modifier(Modifier::ITALIC),
            Status::Error => Style::default().fg(self.error).add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_differ() {
        assert_ne!(ColorTheme::dark(), ColorTheme::light());
        assert_eq!(ColorTheme::for_dark_mode(true), ColorTheme::dark());
        assert_eq!(ColorTheme::for_dark_mode(false), ColorTheme::light());
    }

    #[test]
    fn status_colors() {
        let theme = ColorTheme::dark();
        assert_eq!(theme.status_style(Status::Success).fg, Some(Color::Green));
        assert_eq!(theme.status_style(Status::Error).fg, Some(Color::Red));
        assert_eq!(theme.status_style(Status::Warning).fg, Some(Color::Yellow));
    }

    #[test]
    fn base_style_uses_background() {
        assert_eq!(ColorTheme::light().base_style().bg, Some(Color::White));
    }
}
