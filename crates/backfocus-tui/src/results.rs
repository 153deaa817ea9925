//! Results panels: main spacer, parfocal and summary.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use backfocus_core::{Report, Verdict};

use crate::styles::ColorTheme;

fn field(name: &str, text: &str, theme: &ColorTheme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name:<18}"), theme.muted_style()),
        Span::styled(text.to_string(), theme.text_style()),
    ])
}

fn verdict(v: &Verdict, theme: &ColorTheme) -> Line<'static> {
    Line::from(Span::styled(v.message.clone(), theme.status_style(v.status)))
}

fn panel<'a>(title: &'a str, theme: &ColorTheme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(title)
}

/// Lines of the main spacer panel.
#[must_use]
pub fn main_lines(report: &Report, theme: &ColorTheme) -> Vec<Line<'static>> {
    vec![
        field(
            "Main spacer",
            &format!("{} ({})", report.main_spacer_mm, report.main_spacer_in),
            theme,
        ),
        field("Total path", &report.total_optical_path, theme),
        verdict(&report.main_verdict, theme),
    ]
}

/// Lines of the parfocal panel.
#[must_use]
pub fn parfocal_lines(report: &Report, theme: &ColorTheme) -> Vec<Line<'static>> {
    vec![
        field(
            &report.model.title,
            &format!(
                "OIBF {} | OGBF {} | BFO {}",
                report.model.inner_backfocus,
                report.model.outer_backfocus,
                report.model.base_focus_offset
            ),
            theme,
        ),
        field("Delta backfocus", &report.delta_backfocus, theme),
        field("Corrector", &report.adjusted, theme),
        field("Parfocal spacer", &report.parfocal_spacer, theme),
        Line::from(Span::styled(
            report.helical_text.clone(),
            theme.status_style(report.helical_status),
        )),
        verdict(&report.parfocal_verdict, theme),
    ]
}

/// Lines of the summary panel.
#[must_use]
pub fn summary_lines(report: &Report, theme: &ColorTheme) -> Vec<Line<'static>> {
    vec![
        field("Backfocus", &report.summary.backfocus, theme),
        field("Main spacer", &report.summary.main_spacer, theme),
        field("Parfocal", &report.summary.parfocal, theme),
    ]
}

/// Render the three result panels stacked vertically.
pub fn render_results(frame: &mut Frame, area: Rect, report: &Report, theme: &ColorTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // main spacer
            Constraint::Min(8),    // parfocal
            Constraint::Length(5), // summary
        ])
        .split(area);

    let sections = [
        (" Main spacer ", main_lines(report, theme)),
        (" Parfocal ", parfocal_lines(report, theme)),
        (" Summary ", summary_lines(report, theme)),
    ];
    for ((title, lines), rect) in sections.into_iter().zip(chunks.iter()) {
        let paragraph = Paragraph::new(lines)
            .block(panel(title, theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, *rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backfocus_core::{AppState, Calculator, ModelRegistry, Status};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn report() -> Report {
        AppState::new()
            .evaluate(&ModelRegistry::builtin(), &Calculator::default())
            .unwrap()
            .report
    }

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn main_panel_text() {
        let lines = plain(&main_lines(&report(), &ColorTheme::dark()));
        assert!(lines[0].contains("194.10 mm (7.642\")"));
        assert!(lines[1].contains("260.10 mm"));
        assert!(lines[2].starts_with("Use 194.10mm main spacer"));
    }

    #[test]
    fn parfocal_panel_text() {
        let lines = plain(&parfocal_lines(&report(), &ColorTheme::dark()));
        assert!(lines[0].contains("OIBF 66 mm | OGBF 90 mm | BFO 24 mm"));
        assert!(lines[2].contains("No correction"));
        assert!(lines[3].contains("24.0mm at IP (imager)"));
    }

    #[test]
    fn verdict_lines_use_status_colours() {
        let theme = ColorTheme::dark();
        let report = report();
        let lines = parfocal_lines(&report, &theme);
        assert_eq!(report.parfocal_verdict.status, Status::Error);
        assert_eq!(lines[5].spans[0].style, theme.status_style(Status::Error));
    }

    #[test]
    fn render_results_does_not_panic() {
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let report = report();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_results(frame, area, &report, &ColorTheme::light());
            })
            .unwrap();
    }
}
