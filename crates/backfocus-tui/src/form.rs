//! Input form panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use backfocus_core::{AppState, ModelRegistry};

use crate::fields::Field;
use crate::styles::ColorTheme;

const LABEL_WIDTH: usize = 22;

/// Shown in place of the component rows while the list is empty.
pub const PLACEHOLDER_ROW: &str = "No extra components (Ctrl+N to add)";

fn label(text: &str, focused: bool, theme: &ColorTheme) -> Span<'static> {
    let style = if focused {
        theme.header_style()
    } else {
        theme.text_style()
    };
    Span::styled(format!("{text:<LABEL_WIDTH$}"), style)
}

fn value(text: &str, focused: bool, theme: &ColorTheme) -> Span<'static> {
    if focused {
        Span::styled(format!("[{text}_]"), theme.focus_style())
    } else {
        Span::styled(format!("[{text}]"), theme.text_style())
    }
}

fn unit(theme: &ColorTheme) -> Span<'static> {
    Span::styled(" mm", theme.muted_style())
}

fn section(title: &str, theme: &ColorTheme) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), theme.header_style()))
}

fn numeric_row(name: &str, text: &str, focused: bool, theme: &ColorTheme) -> Line<'static> {
    Line::from(vec![
        label(name, focused, theme),
        value(text, focused, theme),
        unit(theme),
    ])
}

/// Build the form lines; also returns the index of the focused line.
#[must_use]
pub fn form_lines(
    state: &AppState,
    registry: &ModelRegistry,
    focus: Field,
    theme: &ColorTheme,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    let mut focus_line = 0;

    lines.push(section("Main spacer", theme));

    let focused = focus == Field::TelescopeBackfocus;
    if focused {
        focus_line = lines.len();
    }
    lines.push(numeric_row(
        "Telescope backfocus",
        &state.telescope_backfocus,
        focused,
        theme,
    ));

    let focused = focus == Field::Model;
    if focused {
        focus_line = lines.len();
    }
    let model_label = registry
        .get(&state.model_id)
        .map_or(state.model_id.as_str(), |m| m.label);
    let selector = if focused {
        Span::styled(format!("< {model_label} >"), theme.focus_style())
    } else {
        Span::styled(format!("< {model_label} >"), theme.text_style())
    };
    lines.push(Line::from(vec![label("ONAG model", focused, theme), selector]));

    lines.push(Line::from(Span::styled("Components", theme.text_style())));
    if state.components.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {PLACEHOLDER_ROW}"),
            theme.muted_style(),
        )));
    }
    for (row, component) in state.components.iter().enumerate() {
        let name_focused = focus == Field::ComponentName(row);
        let length_focused = focus == Field::ComponentLength(row);
        if name_focused || length_focused {
            focus_line = lines.len();
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>2}. ", row + 1), theme.muted_style()),
            value(&component.name, name_focused, theme),
            Span::raw("  "),
            value(&component.length, length_focused, theme),
            unit(theme),
        ]));
    }

    let focused = focus == Field::GuiderInner;
    if focused {
        focus_line = lines.len();
    }
    lines.push(numeric_row(
        "ONAG inner reading",
        state.guider_inner(),
        focused,
        theme,
    ));

    lines.push(Line::default());
    lines.push(section("Parfocal", theme));

    let focused = focus == Field::ImagerReading;
    if focused {
        focus_line = lines.len();
    }
    lines.push(numeric_row(
        "Imager backfocus",
        state.imager_reading(),
        focused,
        theme,
    ));

    let focused = focus == Field::GuiderReading;
    if focused {
        focus_line = lines.len();
    }
    lines.push(numeric_row(
        "Guider backfocus",
        &state.guider_reading,
        focused,
        theme,
    ));

    let focused = focus == Field::Corrector;
    if focused {
        focus_line = lines.len();
    }
    let mark = if state.use_corrector { "[x]" } else { "[ ]" };
    let style = if focused {
        theme.focus_style()
    } else {
        theme.text_style()
    };
    lines.push(Line::from(vec![
        label("Reducer/corrector", focused, theme),
        Span::styled(format!("{mark} BFO -3 mm"), style),
    ]));

    (lines, focus_line)
}

/// Render the form, scrolled so the focused line stays visible.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    registry: &ModelRegistry,
    focus: Field,
    theme: &ColorTheme,
) {
    let (lines, focus_line) = form_lines(state, registry, focus, theme);
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let offset = focus_line.saturating_sub(visible - 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Inputs ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}
