//! CLI report presenters.

use std::io::{self, Write};

use serde_json::json;

use backfocus_core::{AppState, ModelRegistry, Report};

use crate::output::{component_lines, heading, status_icon, styled_message};

/// Trait for presenting a calculation report to the user.
pub trait ReportPresenter {
    /// Present the full report for the given state.
    fn present_report(
        &self,
        state: &AppState,
        report: &Report,
        out: &mut dyn Write,
    ) -> io::Result<()>;

    /// Present the list of known models.
    fn present_models(&self, registry: &ModelRegistry, out: &mut dyn Write) -> io::Result<()>;

    /// Present the theme preference.
    fn present_theme(&self, dark: bool, explicit: bool, out: &mut dyn Write) -> io::Result<()>;
}

/// Human-readable presenter.
pub struct TextPresenter {
    quiet: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ReportPresenter for TextPresenter {
    fn present_report(
        &self,
        state: &AppState,
        report: &Report,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        if self.quiet {
            writeln!(out, "Backfocus: {}", report.summary.backfocus)?;
            writeln!(out, "Main spacer: {}", report.summary.main_spacer)?;
            writeln!(out, "Parfocal spacer: {}", report.summary.parfocal)?;
            return Ok(());
        }

        writeln!(out, "{}", heading(&report.model.title))?;
        writeln!(out, "  Telescope backfocus: {}", report.summary.backfocus)?;
        if !state.components.is_empty() {
            writeln!(out, "  Components:")?;
            for line in component_lines(&state.components) {
                writeln!(out, "  {line}")?;
            }
        }
        writeln!(out, "  ONAG optical:        {}", report.model.inner_backfocus)?;
        writeln!(
            out,
            "  Main spacer:         {} ({})",
            report.main_spacer_mm, report.main_spacer_in
        )?;
        writeln!(out, "  Total optical path:  {}", report.total_optical_path)?;
        writeln!(
            out,
            "  {}",
            styled_message(report.main_verdict.status, &report.main_verdict.message)
        )?;
        writeln!(out)?;

        writeln!(out, "{}", heading("Parfocal"))?;
        writeln!(
            out,
            "  OIBF / OGBF / BFO:   {} / {} / {}",
            report.model.inner_backfocus, report.model.outer_backfocus, report.model.base_focus_offset
        )?;
        writeln!(out, "  Delta backfocus:     {}", report.delta_backfocus)?;
        writeln!(out, "  Corrector:           {}", report.adjusted)?;
        writeln!(out, "  Parfocal spacer:     {}", report.parfocal_spacer)?;
        writeln!(
            out,
            "  Helical focuser:     {}{}",
            status_icon(report.helical_status),
            report.helical_text
        )?;
        writeln!(
            out,
            "  {}",
            styled_message(
                report.parfocal_verdict.status,
                &report.parfocal_verdict.message
            )
        )?;
        Ok(())
    }

    fn present_models(&self, registry: &ModelRegistry, out: &mut dyn Write) -> io::Result<()> {
        if !self.quiet {
            writeln!(out, "{:<4} {:<22} {:>6} {:>6} {:>6}", "ID", "Name", "OIBF", "OGBF", "BFO")?;
            writeln!(out, "{:-<48}", "")?;
        }
        for model in registry.models() {
            writeln!(
                out,
                "{:<4} {:<22} {:>6} {:>6} {:>6}",
                model.id,
                model.label,
                model.inner_backfocus,
                model.outer_backfocus,
                model.base_focus_offset
            )?;
        }
        Ok(())
    }

    fn present_theme(&self, dark: bool, explicit: bool, out: &mut dyn Write) -> io::Result<()> {
        let theme = if dark { "dark" } else { "light" };
        let source = if explicit { "saved preference" } else { "system" };
        writeln!(out, "Theme: {theme} ({source})")
    }
}

/// Machine-readable presenter.
pub struct JsonPresenter;

impl ReportPresenter for JsonPresenter {
    fn present_report(
        &self,
        state: &AppState,
        report: &Report,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        let components: Vec<_> = state
            .components
            .iter()
            .map(|c| json!({ "name": c.name, "length_mm": c.length_mm() }))
            .collect();
        let value = json!({
            "inputs": state.inputs(),
            "components": components,
            "report": report,
        });
        let text = serde_json::to_string_pretty(&value).map_err(io::Error::other)?;
        writeln!(out, "{text}")
    }

    fn present_models(&self, registry: &ModelRegistry, out: &mut dyn Write) -> io::Result<()> {
        let text = serde_json::to_string_pretty(registry.models()).map_err(io::Error::other)?;
        writeln!(out, "{text}")
    }

    fn present_theme(&self, dark: bool, explicit: bool, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", json!({ "dark": dark, "explicit": explicit }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backfocus_core::Calculator;

    fn render(presenter: &dyn ReportPresenter, state: &AppState) -> String {
        let report = state
            .evaluate(&ModelRegistry::builtin(), &Calculator::default())
            .unwrap()
            .report;
        let mut buf = Vec::new();
        presenter.present_report(state, &report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_report_default() {
        let text = render(&TextPresenter::new(false), &AppState::new());
        assert!(text.contains("ONAG SC"));
        assert!(text.contains("194.10 mm (7.642\")"));
        assert!(text.contains("Use 194.10mm main spacer"));
        assert!(text.contains("No correction"));
    }

    #[test]
    fn text_report_lists_components() {
        let mut state = AppState::new();
        state.components.add("Filter wheel", 20.0);
        let text = render(&TextPresenter::new(false), &state);
        assert!(text.contains("Filter wheel"));
        assert!(text.contains("174.10 mm"));
    }

    #[test]
    fn quiet_report_is_summary_only() {
        let text = render(&TextPresenter::new(true), &AppState::new());
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("Main spacer: 194.10 mm"));
    }

    #[test]
    fn json_report_parses() {
        let text = render(&JsonPresenter, &AppState::new());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["report"]["model_id"], "SC");
        assert_eq!(value["report"]["main_verdict"]["status"], "success");
        assert!(value["inputs"]["telescope_backfocus"].as_f64().is_some());
    }

    #[test]
    fn models_table() {
        let mut buf = Vec::new();
        TextPresenter::new(false)
            .present_models(&ModelRegistry::builtin(), &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("SC"));
        assert!(text.contains("XM"));
    }

    #[test]
    fn models_json() {
        let mut buf = Vec::new();
        JsonPresenter
            .present_models(&ModelRegistry::builtin(), &mut buf)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[1]["id"], "XM");
    }

    #[test]
    fn theme_line() {
        let mut buf = Vec::new();
        TextPresenter::new(false)
            .present_theme(true, false, &mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Theme: dark (system)\n");
    }
}
