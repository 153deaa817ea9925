//! Display strings for one calculation pass.

use serde::Serialize;

use crate::calculator::{CalculationInputs, CalculationOutputs, Status, Verdict};
use crate::format::{format_constant, format_inches, format_mm};
use crate::options::CalculatorOptions;
use crate::registry::OpticalModel;

/// Constants of the selected model as displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDisplay {
    /// Section title, e.g. `ONAG SC`.
    pub title: String,
    pub inner_backfocus: String,
    pub outer_backfocus: String,
    pub base_focus_offset: String,
}

/// Condensed summary block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub backfocus: String,
    pub main_spacer: String,
    pub parfocal: String,
}

/// Every output field of the form, formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub model_id: String,
    pub main_spacer_mm: String,
    pub main_spacer_in: String,
    pub total_optical_path: String,
    pub main_verdict: Verdict,
    pub model: ModelDisplay,
    pub delta_backfocus: String,
    /// `BFO: ..mm, DBF: ..mm` with the corrector, `No correction` otherwise.
    pub adjusted: String,
    pub parfocal_spacer: String,
    pub helical_status: Status,
    pub helical_text: String,
    pub parfocal_verdict: Verdict,
    pub summary: Summary,
}

impl Report {
    /// Format the outputs of a calculation pass.
    #[must_use]
    pub fn build(
        inputs: &CalculationInputs,
        outputs: &CalculationOutputs,
        model: &OpticalModel,
        opts: &CalculatorOptions,
    ) -> Self {
        let mm = |v: f64| format_mm(v, opts.mm_digits);
        let delta = |v: f64| format_mm(v, opts.delta_digits);

        let adjusted = if outputs.corrector_applied {
            format!(
                "BFO: {}mm, DBF: {}mm",
                format_constant(outputs.adjusted_base_offset),
                delta(outputs.adjusted_delta)
            )
        } else {
            "No correction".to_string()
        };

        let backfocus = inputs.telescope_backfocus;
        let summary = Summary {
            backfocus: if backfocus > 0.0 {
                format!("{} mm", mm(backfocus))
            } else {
                "Set value".to_string()
            },
            main_spacer: if backfocus <= 0.0 {
                "n/a".to_string()
            } else if outputs.main_spacer >= 0.0 {
                format!("{} mm", mm(outputs.main_spacer))
            } else {
                format!("Exceeds by {} mm", mm(outputs.main_spacer.abs()))
            },
            parfocal: outputs.recommendation.clone(),
        };

        Self {
            model_id: model.id.to_string(),
            main_spacer_mm: format!("{} mm", mm(outputs.main_spacer)),
            main_spacer_in: format!("{}\"", format_inches(outputs.main_spacer)),
            total_optical_path: format!("{} mm", mm(outputs.total_optical_path)),
            main_verdict: outputs.main_verdict.clone(),
            model: ModelDisplay {
                title: format!("ONAG {}", model.id),
                inner_backfocus: format!("{} mm", format_constant(model.inner_backfocus)),
                outer_backfocus: format!("{} mm", format_constant(model.outer_backfocus)),
                base_focus_offset: format!("{} mm", format_constant(model.base_focus_offset)),
            },
            delta_backfocus: format!("{} mm", delta(outputs.delta_backfocus)),
            adjusted,
            parfocal_spacer: outputs.recommendation.clone(),
            helical_status: outputs.helical_range.status(),
            helical_text: outputs.helical_text.clone(),
            parfocal_verdict: outputs.parfocal_verdict.clone(),
            summary,
        }
    }
}
