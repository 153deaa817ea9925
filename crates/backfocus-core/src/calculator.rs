//! Spacer and parfocal calculator.
//!
//! Everything here is a pure function of [`CalculationInputs`] and the
//! selected [`OpticalModel`]. The form recomputes from scratch on every
//! input change; nothing is cached between passes.

use serde::{Deserialize, Serialize};

use crate::format::{format_constant, format_inches, format_mm};
use crate::options::CalculatorOptions;
use crate::registry::OpticalModel;

/// Outcome class of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The telescope backfocus is missing or not positive.
    InputRequired,
    Success,
    Warning,
    Error,
}

impl Status {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::InputRequired => "input required",
            Status::Success => "success",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }
}

/// A status with the message shown next to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub status: Status,
    pub message: String,
}

impl Verdict {
    fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Where the residual mismatch falls relative to the helical focuser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HelicalRange {
    /// Absorbed by fine focus.
    FineFocus,
    /// Within mechanical travel, but a spacer is advisable.
    Travel,
    /// Beyond the focuser; a spacer is mandatory.
    OutOfRange,
}

impl HelicalRange {
    /// Classify an absolute mismatch.
    #[must_use]
    pub fn classify(abs_mismatch: f64, opts: &CalculatorOptions) -> Self {
        if abs_mismatch <= opts.helical_fine_range {
            HelicalRange::FineFocus
        } else if abs_mismatch <= opts.helical_travel {
            HelicalRange::Travel
        } else {
            HelicalRange::OutOfRange
        }
    }

    #[must_use]
    pub fn status(self) -> Status {
        match self {
            HelicalRange::FineFocus => Status::Success,
            HelicalRange::Travel => Status::Warning,
            HelicalRange::OutOfRange => Status::Error,
        }
    }

    #[must_use]
    pub fn describe(self, opts: &CalculatorOptions) -> String {
        match self {
            HelicalRange::FineFocus => format!(
                "Within ±{}mm fine focus range",
                format_constant(opts.helical_fine_range)
            ),
            HelicalRange::Travel => format!(
                "Within {}mm travel but spacer recommended",
                format_constant(opts.helical_travel)
            ),
            HelicalRange::OutOfRange => "Outside focuser range - spacer required".to_string(),
        }
    }
}

/// Values read from the form for one calculation pass, in millimetres.
///
/// Missing or invalid fields are already coerced to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalculationInputs {
    pub telescope_backfocus: f64,
    /// Sum of the extra component lengths.
    pub component_total: f64,
    /// Extra inner backfocus reading on the imaging side of the ONAG.
    pub guider_inner_reading: f64,
    /// Imager backfocus-to-focal-plane reading (parfocal section).
    pub imager_reading: f64,
    /// Guider backfocus-to-focal-plane reading (parfocal section).
    pub guider_reading: f64,
    pub use_corrector: bool,
}

/// Everything derived from one calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationOutputs {
    pub main_spacer: f64,
    pub total_optical_path: f64,
    pub main_verdict: Verdict,
    pub delta_backfocus: f64,
    pub corrector_applied: bool,
    pub adjusted_base_offset: f64,
    pub adjusted_delta: f64,
    pub mismatch: f64,
    /// Where to put a parfocal spacer, if any.
    pub recommendation: String,
    pub helical_range: HelicalRange,
    pub helical_text: String,
    pub parfocal_verdict: Verdict,
}

/// Stateless calculator parameterised by its thresholds.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    opts: CalculatorOptions,
}

impl Calculator {
    #[must_use]
    pub fn new(opts: CalculatorOptions) -> Self {
        Self {
            opts: opts.normalize(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &CalculatorOptions {
        &self.opts
    }

    /// Main spacer length: what is left of the telescope backfocus after
    /// the components, the ONAG itself and the extra inner reading.
    #[must_use]
    pub fn main_spacer(inputs: &CalculationInputs, model: &OpticalModel) -> f64 {
        inputs.telescope_backfocus
            - inputs.component_total
            - model.inner_backfocus
            - inputs.guider_inner_reading
    }

    /// Run one full calculation pass.
    #[must_use]
    pub fn compute(&self, inputs: &CalculationInputs, model: &OpticalModel) -> CalculationOutputs {
        let opts = &self.opts;
        let main_spacer = Self::main_spacer(inputs, model);
        let total_optical_path = inputs.component_total
            + model.inner_backfocus
            + inputs.guider_inner_reading
            + main_spacer.max(0.0);
        let main_verdict = self.main_verdict(inputs.telescope_backfocus, main_spacer);

        let delta_backfocus = inputs.imager_reading - inputs.guider_reading;
        let (adjusted_base_offset, adjusted_delta) = if inputs.use_corrector {
            (
                model.base_focus_offset - opts.corrector_offset,
                delta_backfocus + opts.corrector_offset,
            )
        } else {
            (model.base_focus_offset, delta_backfocus)
        };
        let mismatch = adjusted_delta - adjusted_base_offset;
        let recommendation = self.recommendation(mismatch);
        let helical_range = HelicalRange::classify(mismatch.abs(), opts);
        let parfocal_verdict =
            Self::parfocal_verdict(inputs.telescope_backfocus, helical_range, &recommendation);

        tracing::debug!(
            model = model.id,
            main_spacer,
            total_optical_path,
            mismatch,
            corrector = inputs.use_corrector,
            "recomputed"
        );

        CalculationOutputs {
            main_spacer,
            total_optical_path,
            main_verdict,
            delta_backfocus,
            corrector_applied: inputs.use_corrector,
            adjusted_base_offset,
            adjusted_delta,
            mismatch,
            recommendation,
            helical_text: helical_range.describe(opts),
            helical_range,
            parfocal_verdict,
        }
    }

    fn main_verdict(&self, telescope_backfocus: f64, main_spacer: f64) -> Verdict {
        let digits = self.opts.mm_digits;
        if telescope_backfocus <= 0.0 {
            Verdict::new(
                Status::InputRequired,
                "Enter a positive telescope backfocus value to compute spacers.",
            )
        } else if main_spacer < 0.0 {
            Verdict::new(
                Status::Error,
                format!(
                    "Configuration exceeds backfocus by {}mm",
                    format_mm(main_spacer.abs(), digits)
                ),
            )
        } else if main_spacer < self.opts.short_spacer {
            Verdict::new(
                Status::Warning,
                format!("Very short spacer ({}mm)", format_mm(main_spacer, digits)),
            )
        } else {
            Verdict::new(
                Status::Success,
                format!(
                    "Use {}mm main spacer ({}\")",
                    format_mm(main_spacer, digits),
                    format_inches(main_spacer)
                ),
            )
        }
    }

    /// Parfocal spacer advice for a signed mismatch.
    ///
    /// Positive mismatch means the guider reaches focus too early and needs
    /// the spacer; negative means the imager does.
    #[must_use]
    pub fn recommendation(&self, mismatch: f64) -> String {
        let digits = self.opts.delta_digits;
        if mismatch.abs() < self.opts.parfocal_tolerance {
            "None needed (parfocal)".to_string()
        } else if mismatch > 0.0 {
            format!("+{}mm at GP (guider)", format_mm(mismatch, digits))
        } else {
            format!("{}mm at IP (imager)", format_mm(mismatch.abs(), digits))
        }
    }

    fn parfocal_verdict(
        telescope_backfocus: f64,
        range: HelicalRange,
        recommendation: &str,
    ) -> Verdict {
        if telescope_backfocus <= 0.0 {
            return Verdict::new(
                Status::InputRequired,
                "Enter a telescope backfocus value to evaluate parfocal spacing.",
            );
        }
        match range {
            HelicalRange::FineFocus => Verdict::new(
                Status::Success,
                "Cameras are parfocal within helical focuser range",
            ),
            HelicalRange::Travel => {
                Verdict::new(Status::Warning, format!("Marginal: {recommendation}"))
            }
            HelicalRange::OutOfRange => {
                Verdict::new(Status::Error, format!("Spacer required: {recommendation}"))
            }
        }
    }
}

/// Compute with the default thresholds.
///
/// # Example
/// ```
/// use backfocus_core::{calculate, CalculationInputs, ModelRegistry, Status};
///
/// let registry = ModelRegistry::builtin();
/// let inputs = CalculationInputs {
///     telescope_backfocus: 260.096,
///     ..CalculationInputs::default()
/// };
/// let out = calculate(&inputs, registry.get("SC").unwrap());
/// assert_eq!(out.main_verdict.status, Status::Success);
/// ```
#[must_use]
pub fn calculate(inputs: &CalculationInputs, model: &OpticalModel) -> CalculationOutputs {
    Calculator::default().compute(inputs, model)
}
