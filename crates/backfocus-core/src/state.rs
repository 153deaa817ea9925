//! Explicit application state shared by the form and the command line.
//!
//! The state holds raw field text; numbers are parsed on every pass so an
//! invalid entry simply counts as 0 until it is corrected.

use crate::calculator::{CalculationInputs, CalculationOutputs, Calculator};
use crate::components::ComponentList;
use crate::constants::{DEFAULT_BACKFOCUS_DIGITS, DEFAULT_BACKFOCUS_MM};
use crate::error::BackfocusError;
use crate::format::{format_mm, number_or_zero};
use crate::registry::ModelRegistry;
use crate::report::Report;

/// Current values of every input field.
#[derive(Debug, Clone)]
pub struct AppState {
    pub telescope_backfocus: String,
    pub model_id: String,
    pub components: ComponentList,
    guider_inner: String,
    imager_reading: String,
    pub guider_reading: String,
    pub use_corrector: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            telescope_backfocus: format_mm(DEFAULT_BACKFOCUS_MM, DEFAULT_BACKFOCUS_DIGITS),
            model_id: ModelRegistry::builtin().default_model().id.to_string(),
            components: ComponentList::new(),
            guider_inner: String::new(),
            imager_reading: String::new(),
            guider_reading: String::new(),
            use_corrector: false,
        }
    }
}

/// Raw outputs and their formatted report.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub outputs: CalculationOutputs,
    pub report: Report,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra inner backfocus reading in the spacer section.
    #[must_use]
    pub fn guider_inner(&self) -> &str {
        &self.guider_inner
    }

    /// Imager reading in the parfocal section.
    #[must_use]
    pub fn imager_reading(&self) -> &str {
        &self.imager_reading
    }

    /// Set the inner reading; the imager reading mirrors it.
    pub fn set_guider_inner(&mut self, text: impl Into<String>) {
        self.guider_inner = text.into();
        self.imager_reading.clone_from(&self.guider_inner);
    }

    /// Set the imager reading; the inner reading mirrors it.
    pub fn set_imager_reading(&mut self, text: impl Into<String>) {
        self.imager_reading = text.into();
        self.guider_inner.clone_from(&self.imager_reading);
    }

    /// Switch the selected model, rejecting unknown ids.
    pub fn select_model(&mut self, registry: &ModelRegistry, id: &str) -> Result<(), BackfocusError> {
        let model = registry.get(id)?;
        self.model_id = model.id.to_string();
        Ok(())
    }

    /// Numeric inputs for one pass; invalid fields read as 0.
    #[must_use]
    pub fn inputs(&self) -> CalculationInputs {
        CalculationInputs {
            telescope_backfocus: number_or_zero(&self.telescope_backfocus),
            component_total: self.components.total_length(),
            guider_inner_reading: number_or_zero(&self.guider_inner),
            imager_reading: number_or_zero(&self.imager_reading),
            guider_reading: number_or_zero(&self.guider_reading),
            use_corrector: self.use_corrector,
        }
    }

    /// Run the calculator over the current state.
    pub fn evaluate(
        &self,
        registry: &ModelRegistry,
        calculator: &Calculator,
    ) -> Result<Evaluation, BackfocusError> {
        let model = registry.get(&self.model_id)?;
        let inputs = self.inputs();
        let outputs = calculator.compute(&inputs, model);
        let report = Report::build(&inputs, &outputs, model, calculator.options());
        Ok(Evaluation { outputs, report })
    }
}
