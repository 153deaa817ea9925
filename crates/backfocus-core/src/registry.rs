//! Static registry of ONAG optical models.

use serde::Serialize;

use crate::error::BackfocusError;

/// Optical constants of one ONAG variant, all in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpticalModel {
    /// Identifier used on the command line and in the selector.
    pub id: &'static str,
    /// Human-readable name.
    pub label: &'static str,
    /// Optical backfocus of the imaging (straight-through) path (OIBF).
    pub inner_backfocus: f64,
    /// Optical backfocus of the guiding (reflected) path (OGBF).
    pub outer_backfocus: f64,
    /// Built-in focus offset between imager and guider ports (BFO).
    pub base_focus_offset: f64,
}

const BUILTIN_MODELS: [OpticalModel; 2] = [
    OpticalModel {
        id: "SC",
        label: "ONAG SC (compact)",
        inner_backfocus: 66.0,
        outer_backfocus: 90.0,
        base_focus_offset: 24.0,
    },
    OpticalModel {
        id: "XM",
        label: "ONAG XM (extended)",
        inner_backfocus: 68.0,
        outer_backfocus: 101.0,
        base_focus_offset: 33.0,
    },
];

/// Read-only lookup of the known ONAG models.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    models: Vec<OpticalModel>,
}

impl ModelRegistry {
    /// Registry holding the built-in models.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            models: BUILTIN_MODELS.to_vec(),
        }
    }

    /// Look up a model by id (case-insensitive).
    pub fn get(&self, id: &str) -> Result<&OpticalModel, BackfocusError> {
        let id = id.trim();
        self.models
            .iter()
            .find(|m| m.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| BackfocusError::UnknownModel(id.to_string()))
    }

    /// Model ids in registration order.
    #[must_use]
    pub fn available(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.id).collect()
    }

    /// All registered models.
    #[must_use]
    pub fn models(&self) -> &[OpticalModel] {
        &self.models
    }

    /// The model selected when nothing else is chosen.
    #[must_use]
    pub fn default_model(&self) -> &OpticalModel {
        &self.models[0]
    }

    /// Model following `id` in the selector, wrapping around.
    ///
    /// Unknown ids yield the default model.
    #[must_use]
    pub fn next_after(&self, id: &str) -> &OpticalModel {
        match self.position(id) {
            Some(i) => &self.models[(i + 1) % self.models.len()],
            None => self.default_model(),
        }
    }

    /// Model preceding `id` in the selector, wrapping around.
    #[must_use]
    pub fn previous_before(&self, id: &str) -> &OpticalModel {
        match self.position(id) {
            Some(i) => &self.models[(i + self.models.len() - 1) % self.models.len()],
            None => self.default_model(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.models.iter().position(|m| m.id.eq_ignore_ascii_case(id))
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
