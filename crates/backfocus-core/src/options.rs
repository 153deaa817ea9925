//! Calculator thresholds and display precision.

use crate::constants::{
    CORRECTOR_OFFSET_MM, DELTA_DIGITS, HELICAL_FINE_RANGE_MM, HELICAL_TRAVEL_MM, MM_DIGITS,
    PARFOCAL_TOLERANCE_MM, SHORT_SPACER_MM,
};

/// Options for spacer and parfocal evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorOptions {
    /// Backfocus taken up by the astigmatism corrector (mm).
    pub corrector_offset: f64,
    /// Mismatch below which no parfocal spacer is needed (mm).
    pub parfocal_tolerance: f64,
    /// Helical focuser fine-focus range (mm).
    pub helical_fine_range: f64,
    /// Helical focuser total travel (mm).
    pub helical_travel: f64,
    /// Main spacers below this length are flagged (mm).
    pub short_spacer: f64,
    /// Decimals for millimetre values.
    pub mm_digits: usize,
    /// Decimals for delta and mismatch values.
    pub delta_digits: usize,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            corrector_offset: CORRECTOR_OFFSET_MM,
            parfocal_tolerance: PARFOCAL_TOLERANCE_MM,
            helical_fine_range: HELICAL_FINE_RANGE_MM,
            helical_travel: HELICAL_TRAVEL_MM,
            short_spacer: SHORT_SPACER_MM,
            mm_digits: MM_DIGITS,
            delta_digits: DELTA_DIGITS,
        }
    }
}

impl CalculatorOptions {
    /// Normalize options, restoring defaults for thresholds that are not
    /// finite and positive, and widening the travel to at least the fine
    /// range.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        let defaults = Self::default();
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !self.corrector_offset.is_finite() || self.corrector_offset < 0.0 {
            self.corrector_offset = defaults.corrector_offset;
        }
        if !valid(self.parfocal_tolerance) {
            self.parfocal_tolerance = defaults.parfocal_tolerance;
        }
        if !valid(self.helical_fine_range) {
            self.helical_fine_range = defaults.helical_fine_range;
        }
        if !valid(self.helical_travel) {
            self.helical_travel = defaults.helical_travel;
        }
        if self.helical_travel < self.helical_fine_range {
            self.helical_travel = self.helical_fine_range;
        }
        if !valid(self.short_spacer) {
            self.short_spacer = defaults.short_spacer;
        }
        self
    }
}
