//! Domain constants for spacer and parfocal evaluation.
//!
//! These come from the ONAG manufacturer's documentation and are kept as
//! named values; `CalculatorOptions` carries them into the calculator.

/// Default telescope backfocus (mm) shown when the form opens.
pub const DEFAULT_BACKFOCUS_MM: f64 = 260.096;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Backfocus consumed by the astigmatism corrector accessory (mm).
pub const CORRECTOR_OFFSET_MM: f64 = 3.0;

/// Mismatch below which the cameras count as parfocal (mm).
pub const PARFOCAL_TOLERANCE_MM: f64 = 0.5;

/// Fine-focus range of the helical focuser (mm, either direction).
pub const HELICAL_FINE_RANGE_MM: f64 = 4.0;

/// Total mechanical travel of the helical focuser (mm).
pub const HELICAL_TRAVEL_MM: f64 = 9.0;

/// Main spacers shorter than this are flagged as very short (mm).
pub const SHORT_SPACER_MM: f64 = 5.0;

/// Decimal digits used when displaying millimetre values.
pub const MM_DIGITS: usize = 2;

/// Decimal digits used for delta-backfocus and mismatch values.
pub const DELTA_DIGITS: usize = 1;

/// Decimal digits used for the initial backfocus field value.
pub const DEFAULT_BACKFOCUS_DIGITS: usize = 3;

/// Decimal digits used for inch conversions.
pub const INCH_DIGITS: usize = 3;

/// Placeholder rendered for non-finite values.
pub const PLACEHOLDER: &str = "-";
