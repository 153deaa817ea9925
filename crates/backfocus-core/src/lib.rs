//! # backfocus-core
//!
//! Core library for the ONAG backfocus calculator: the model registry, the
//! component list, and the spacer/parfocal calculator with its report
//! formatting.

pub mod calculator;
pub mod components;
pub mod constants;
pub mod error;
pub mod format;
pub mod options;
pub mod registry;
pub mod report;
pub mod state;

// Re-exports
pub use calculator::{
    calculate, CalculationInputs, CalculationOutputs, Calculator, HelicalRange, Status, Verdict,
};
pub use components::{parse_component_spec, Component, ComponentField, ComponentId, ComponentList};
pub use error::BackfocusError;
pub use format::{format_inches, format_mm, parse_number};
pub use options::CalculatorOptions;
pub use registry::{ModelRegistry, OpticalModel};
pub use report::Report;
pub use state::{AppState, Evaluation};
