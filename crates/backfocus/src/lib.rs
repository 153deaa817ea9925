//! Backfocus library: application logic for the spacer calculator.

pub mod app;
pub mod config;
pub mod errors;
