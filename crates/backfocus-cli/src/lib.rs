//! # backfocus-cli
//!
//! Text and JSON report output, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::{JsonPresenter, ReportPresenter, TextPresenter};
