//! # backfocus-tui
//!
//! Interactive calculator form using ratatui with Elm architecture.

pub mod fields;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod results;
pub mod styles;

pub use fields::Field;
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use styles::ColorTheme;
