//! # backfocus-prefs
//!
//! Persisted dark-theme preference with a fallback to the system colour
//! scheme while the user has not chosen explicitly.

pub mod error;
pub mod scheme;
pub mod store;
pub mod theme;

pub use error::PreferenceError;
pub use scheme::{EnvScheme, FixedScheme, SchemeSource};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use theme::{ThemePreference, DARK_MODE_KEY};
