//! Error handling and exit codes.

use backfocus_core::BackfocusError;
use backfocus_prefs::PreferenceError;

/// Process exit codes.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: u8 = 1;
    /// Invalid configuration or input (unknown model, malformed component).
    pub const ERROR_CONFIG: u8 = 2;
    /// The preference file could not be read or written.
    pub const ERROR_PREFERENCES: u8 = 3;
}

/// Map a calculator error to its exit code.
pub fn handle_error(err: &BackfocusError) -> u8 {
    match err {
        BackfocusError::UnknownModel(_) | BackfocusError::InvalidComponent(_) => {
            exit_codes::ERROR_CONFIG
        }
        BackfocusError::ComponentNotFound(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<BackfocusError>() {
        return handle_error(err);
    }
    if err.downcast_ref::<PreferenceError>().is_some() {
        return exit_codes::ERROR_PREFERENCES;
    }
    exit_codes::ERROR_GENERIC
}
