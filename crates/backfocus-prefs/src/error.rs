use thiserror::Error;

/// Error type for preference persistence.
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no location available for the preference file")]
    NoLocation,
}
