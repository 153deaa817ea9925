use thiserror::Error;

use crate::components::ComponentId;

/// Error type for structural failures in the calculator core.
///
/// Numeric input problems are never errors: they are coerced to zero and
/// surface as verdicts instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BackfocusError {
    #[error("unknown ONAG model: {0}")]
    UnknownModel(String),

    #[error("component not found: {0}")]
    ComponentNotFound(ComponentId),

    #[error("invalid component specification: {0}")]
    InvalidComponent(String),
}
