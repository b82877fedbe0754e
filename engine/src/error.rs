//! Controller error types.
//!
//! Only construction and configuration can fail. Per-step problems (bad
//! contact normals, non-finite velocities) are logged and skipped instead of
//! surfacing as errors, so the step functions stay infallible.

use thiserror::Error;

/// Errors raised while loading configuration or building a controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// A required collaborator (rigid body, view rig) was not bound.
    #[error("missing dependency: {0} is not bound")]
    MissingDependency(&'static str),

    /// A configuration value is out of its legal range.
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON for [`crate::config::ControllerConfig`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ControllerError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ControllerError>;
