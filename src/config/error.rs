//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading or validating a [`FitterConfig`](super::FitterConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read config: {0}")]
    Io(String),

    /// The YAML could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// A parameter is outside its valid range.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Offending field name
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
