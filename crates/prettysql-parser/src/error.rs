use thiserror::Error;

/// Errors raised while loading or validating a dialect configuration.
///
/// Tokenizing and parsing never fail; configuration is the only fallible
/// surface of the crate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse dialect configuration:\n  {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid dialect configuration field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
