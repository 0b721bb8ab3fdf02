use thiserror::Error;

/// Top-level error type for the Maester dataset service.
#[derive(Error, Debug)]
pub enum MaesterError {
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for MaesterError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
