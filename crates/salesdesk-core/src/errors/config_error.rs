//! Configuration loading and validation errors.

use super::error_code::{self, SalesdeskErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl SalesdeskErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
