pub mod api_config;
pub mod gating_config;
pub mod logging_config;
pub mod session_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use api_config::ApiConfig;
pub use gating_config::GatingConfig;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
///
/// Loaded from `salesdesk.toml`; every section and field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SalesdeskConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub gating: GatingConfig,
    pub logging: LoggingConfig,
}

impl SalesdeskConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate config from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Reject values the client cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.session.validate()?;
        self.gating.validate()?;
        Ok(())
    }
}
