//! Session storage configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Storage key the bearer token is kept under.
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub token_key: String,
    /// JSON file backing the durable session store. `None` keeps the
    /// session in memory only.
    pub store_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            store_path: None,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "session.token_key".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
