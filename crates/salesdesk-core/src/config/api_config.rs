//! Backend API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ApiConfig {
    /// REST API root, without trailing slash. Default: `http://localhost:8000`.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds. Default: 30.
    pub timeout_secs: Option<u64>,
    /// Where a 401 sends the user. Default: `/login`.
    pub login_path: Option<String>,
    /// Where an under-privileged user is sent from admin pages. Default: `/dashboard`.
    pub home_path: Option<String>,
}

impl ApiConfig {
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn effective_login_path(&self) -> &str {
        self.login_path.as_deref().unwrap_or(DEFAULT_LOGIN_PATH)
    }

    pub fn effective_home_path(&self) -> &str {
        self.home_path.as_deref().unwrap_or(DEFAULT_HOME_PATH)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.effective_base_url();
        if base.is_empty() {
            return Err(ConfigError::Invalid {
                field: "api.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                field: "api.base_url".to_string(),
                reason: format!("unsupported scheme in '{base}'"),
            });
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
