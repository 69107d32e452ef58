//! Feature-gate presentation settings.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_UPGRADE_URL: &str = "/settings/plan";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatingConfig {
    /// Target of the blocked card's upgrade call to action.
    pub upgrade_url: String,
    /// Opacity applied to gated content while entitlements load.
    pub loading_opacity: f32,
    /// Opacity applied to blurred previews.
    pub blur_opacity: f32,
}

impl Default for GatingConfig {
    fn default() -> Self {
        Self {
            upgrade_url: DEFAULT_UPGRADE_URL.to_string(),
            loading_opacity: 0.5,
            blur_opacity: 0.4,
        }
    }
}

impl GatingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("gating.loading_opacity", self.loading_opacity),
            ("gating.blur_opacity", self.blur_opacity),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Invalid {
                    field: field.to_string(),
                    reason: format!("{value} is outside (0, 1]"),
                });
            }
        }
        Ok(())
    }
}
