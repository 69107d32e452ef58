//! `GET/PATCH /settings/features`.

use tracing::{debug, warn};

use salesdesk_core::errors::ApiError;
use salesdesk_core::types::settings::OverridePatch;
use salesdesk_core::{FeatureMap, FeatureSettings};

use crate::api::ApiClient;
use crate::transport::HttpTransport;

pub const FEATURES_PATH: &str = "/settings/features";

pub struct SettingsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> SettingsApi<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Plan map, override map, backend final map, plan name and edit flag.
    pub fn fetch_features(&self) -> Result<FeatureSettings, ApiError> {
        let settings: FeatureSettings = self.client.get(FEATURES_PATH)?;
        debug!(
            plan = settings.plan_name.as_deref().unwrap_or("unknown"),
            plan_features = settings.plan_features.len(),
            overrides = settings.team_features.len(),
            can_edit = settings.can_edit,
            "feature settings loaded"
        );
        Ok(settings)
    }

    /// Persist the override map and return the server's resulting settings.
    ///
    /// Refused locally when the signed-in role cannot edit overrides. When
    /// the PATCH response is only an acknowledgement, the settings are
    /// re-read.
    pub fn save_overrides(&self, overrides: &FeatureMap) -> Result<FeatureSettings, ApiError> {
        let role = self.client.session().role();
        if !role.can_edit_overrides() {
            warn!(role = %role, "override save refused for read-only role");
            return Err(ApiError::Forbidden {
                detail: Some("Only managers can change feature settings".to_string()),
            });
        }

        let body = OverridePatch {
            team_features: overrides.clone(),
        };
        let response: serde_json::Value = self.client.patch(FEATURES_PATH, &body)?;
        if response.get("plan_features").is_some() {
            return serde_json::from_value(response).map_err(|e| ApiError::Decode {
                message: format!("PATCH {FEATURES_PATH}: {e}"),
            });
        }
        self.fetch_features()
    }
}
