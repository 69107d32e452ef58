//! Wire format of `GET/PATCH /settings/features`.

use serde::{Deserialize, Serialize};

use super::feature_key::FeatureMap;

/// Feature settings as returned by the backend.
///
/// `features` is the backend's own merge and is kept for diagnostics only;
/// the client always recomputes the final map from `plan_features` and
/// `team_features`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSettings {
    pub plan_features: FeatureMap,
    pub team_features: FeatureMap,
    #[serde(alias = "final_features")]
    pub features: FeatureMap,
    pub plan_name: Option<String>,
    pub can_edit: bool,
}

/// Body of the override PATCH.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverridePatch {
    pub team_features: FeatureMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let settings: FeatureSettings =
            serde_json::from_str(r#"{"plan_features": {"calendar_enabled": true}}"#).unwrap();
        assert_eq!(settings.plan_features.len(), 1);
        assert!(settings.team_features.is_empty());
        assert!(settings.plan_name.is_none());
        assert!(!settings.can_edit);
    }

    #[test]
    fn accepts_final_features_alias() {
        let settings: FeatureSettings =
            serde_json::from_str(r#"{"final_features": {"metrics_enabled": false}}"#).unwrap();
        assert_eq!(settings.features.len(), 1);
    }
}
