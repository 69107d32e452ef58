//! Settings endpoint and the Control Center load/edit/save flow.

mod common;

use salesdesk_client::settings::FEATURES_PATH;
use salesdesk_client::{ControlCenter, HttpMethod, NoticeLevel, Notices, SettingsApi};
use salesdesk_core::errors::{ApiError, EntitlementError};
use salesdesk_core::types::feature_key::feature_map;
use salesdesk_core::Role;
use salesdesk_entitlements::Access;
use serde_json::json;

use common::{client, ScriptedTransport, SETTINGS_BODY};

const SAVED_BODY: &str = r#"{
    "plan_features": {"calendar_enabled": true, "search_enabled": true, "metrics_enabled": false},
    "team_features": {"search_enabled": true, "calendar_enabled": false},
    "final_features": {"calendar_enabled": false, "search_enabled": true, "metrics_enabled": false},
    "plan_name": "Growth",
    "can_edit": true
}"#;

#[test]
fn fetch_features_parses_settings() {
    let api = client(
        ScriptedTransport::new().respond(HttpMethod::Get, FEATURES_PATH, 200, SETTINGS_BODY),
        Some(Role::User),
    );
    let settings = SettingsApi::new(&api).fetch_features().unwrap();
    assert_eq!(settings.plan_name.as_deref(), Some("Growth"));
    assert_eq!(settings.plan_features.get("calendar_enabled"), Some(&true));
    assert_eq!(settings.team_features.get("search_enabled"), Some(&false));
    assert_eq!(settings.features.get("search_enabled"), Some(&false));
    assert!(settings.can_edit);
}

#[test]
fn user_role_save_is_refused_before_any_request() {
    let api = client(ScriptedTransport::new(), Some(Role::User));
    let err = SettingsApi::new(&api)
        .save_overrides(&feature_map([("calendar_enabled", false)]))
        .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden { .. }));
    assert!(api.transport().requests().is_empty());
}

#[test]
fn save_sends_override_patch() {
    let api = client(
        ScriptedTransport::new().respond(HttpMethod::Patch, FEATURES_PATH, 200, SAVED_BODY),
        Some(Role::Manager),
    );
    let saved = SettingsApi::new(&api)
        .save_overrides(&feature_map([("calendar_enabled", false)]))
        .unwrap();
    assert_eq!(saved.team_features.get("calendar_enabled"), Some(&false));

    let request = &api.transport().requests()[0];
    assert_eq!(
        request.body,
        Some(json!({"team_features": {"calendar_enabled": false}}))
    );
}

#[test]
fn acknowledgement_only_save_refetches() {
    let api = client(
        ScriptedTransport::new()
            .respond(HttpMethod::Patch, FEATURES_PATH, 200, r#"{"status": "ok"}"#)
            .respond(HttpMethod::Get, FEATURES_PATH, 200, SAVED_BODY),
        Some(Role::Manager),
    );
    let saved = SettingsApi::new(&api)
        .save_overrides(&feature_map([("calendar_enabled", false)]))
        .unwrap();
    assert_eq!(saved.team_features.get("search_enabled"), Some(&true));
    assert_eq!(api.transport().count(HttpMethod::Get, FEATURES_PATH), 1);
}

#[test]
fn control_center_round_trip() {
    let api = client(
        ScriptedTransport::new()
            .respond(HttpMethod::Get, FEATURES_PATH, 200, SETTINGS_BODY)
            .respond(HttpMethod::Patch, FEATURES_PATH, 200, SAVED_BODY),
        Some(Role::Manager),
    );
    let notices = Notices::new();
    let mut center = ControlCenter::new(&api, &notices);

    assert!(center.resolver(Role::Manager).is_loading());
    center.load().unwrap();
    assert_eq!(
        center.resolver(Role::Manager).is_enabled("search_enabled"),
        Access::Disabled
    );

    center.toggle("search_enabled", true).unwrap();
    center.toggle("calendar_enabled", false).unwrap();
    assert_eq!(
        center.preview(Role::Manager).is_enabled("search_enabled"),
        Access::Enabled
    );
    assert_eq!(
        center.resolver(Role::Manager).is_enabled("search_enabled"),
        Access::Disabled
    );

    center.save().unwrap();
    let editor = center.editor().unwrap();
    assert!(!editor.is_dirty());
    assert_eq!(
        center.resolver(Role::Manager).is_enabled("calendar_enabled"),
        Access::Disabled
    );

    let drained = notices.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].level, NoticeLevel::Success);
}

#[test]
fn failed_save_reverts_and_notifies() {
    let api = client(
        ScriptedTransport::new()
            .respond(HttpMethod::Get, FEATURES_PATH, 200, SETTINGS_BODY)
            .respond(
                HttpMethod::Patch,
                FEATURES_PATH,
                400,
                r#"{"detail": "Override not allowed on this plan"}"#,
            ),
        Some(Role::Manager),
    );
    let notices = Notices::new();
    let mut center = ControlCenter::new(&api, &notices);
    center.load().unwrap();
    center.toggle("calendar_enabled", false).unwrap();

    let err = center.save().unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 400, .. }));

    let editor = center.editor().unwrap();
    assert!(!editor.is_dirty());
    assert_eq!(editor.confirmed().team_features, feature_map([("search_enabled", false)]));

    let drained = notices.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].level, NoticeLevel::Error);
    assert_eq!(drained[0].message, "Override not allowed on this plan");
    assert_eq!(drained[0].code, Some("API_STATUS"));
}

#[test]
fn toggling_before_load_or_beyond_plan_is_refused() {
    let api = client(
        ScriptedTransport::new().respond(HttpMethod::Get, FEATURES_PATH, 200, SETTINGS_BODY),
        Some(Role::Manager),
    );
    let notices = Notices::new();
    let mut center = ControlCenter::new(&api, &notices);

    assert_eq!(
        center.toggle("calendar_enabled", false),
        Err(EntitlementError::NotEditable)
    );
    center.load().unwrap();
    assert!(matches!(
        center.toggle("metrics_enabled", true),
        Err(EntitlementError::PlanCeiling { .. })
    ));
    assert_eq!(notices.len(), 2);
}

#[test]
fn save_without_changes_sends_nothing() {
    let api = client(
        ScriptedTransport::new().respond(HttpMethod::Get, FEATURES_PATH, 200, SETTINGS_BODY),
        Some(Role::Manager),
    );
    let notices = Notices::new();
    let mut center = ControlCenter::new(&api, &notices);
    center.load().unwrap();
    center.save().unwrap();
    assert_eq!(api.transport().count(HttpMethod::Patch, FEATURES_PATH), 0);
    assert!(notices.is_empty());
}

#[test]
fn failed_load_keeps_previous_state() {
    let api = client(
        ScriptedTransport::new()
            .respond(HttpMethod::Get, FEATURES_PATH, 200, SETTINGS_BODY)
            .respond(HttpMethod::Get, FEATURES_PATH, 500, "{}"),
        Some(Role::Manager),
    );
    let notices = Notices::new();
    let mut center = ControlCenter::new(&api, &notices);
    center.load().unwrap();
    assert!(center.load().is_err());
    assert!(center.is_loaded());
    assert_eq!(
        center.resolver(Role::User).is_enabled("calendar_enabled"),
        Access::Enabled
    );
    assert_eq!(notices.drain()[0].level, NoticeLevel::Error);
}

#[test]
fn expired_manager_token_cannot_save() {
    use std::sync::Arc;

    use salesdesk_client::session::encode_unsigned_token;
    use salesdesk_client::{ApiClient, MemoryStore, Session, SessionStore, TokenClaims};
    use salesdesk_core::config::SessionConfig;

    let expired = encode_unsigned_token(&TokenClaims {
        sub: Some("3".to_string()),
        email: None,
        role: Role::Manager,
        tenant_id: None,
        iat: 1_600_000_000,
        exp: 1_600_003_600,
    });
    let store = Arc::new(MemoryStore::new());
    store.write("auth_token", &expired).unwrap();
    let session = Arc::new(Session::new(store, &SessionConfig::default()));
    let api = ApiClient::new(ScriptedTransport::new(), session, &common::api_config());

    let err = SettingsApi::new(&api)
        .save_overrides(&feature_map([("calendar_enabled", false)]))
        .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden { .. }));
    assert!(api.transport().requests().is_empty());
}
