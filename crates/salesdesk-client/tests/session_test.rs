//! Session persistence, restore and expiry.

mod common;

use std::sync::Arc;

use salesdesk_client::session::{decode_token, encode_unsigned_token};
use salesdesk_client::{FileStore, MemoryStore, Session, SessionStore, TokenClaims};
use salesdesk_core::config::SessionConfig;
use salesdesk_core::errors::SessionError;
use salesdesk_core::Role;

use common::token_for;

fn file_config(path: &std::path::Path) -> SessionConfig {
    SessionConfig {
        store_path: Some(path.to_string_lossy().into_owned()),
        ..Default::default()
    }
}

#[test]
fn sign_in_persists_and_decodes() {
    let store = Arc::new(MemoryStore::new());
    let session = Session::new(store.clone(), &SessionConfig::default());
    let claims = session.sign_in(&token_for(Role::Manager)).unwrap();

    assert_eq!(claims.role, Role::Manager);
    assert!(session.is_authenticated());
    assert_eq!(session.role(), Role::Manager);
    assert!(store.read("auth_token").unwrap().is_some());
}

#[test]
fn sign_out_is_idempotent() {
    let session = Session::new(Arc::new(MemoryStore::new()), &SessionConfig::default());
    session.sign_in(&token_for(Role::User)).unwrap();
    session.sign_out().unwrap();
    session.sign_out().unwrap();
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
    assert_eq!(session.role(), Role::User);
}

#[test]
fn file_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir.path().join("session.json"));

    Session::from_config(&config)
        .sign_in(&token_for(Role::Superadmin))
        .unwrap();

    let restarted = Session::from_config(&config);
    let restored = restarted.restore().unwrap().expect("token restored");
    assert_eq!(restored.role, Role::Superadmin);
    assert!(restarted.is_authenticated());
}

#[test]
fn expired_token_is_rejected_and_discarded() {
    let expired = encode_unsigned_token(&TokenClaims {
        sub: Some("1".to_string()),
        email: None,
        role: Role::User,
        tenant_id: None,
        iat: 1_600_000_000,
        exp: 1_600_003_600,
    });

    let store = Arc::new(MemoryStore::new());
    let session = Session::new(store.clone(), &SessionConfig::default());
    assert!(matches!(
        session.sign_in(&expired),
        Err(SessionError::Expired { expired_at: 1_600_003_600 })
    ));

    store.write("auth_token", &expired).unwrap();
    assert_eq!(session.restore().unwrap(), None);
    assert_eq!(store.read("auth_token").unwrap(), None);
}

#[test]
fn garbage_token_is_discarded_on_restore() {
    let store = Arc::new(MemoryStore::new());
    store.write("auth_token", "not-a-jwt").unwrap();
    let session = Session::new(store.clone(), &SessionConfig::default());
    assert_eq!(session.restore().unwrap(), None);
    assert!(store.read("auth_token").unwrap().is_none());
}

#[test]
fn custom_token_key_is_honoured() {
    let store = Arc::new(MemoryStore::new());
    let config = SessionConfig {
        token_key: "sd_token".to_string(),
        ..Default::default()
    };
    Session::new(store.clone(), &config)
        .sign_in(&token_for(Role::User))
        .unwrap();
    assert!(store.read("sd_token").unwrap().is_some());
    assert!(store.read("auth_token").unwrap().is_none());
}

#[test]
fn numeric_ids_decode_as_strings() {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    let payload = URL_SAFE_NO_PAD.encode(br#"{"sub": 42, "role": "manager", "tenant_id": 7, "exp": 0}"#);
    let claims = decode_token(&format!("h.{payload}.s")).unwrap();
    assert_eq!(claims.sub.as_deref(), Some("42"));
    assert_eq!(claims.tenant_id.as_deref(), Some("7"));
    assert_eq!(claims.role, Role::Manager);
    assert!(!claims.is_expired());
    assert!(claims.expires_at().is_none());
}

#[test]
fn file_store_is_shared_between_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let a = FileStore::new(&path);
    let b = FileStore::new(&path);
    a.write("auth_token", "t1").unwrap();
    b.write("theme", "dark").unwrap();
    assert_eq!(a.read("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(b.read("auth_token").unwrap().as_deref(), Some("t1"));
}

/// Store whose `remove` always fails.
struct StickyStore {
    inner: MemoryStore,
}

impl SessionStore for StickyStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.inner.write(key, value)
    }

    fn remove(&self, _key: &str) -> Result<(), SessionError> {
        Err(SessionError::Store {
            message: "read-only volume".to_string(),
        })
    }
}

#[test]
fn failed_token_removal_still_signs_out() {
    let store = Arc::new(StickyStore {
        inner: MemoryStore::new(),
    });
    let session = Session::new(store.clone(), &SessionConfig::default());
    session.sign_in(&token_for(Role::Manager)).unwrap();

    assert!(matches!(session.sign_out(), Err(SessionError::Store { .. })));
    assert!(store.read("auth_token").unwrap().is_some());
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert_eq!(session.role(), Role::User);
    assert_eq!(session.restore().unwrap(), None);

    session.sign_in(&token_for(Role::User)).unwrap();
    assert!(session.is_authenticated());
}

#[test]
fn sign_in_recovers_from_corrupt_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"auth_token": "eyJh"#).unwrap();
    let config = file_config(&path);

    let session = Session::from_config(&config);
    session.sign_in(&token_for(Role::Manager)).unwrap();
    assert!(session.is_authenticated());

    let restarted = Session::from_config(&config);
    assert_eq!(restarted.restore().unwrap().map(|c| c.role), Some(Role::Manager));
    restarted.sign_out().unwrap();
    assert!(!Session::from_config(&config).is_authenticated());
}

#[test]
fn expired_claims_carry_no_role() {
    let expired = encode_unsigned_token(&TokenClaims {
        sub: Some("9".to_string()),
        email: None,
        role: Role::Manager,
        tenant_id: None,
        iat: 1_600_000_000,
        exp: 1_600_003_600,
    });
    let store = Arc::new(MemoryStore::new());
    store.write("auth_token", &expired).unwrap();
    let session = Session::new(store, &SessionConfig::default());

    assert_eq!(session.user().map(|u| u.role), Some(Role::Manager));
    assert_eq!(session.role(), Role::User);
    assert!(!session.is_authenticated());
}
