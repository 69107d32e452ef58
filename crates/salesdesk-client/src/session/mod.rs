//! Session: the auth token and the user decoded from it.
//!
//! Created once at the application root and shared (`Arc<Session>`) with
//! everything that talks to the backend.

pub mod store;
pub mod token;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use salesdesk_core::config::SessionConfig;
use salesdesk_core::errors::SessionError;
use salesdesk_core::Role;

pub use store::{FileStore, MemoryStore, SessionStore};
pub use token::{decode_token, encode_unsigned_token, TokenClaims};

pub struct Session {
    store: Arc<dyn SessionStore>,
    token_key: String,
    user: RwLock<Option<TokenClaims>>,
    /// Set by `sign_out` and cleared by `sign_in`. While set, whatever is
    /// left in the store is ignored.
    signed_out: AtomicBool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token_key", &self.token_key)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>, config: &SessionConfig) -> Self {
        Self {
            store,
            token_key: config.token_key.clone(),
            user: RwLock::new(None),
            signed_out: AtomicBool::new(false),
        }
    }

    /// Session over the store named by the config: a [`FileStore`] when
    /// `store_path` is set, otherwise a [`MemoryStore`].
    pub fn from_config(config: &SessionConfig) -> Self {
        let store: Arc<dyn SessionStore> = match &config.store_path {
            Some(path) => Arc::new(FileStore::new(path)),
            None => Arc::new(MemoryStore::new()),
        };
        Self::new(store, config)
    }

    /// Load the persisted token and decode it. An undecodable or expired
    /// token is removed from storage.
    pub fn restore(&self) -> Result<Option<TokenClaims>, SessionError> {
        if self.is_signed_out() {
            return Ok(None);
        }
        let Some(token) = self.store.read(&self.token_key)? else {
            return Ok(None);
        };
        match decode_token(&token) {
            Ok(claims) if !claims.is_expired() => {
                debug!(role = %claims.role, "session restored");
                self.cache(Some(claims.clone()));
                Ok(Some(claims))
            }
            Ok(claims) => {
                info!(exp = claims.exp, "stored token expired, discarding");
                self.discard_stored_token();
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "stored token unreadable, discarding");
                self.discard_stored_token();
                Ok(None)
            }
        }
    }

    /// Persist a freshly issued token.
    pub fn sign_in(&self, token: &str) -> Result<TokenClaims, SessionError> {
        let claims = decode_token(token)?;
        if claims.is_expired() {
            return Err(SessionError::Expired {
                expired_at: claims.exp,
            });
        }
        self.store.write(&self.token_key, token.trim())?;
        self.signed_out.store(false, Ordering::SeqCst);
        self.cache(Some(claims.clone()));
        info!(role = %claims.role, tenant = ?claims.tenant_id, "signed in");
        Ok(claims)
    }

    /// Drop the token and cached user. Idempotent.
    ///
    /// The session reads as signed out even when removing the stored token
    /// fails; the error is returned so the caller can report it.
    pub fn sign_out(&self) -> Result<(), SessionError> {
        self.signed_out.store(true, Ordering::SeqCst);
        self.cache(None);
        self.store.remove(&self.token_key)
    }

    fn discard_stored_token(&self) {
        if let Err(e) = self.sign_out() {
            warn!(error = %e, "failed to remove stored token");
        }
    }

    fn is_signed_out(&self) -> bool {
        self.signed_out.load(Ordering::SeqCst)
    }

    /// The raw bearer token, if any.
    pub fn token(&self) -> Option<String> {
        if self.is_signed_out() {
            return None;
        }
        match self.store.read(&self.token_key) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "failed to read stored token");
                None
            }
        }
    }

    /// The decoded user. Falls back to decoding the stored token when
    /// nothing is cached yet.
    pub fn user(&self) -> Option<TokenClaims> {
        if let Some(claims) = self.user.read().ok().and_then(|u| u.clone()) {
            return Some(claims);
        }
        let claims = decode_token(&self.token()?).ok()?;
        self.cache(Some(claims.clone()));
        Some(claims)
    }

    /// Role of the signed-in user; `User` when signed out or expired.
    pub fn role(&self) -> Role {
        self.user()
            .filter(|u| !u.is_expired())
            .map(|u| u.role)
            .unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.user().is_some_and(|u| !u.is_expired())
    }

    fn cache(&self, claims: Option<TokenClaims>) {
        match self.user.write() {
            Ok(mut user) => *user = claims,
            Err(poisoned) => *poisoned.into_inner() = claims,
        }
    }
}
