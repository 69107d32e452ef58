//! Auth-token claim decoding.
//! The signature is not verified client-side; the backend does that on
//! every request. The client only needs the claims to drive the UI.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use salesdesk_core::errors::SessionError;
use salesdesk_core::Role;

/// Claims carried by the dashboard's bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id.
    #[serde(default, deserialize_with = "string_or_number")]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "string_or_number")]
    pub tenant_id: Option<String>,
    /// Issued at (Unix seconds).
    #[serde(default)]
    pub iat: i64,
    /// Expiration (Unix seconds). 0 = never expires.
    #[serde(default)]
    pub exp: i64,
}

impl TokenClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.exp == 0 {
            return None;
        }
        DateTime::from_timestamp(self.exp, 0)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp != 0 && self.exp <= now.timestamp()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Decode the payload segment of a JWT.
pub fn decode_token(token: &str) -> Result<TokenClaims, SessionError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(SessionError::InvalidToken {
            reason: "expected 3 dot-separated parts".to_string(),
        });
    }

    let payload = URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| SessionError::InvalidToken {
            reason: format!("payload is not base64url: {e}"),
        })?;

    serde_json::from_slice(&payload).map_err(|e| SessionError::InvalidToken {
        reason: format!("payload is not valid claims JSON: {e}"),
    })
}

/// Build an unsigned token from claims. Test helper for UI layers.
pub fn encode_unsigned_token(claims: &TokenClaims) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload_json = serde_json::to_vec(claims).unwrap_or_default();
    let payload = URL_SAFE_NO_PAD.encode(payload_json);
    let signature = URL_SAFE_NO_PAD.encode(b"unsigned");
    format!("{header}.{payload}.{signature}")
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
