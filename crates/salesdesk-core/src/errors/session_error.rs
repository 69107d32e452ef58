//! Session and session-storage errors.

use super::error_code::{self, SalesdeskErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session store error: {message}")]
    Store { message: String },

    #[error("Invalid auth token: {reason}")]
    InvalidToken { reason: String },

    #[error("Auth token expired at {expired_at}")]
    Expired { expired_at: i64 },
}

impl SalesdeskErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Store { .. } => error_code::SESSION_STORE_ERROR,
            Self::InvalidToken { .. } => error_code::SESSION_INVALID_TOKEN,
            Self::Expired { .. } => error_code::SESSION_EXPIRED,
        }
    }
}
