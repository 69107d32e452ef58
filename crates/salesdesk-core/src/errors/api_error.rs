//! REST API and transport errors.

use super::error_code::{self, SalesdeskErrorCode};
use super::session_error::SessionError;

/// Generic prompt shown when the backend gave no usable detail.
pub const GENERIC_RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failures below HTTP semantics: connection, timeout, malformed request.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {message}")]
    Connect { message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    #[error("Request failed: {message}")]
    Request { message: String },
}

impl SalesdeskErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout => error_code::TRANSPORT_TIMEOUT,
            _ => error_code::TRANSPORT_ERROR,
        }
    }
}

/// Errors returned by API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401: the session has been cleared and the UI must go to `redirect_to`.
    #[error("Not authenticated, redirecting to {redirect_to}")]
    Unauthorized { redirect_to: String },

    #[error("Forbidden: {}", .detail.as_deref().unwrap_or("insufficient permissions"))]
    Forbidden { detail: Option<String> },

    #[error("Not found: {path}")]
    NotFound { path: String },

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    #[error("Response decode failed: {message}")]
    Decode { message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl ApiError {
    /// Message for the toast: the backend's detail when present, otherwise
    /// a generic retry prompt.
    pub fn user_message(&self) -> String {
        match self {
            Self::Forbidden { detail: Some(d) } | Self::Status { detail: Some(d), .. } => d.clone(),
            Self::Forbidden { detail: None } => {
                "You do not have permission to perform this action.".to_string()
            }
            Self::Unauthorized { .. } => "Your session has expired. Please sign in again.".to_string(),
            _ => GENERIC_RETRY_MESSAGE.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

impl SalesdeskErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => error_code::API_UNAUTHORIZED,
            Self::Forbidden { .. } => error_code::API_FORBIDDEN,
            Self::NotFound { .. } => error_code::API_NOT_FOUND,
            Self::Status { .. } => error_code::API_STATUS,
            Self::Decode { .. } => error_code::API_DECODE,
            Self::Transport(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
        }
    }
}
