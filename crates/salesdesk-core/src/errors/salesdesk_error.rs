use super::error_code::SalesdeskErrorCode;
use super::{ApiError, ConfigError, EntitlementError, SessionError, TransportError};

/// Top-level error type for the SalesDesk client.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum SalesdeskError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("api error: {0}")]
    Api(#[from] ApiError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("entitlement error: {0}")]
    Entitlement(#[from] EntitlementError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SalesdeskErrorCode for SalesdeskError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
            Self::Api(e) => e.error_code(),
            Self::Transport(e) => e.error_code(),
            Self::Entitlement(e) => e.error_code(),
            Self::Serialization(_) => super::error_code::API_DECODE,
        }
    }
}

/// Convenience type alias.
pub type SalesdeskResult<T> = Result<T, SalesdeskError>;
