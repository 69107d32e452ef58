pub mod error_code;

mod api_error;
mod config_error;
mod entitlement_error;
mod salesdesk_error;
mod session_error;

pub use api_error::{ApiError, TransportError, GENERIC_RETRY_MESSAGE};
pub use config_error::ConfigError;
pub use entitlement_error::EntitlementError;
pub use salesdesk_error::{SalesdeskError, SalesdeskResult};
pub use session_error::SessionError;
