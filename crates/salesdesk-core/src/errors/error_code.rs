//! Stable error codes surfaced to the UI layer and logs.

/// Every error type in the workspace maps to a stable upper-snake code.
pub trait SalesdeskErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

pub const SESSION_STORE_ERROR: &str = "SESSION_STORE_ERROR";
pub const SESSION_INVALID_TOKEN: &str = "SESSION_INVALID_TOKEN";
pub const SESSION_EXPIRED: &str = "SESSION_EXPIRED";

pub const API_UNAUTHORIZED: &str = "API_UNAUTHORIZED";
pub const API_FORBIDDEN: &str = "API_FORBIDDEN";
pub const API_NOT_FOUND: &str = "API_NOT_FOUND";
pub const API_STATUS: &str = "API_STATUS";
pub const API_DECODE: &str = "API_DECODE";

pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
pub const TRANSPORT_TIMEOUT: &str = "TRANSPORT_TIMEOUT";

pub const ENTITLEMENT_NOT_EDITABLE: &str = "ENTITLEMENT_NOT_EDITABLE";
pub const ENTITLEMENT_PLAN_CEILING: &str = "ENTITLEMENT_PLAN_CEILING";
