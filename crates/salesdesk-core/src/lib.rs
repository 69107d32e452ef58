//! # salesdesk-core
//!
//! Foundation crate for the SalesDesk dashboard client.
//! Defines the shared types (feature keys, roles, feature maps, the settings
//! wire format), errors with stable codes, configuration, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::SalesdeskConfig;
pub use errors::error_code::SalesdeskErrorCode;
pub use errors::{SalesdeskError, SalesdeskResult};
pub use types::feature_key::{FeatureKey, FeatureMap};
pub use types::role::Role;
pub use types::settings::FeatureSettings;
