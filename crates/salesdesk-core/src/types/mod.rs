//! Shared data types: feature keys, roles, and the settings wire format.

pub mod feature_key;
pub mod role;
pub mod settings;
