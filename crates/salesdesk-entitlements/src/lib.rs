//! # salesdesk-entitlements
//!
//! Feature gating for the SalesDesk dashboard.
//!
//! ## Policy
//! - **Plan** features are a hard ceiling: a key the plan does not enable is
//!   never enabled.
//! - **Team overrides** toggle within that ceiling; an absent override
//!   inherits the plan value.
//! - **Superadmin** bypasses every check.
//!
//! ## Modules
//! - `catalog`: known feature keys with display metadata and icon ids
//! - `resolver`: `EntitlementResolver`: plan × overrides × role, with a loading state
//! - `gate`: `FeatureGate` / `GatedAction` render decisions
//! - `editor`: `OverrideEditor`: pending edits vs confirmed server state

pub mod catalog;
pub mod editor;
pub mod gate;
pub mod resolver;

pub use catalog::{feature_info, FeatureIcon, FeatureInfo, KnownFeature};
pub use editor::OverrideEditor;
pub use gate::{ActionState, BlockedCard, FeatureGate, GateRender, GateStyle, GatedAction, LockBadge};
pub use resolver::{is_allowed, merge_features, Access, DenialReason, EntitlementResolver};
