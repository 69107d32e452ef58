//! Errors raised while editing team feature overrides.

use crate::types::feature_key::FeatureKey;

use super::error_code::{self, SalesdeskErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntitlementError {
    #[error("Feature overrides are read-only for this user")]
    NotEditable,

    #[error("Feature '{key}' is not included in the current plan")]
    PlanCeiling { key: FeatureKey },
}

impl SalesdeskErrorCode for EntitlementError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotEditable => error_code::ENTITLEMENT_NOT_EDITABLE,
            Self::PlanCeiling { .. } => error_code::ENTITLEMENT_PLAN_CEILING,
        }
    }
}
