//! Control Center override editor.
//!
//! Two-phase state: `confirmed` is the last settings payload the server
//! accepted, `pending` holds local toggles not yet saved. A failed save
//! drops `pending` and the UI falls back to `confirmed` untouched.

use tracing::{debug, info};

use salesdesk_core::errors::EntitlementError;
use salesdesk_core::{FeatureKey, FeatureMap, FeatureSettings, Role};

use crate::resolver::EntitlementResolver;

#[derive(Debug, Clone)]
pub struct OverrideEditor {
    confirmed: FeatureSettings,
    pending: FeatureMap,
}

impl OverrideEditor {
    pub fn new(confirmed: FeatureSettings) -> Self {
        Self {
            confirmed,
            pending: FeatureMap::new(),
        }
    }

    pub fn confirmed(&self) -> &FeatureSettings {
        &self.confirmed
    }

    /// Local edits not yet accepted by the server.
    pub fn pending(&self) -> &FeatureMap {
        &self.pending
    }

    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn can_edit(&self) -> bool {
        self.confirmed.can_edit
    }

    /// Override value currently shown for `key`: pending edit, else the
    /// confirmed override, else the plan value.
    pub fn current_value(&self, key: &str) -> bool {
        self.pending
            .get(key)
            .or_else(|| self.confirmed.team_features.get(key))
            .or_else(|| self.confirmed.plan_features.get(key))
            .copied()
            .unwrap_or(false)
    }

    /// Stage a toggle.
    ///
    /// Enabling a key the plan does not include is refused. Setting a key
    /// back to its confirmed effective value drops the pending entry.
    pub fn toggle(&mut self, key: impl Into<FeatureKey>, enabled: bool) -> Result<(), EntitlementError> {
        if !self.confirmed.can_edit {
            return Err(EntitlementError::NotEditable);
        }
        let key = key.into();
        let in_plan = self
            .confirmed
            .plan_features
            .get(&key)
            .copied()
            .unwrap_or(false);
        if enabled && !in_plan {
            return Err(EntitlementError::PlanCeiling { key });
        }

        let confirmed_value = self
            .confirmed
            .team_features
            .get(&key)
            .copied()
            .unwrap_or(in_plan);
        if confirmed_value == enabled {
            self.pending.remove(&key);
        } else {
            debug!(feature = %key, enabled, "override staged");
            self.pending.insert(key, enabled);
        }
        Ok(())
    }

    /// Full override map to PATCH: confirmed overrides with pending applied.
    pub fn patch(&self) -> FeatureMap {
        let mut merged = self.confirmed.team_features.clone();
        merged.extend(self.pending.iter().map(|(k, v)| (k.clone(), *v)));
        merged
    }

    /// Resolver reflecting pending edits, for live previews.
    pub fn preview(&self, role: Role) -> EntitlementResolver {
        EntitlementResolver::ready(self.confirmed.plan_features.clone(), self.patch(), role)
    }

    /// Resolver over the server-confirmed state only.
    pub fn confirmed_resolver(&self, role: Role) -> EntitlementResolver {
        EntitlementResolver::from_settings(&self.confirmed, role)
    }

    /// The server accepted a save: adopt its state and drop local edits.
    pub fn commit(&mut self, server: FeatureSettings) {
        info!(
            saved = self.pending.len(),
            overrides = server.team_features.len(),
            "feature overrides committed"
        );
        self.confirmed = server;
        self.pending.clear();
    }

    /// Discard local edits.
    pub fn revert(&mut self) {
        if self.is_dirty() {
            debug!(discarded = self.pending.len(), "pending overrides reverted");
        }
        self.pending.clear();
    }
}
