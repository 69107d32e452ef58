//! EntitlementResolver: plan features × team overrides × role.
//! Central authority for every feature gating decision in the dashboard.

use tracing::{debug, warn};

use salesdesk_core::{FeatureKey, FeatureMap, FeatureSettings, Role};

/// Result of an entitlement query.
///
/// `Loading` is distinct from `Disabled` so callers can render a
/// non-committal state instead of a premature blocked card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Enabled,
    Disabled,
    Loading,
}

impl Access {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    fn from_bool(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// Why a feature is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// The plan does not include the feature (or says nothing about it).
    NotInPlan,
    /// The plan includes it but the team turned it off.
    DisabledByTeam,
}

/// Whether `key` is usable under `plan` and `team`, ignoring role.
///
/// The plan is a hard ceiling: an override of `true` never enables a key
/// the plan does not enable. An absent override inherits the plan value.
pub fn is_allowed(plan: &FeatureMap, team: &FeatureMap, key: &str) -> bool {
    plan.get(key).copied().unwrap_or(false) && team.get(key).copied().unwrap_or(true)
}

/// Final feature map over every key mentioned by either map.
pub fn merge_features(plan: &FeatureMap, team: &FeatureMap) -> FeatureMap {
    plan.keys()
        .chain(team.keys())
        .map(|key| (key.clone(), is_allowed(plan, team, key.as_str())))
        .collect()
}

#[derive(Debug, Clone)]
enum ResolverState {
    Loading,
    Ready {
        plan: FeatureMap,
        team: FeatureMap,
        plan_name: Option<String>,
    },
}

/// Resolves feature access for one user.
///
/// Cheap to clone and pure: every query is recomputed from the held maps.
#[derive(Debug, Clone)]
pub struct EntitlementResolver {
    role: Role,
    state: ResolverState,
}

impl EntitlementResolver {
    /// Resolver for a user whose feature maps have not arrived yet.
    pub fn loading(role: Role) -> Self {
        Self {
            role,
            state: ResolverState::Loading,
        }
    }

    pub fn ready(plan: FeatureMap, team: FeatureMap, role: Role) -> Self {
        Self {
            role,
            state: ResolverState::Ready {
                plan,
                team,
                plan_name: None,
            },
        }
    }

    /// Build from the settings endpoint payload. The backend's own final
    /// map is only compared against, never trusted.
    pub fn from_settings(settings: &FeatureSettings, role: Role) -> Self {
        let local = merge_features(&settings.plan_features, &settings.team_features);
        for (key, backend_value) in &settings.features {
            let local_value = local.get(key).copied().unwrap_or(false);
            if local_value != *backend_value {
                warn!(
                    feature = %key,
                    backend = *backend_value,
                    local = local_value,
                    "Backend final feature map disagrees with plan ceiling, using local merge"
                );
            }
        }

        Self {
            role,
            state: ResolverState::Ready {
                plan: settings.plan_features.clone(),
                team: settings.team_features.clone(),
                plan_name: settings.plan_name.clone(),
            },
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ResolverState::Loading)
    }

    pub fn plan_name(&self) -> Option<&str> {
        match &self.state {
            ResolverState::Ready { plan_name, .. } => plan_name.as_deref(),
            ResolverState::Loading => None,
        }
    }

    /// Access to a single feature.
    pub fn is_enabled(&self, key: impl AsRef<str>) -> Access {
        if self.role.is_superadmin() {
            return Access::Enabled;
        }
        match &self.state {
            ResolverState::Loading => Access::Loading,
            ResolverState::Ready { plan, team, .. } => {
                Access::from_bool(is_allowed(plan, team, key.as_ref()))
            }
        }
    }

    /// AND over `keys`. An empty list places no constraint.
    pub fn has_all_features<I, K>(&self, keys: I) -> Access
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.combine(keys, true)
    }

    /// OR over `keys`. An empty list places no constraint.
    pub fn has_any_feature<I, K>(&self, keys: I) -> Access
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.combine(keys, false)
    }

    fn combine<I, K>(&self, keys: I, require_all: bool) -> Access
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut keys = keys.into_iter().peekable();
        if keys.peek().is_none() || self.role.is_superadmin() {
            return Access::Enabled;
        }
        let (plan, team) = match &self.state {
            ResolverState::Loading => return Access::Loading,
            ResolverState::Ready { plan, team, .. } => (plan, team),
        };

        let mut check = keys.map(|k| is_allowed(plan, team, k.as_ref()));
        let result = if require_all {
            check.all(|enabled| enabled)
        } else {
            check.any(|enabled| enabled)
        };
        Access::from_bool(result)
    }

    /// Why `key` is disabled, or `None` when it is enabled or still loading.
    pub fn denial_reason(&self, key: impl AsRef<str>) -> Option<DenialReason> {
        if self.role.is_superadmin() {
            return None;
        }
        let ResolverState::Ready { plan, team, .. } = &self.state else {
            return None;
        };
        let key = key.as_ref();
        if !plan.get(key).copied().unwrap_or(false) {
            debug!(feature = key, "feature denied: not in plan");
            Some(DenialReason::NotInPlan)
        } else if !team.get(key).copied().unwrap_or(true) {
            debug!(feature = key, "feature denied: disabled by team override");
            Some(DenialReason::DisabledByTeam)
        } else {
            None
        }
    }

    /// The derived final map, `None` while loading.
    ///
    /// For a superadmin every mentioned key is reported enabled.
    pub fn final_features(&self) -> Option<FeatureMap> {
        let ResolverState::Ready { plan, team, .. } = &self.state else {
            return None;
        };
        let mut merged = merge_features(plan, team);
        if self.role.is_superadmin() {
            merged.values_mut().for_each(|v| *v = true);
        }
        Some(merged)
    }

    /// Sorted list of enabled keys (empty while loading).
    pub fn enabled_features(&self) -> Vec<FeatureKey> {
        self.final_features()
            .map(|m| m.into_iter().filter(|(_, v)| *v).map(|(k, _)| k).collect())
            .unwrap_or_default()
    }
}
