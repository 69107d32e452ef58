//! Feature gates: what a gated content block or action renders as.
//!
//! Gates return a render decision rather than markup, so any UI layer
//! (web, desktop shell, terminal) can map the decision onto its widgets.

use serde::Serialize;
use tracing::debug;

use salesdesk_core::config::GatingConfig;
use salesdesk_core::FeatureKey;

use crate::catalog::{feature_info, FeatureIcon};
use crate::resolver::{Access, DenialReason, EntitlementResolver};

/// Presentation parameters shared by all gates.
#[derive(Debug, Clone, PartialEq)]
pub struct GateStyle {
    pub upgrade_url: String,
    pub loading_opacity: f32,
    pub blur_opacity: f32,
}

impl Default for GateStyle {
    fn default() -> Self {
        Self::from(&GatingConfig::default())
    }
}

impl From<&GatingConfig> for GateStyle {
    fn from(config: &GatingConfig) -> Self {
        Self {
            upgrade_url: config.upgrade_url.clone(),
            loading_opacity: config.loading_opacity,
            blur_opacity: config.blur_opacity,
        }
    }
}

/// Small inline indicator drawn over blurred content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockBadge {
    pub icon: FeatureIcon,
    pub label: String,
}

/// Default blocked-state card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockedCard {
    pub feature: FeatureKey,
    pub title: String,
    pub description: String,
    pub icon: FeatureIcon,
    pub cta_label: String,
    pub upgrade_url: String,
}

/// Render decision for a gated content block.
#[derive(Debug, Clone, PartialEq)]
pub enum GateRender<'a, F> {
    /// Render the wrapped content normally.
    Content,
    /// Entitlements still loading: content at reduced opacity with a spinner.
    Loading { opacity: f32 },
    /// Render nothing at all.
    Nothing,
    /// Dimmed, blurred content with an inline lock badge.
    Blurred { opacity: f32, badge: LockBadge },
    /// The caller-supplied fallback.
    Fallback(&'a F),
    /// The default blocked-state card.
    Blocked(BlockedCard),
}

impl<F> GateRender<'_, F> {
    /// Whether the wrapped content is rendered in any form.
    pub fn shows_content(&self) -> bool {
        matches!(
            self,
            Self::Content | Self::Loading { .. } | Self::Blurred { .. }
        )
    }
}

/// Wraps content behind one or more feature keys.
///
/// ```
/// use salesdesk_entitlements::{EntitlementResolver, FeatureGate, GateRender};
/// use salesdesk_core::Role;
///
/// let resolver = EntitlementResolver::loading(Role::User);
/// let gate = FeatureGate::new("calendar_enabled").hidden(true);
/// assert!(matches!(gate.evaluate(&resolver), GateRender::Loading { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct FeatureGate<F = ()> {
    keys: Vec<FeatureKey>,
    require_all: bool,
    hidden: bool,
    blur: bool,
    fallback: Option<F>,
}

impl FeatureGate<()> {
    /// Gate on a single feature.
    pub fn new(key: impl Into<FeatureKey>) -> Self {
        Self::all_of([key])
    }

    /// Gate that passes when every key is enabled.
    pub fn all_of<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<FeatureKey>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            require_all: true,
            hidden: false,
            blur: false,
            fallback: None,
        }
    }

    /// Gate that passes when at least one key is enabled.
    pub fn any_of<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<FeatureKey>,
    {
        Self::all_of(keys).require_all(false)
    }
}

impl<F> FeatureGate<F> {
    pub fn require_all(mut self, require_all: bool) -> Self {
        self.require_all = require_all;
        self
    }

    /// Render nothing instead of a fallback when access is denied.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Render a dimmed preview with a lock badge when access is denied.
    pub fn blur(mut self, blur: bool) -> Self {
        self.blur = blur;
        self
    }

    /// Replace the default blocked card.
    pub fn with_fallback<G>(self, fallback: G) -> FeatureGate<G> {
        FeatureGate {
            keys: self.keys,
            require_all: self.require_all,
            hidden: self.hidden,
            blur: self.blur,
            fallback: Some(fallback),
        }
    }

    pub fn keys(&self) -> &[FeatureKey] {
        &self.keys
    }

    pub fn evaluate(&self, resolver: &EntitlementResolver) -> GateRender<'_, F> {
        self.evaluate_with(resolver, &GateStyle::default())
    }

    pub fn evaluate_with(&self, resolver: &EntitlementResolver, style: &GateStyle) -> GateRender<'_, F> {
        if resolver.role().is_superadmin() || self.keys.is_empty() {
            return GateRender::Content;
        }

        let access = if self.require_all {
            resolver.has_all_features(&self.keys)
        } else {
            resolver.has_any_feature(&self.keys)
        };

        match access {
            Access::Loading => GateRender::Loading {
                opacity: style.loading_opacity,
            },
            Access::Enabled => GateRender::Content,
            Access::Disabled => self.denied(resolver, style),
        }
    }

    fn denied(&self, resolver: &EntitlementResolver, style: &GateStyle) -> GateRender<'_, F> {
        // Describe the first key that is actually off.
        let blocking = self
            .keys
            .iter()
            .find(|k| !resolver.is_enabled(k).is_enabled())
            .unwrap_or(&self.keys[0]);
        debug!(feature = %blocking, hidden = self.hidden, blur = self.blur, "feature gate denied");

        if self.hidden {
            return GateRender::Nothing;
        }
        let info = feature_info(blocking);
        if self.blur {
            return GateRender::Blurred {
                opacity: style.blur_opacity,
                badge: LockBadge {
                    icon: FeatureIcon::Lock,
                    label: info.display_name,
                },
            };
        }
        if let Some(fallback) = &self.fallback {
            return GateRender::Fallback(fallback);
        }
        GateRender::Blocked(BlockedCard {
            feature: blocking.clone(),
            title: info.display_name,
            description: info.description,
            icon: info.icon,
            cta_label: "Upgrade plan".to_string(),
            upgrade_url: style.upgrade_url.clone(),
        })
    }
}

/// State of a gated button or link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionState {
    Enabled,
    /// Entitlements loading: disabled, no lock.
    Pending,
    /// Disabled with a lock indicator and an explanatory tooltip.
    Locked { icon: FeatureIcon, tooltip: String },
}

impl ActionState {
    pub fn is_clickable(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// A single action (button, link) tied to a feature.
#[derive(Debug, Clone)]
pub struct GatedAction {
    key: FeatureKey,
    label: String,
}

impl GatedAction {
    pub fn new(key: impl Into<FeatureKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn evaluate(&self, resolver: &EntitlementResolver) -> ActionState {
        match resolver.is_enabled(&self.key) {
            Access::Enabled => ActionState::Enabled,
            Access::Loading => ActionState::Pending,
            Access::Disabled => {
                let name = feature_info(&self.key).display_name;
                let tooltip = match resolver.denial_reason(&self.key) {
                    Some(DenialReason::DisabledByTeam) => {
                        format!("{name} has been turned off by your administrator")
                    }
                    _ => match resolver.plan_name() {
                        Some(plan) => format!("{name} is not included in the {plan} plan"),
                        None => format!("{name} is not included in your plan"),
                    },
                };
                ActionState::Locked {
                    icon: FeatureIcon::Lock,
                    tooltip,
                }
            }
        }
    }
}
