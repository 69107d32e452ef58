//! Known feature keys and their display metadata.
//!
//! The backend owns the authoritative list; this catalog only supplies
//! names, descriptions and icons for the keys the UI knows about. Unknown
//! keys still resolve (to disabled) and get a generated display name.

use serde::{Deserialize, Serialize};

use salesdesk_core::FeatureKey;

/// Icon identifiers. Kept free of any UI-framework type; the rendering
/// layer maps them through [`FeatureIcon::glyph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureIcon {
    Calendar,
    BarChart,
    Search,
    Kanban,
    Target,
    Inbox,
    Handshake,
    Bot,
    Megaphone,
    Monitor,
    Download,
    Crown,
    Lock,
    Sparkles,
}

impl FeatureIcon {
    /// Icon-set name used by the web front-end (lucide naming).
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Calendar => "calendar",
            Self::BarChart => "bar-chart-3",
            Self::Search => "search",
            Self::Kanban => "kanban-square",
            Self::Target => "target",
            Self::Inbox => "inbox",
            Self::Handshake => "handshake",
            Self::Bot => "bot",
            Self::Megaphone => "megaphone",
            Self::Monitor => "monitor",
            Self::Download => "download",
            Self::Crown => "crown",
            Self::Lock => "lock",
            Self::Sparkles => "sparkles",
        }
    }
}

/// All feature keys the dashboard renders specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownFeature {
    Calendar,
    Metrics,
    Search,
    LeadKanban,
    Opportunities,
    SellerInbox,
    Handoff,
    AiAssistant,
    Broadcasts,
    SalesWall,
    Export,
    CeoDashboard,
}

impl KnownFeature {
    pub const ALL: [KnownFeature; 12] = [
        Self::Calendar,
        Self::Metrics,
        Self::Search,
        Self::LeadKanban,
        Self::Opportunities,
        Self::SellerInbox,
        Self::Handoff,
        Self::AiAssistant,
        Self::Broadcasts,
        Self::SalesWall,
        Self::Export,
        Self::CeoDashboard,
    ];

    /// Wire key shared with the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calendar => "calendar_enabled",
            Self::Metrics => "metrics_enabled",
            Self::Search => "search_enabled",
            Self::LeadKanban => "kanban_enabled",
            Self::Opportunities => "opportunities_enabled",
            Self::SellerInbox => "seller_inbox_enabled",
            Self::Handoff => "handoff_enabled",
            Self::AiAssistant => "ai_assistant_enabled",
            Self::Broadcasts => "broadcasts_enabled",
            Self::SalesWall => "sales_wall_enabled",
            Self::Export => "export_enabled",
            Self::CeoDashboard => "ceo_dashboard_enabled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == s)
    }

    pub fn key(&self) -> FeatureKey {
        FeatureKey::new(self.as_str())
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Calendar => "Calendar",
            Self::Metrics => "Metrics",
            Self::Search => "Lead Search",
            Self::LeadKanban => "Lead Board",
            Self::Opportunities => "Opportunities",
            Self::SellerInbox => "Seller Inbox",
            Self::Handoff => "Human Handoff",
            Self::AiAssistant => "AI Assistant",
            Self::Broadcasts => "Broadcasts",
            Self::SalesWall => "Sales Wall",
            Self::Export => "Data Export",
            Self::CeoDashboard => "CEO Dashboard",
        }
    }

    /// Description shown on the blocked card.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Calendar => "Schedule appointments and sync seller agendas",
            Self::Metrics => "Conversion, response-time and revenue metrics",
            Self::Search => "Full-text search across leads and conversations",
            Self::LeadKanban => "Drag-and-drop board for lead stages",
            Self::Opportunities => "Track deals through the sales pipeline",
            Self::SellerInbox => "Per-seller inbox for assigned WhatsApp conversations",
            Self::Handoff => "Transfer AI-attended conversations to a human seller",
            Self::AiAssistant => "AI assistant that qualifies leads on WhatsApp",
            Self::Broadcasts => "Send template messages to lead segments",
            Self::SalesWall => "Full-screen sales wall for team TVs",
            Self::Export => "Export leads and opportunities to CSV",
            Self::CeoDashboard => "Executive analytics: churn risk, upsell and growth",
        }
    }

    pub fn icon(&self) -> FeatureIcon {
        match self {
            Self::Calendar => FeatureIcon::Calendar,
            Self::Metrics => FeatureIcon::BarChart,
            Self::Search => FeatureIcon::Search,
            Self::LeadKanban => FeatureIcon::Kanban,
            Self::Opportunities => FeatureIcon::Target,
            Self::SellerInbox => FeatureIcon::Inbox,
            Self::Handoff => FeatureIcon::Handshake,
            Self::AiAssistant => FeatureIcon::Bot,
            Self::Broadcasts => FeatureIcon::Megaphone,
            Self::SalesWall => FeatureIcon::Monitor,
            Self::Export => FeatureIcon::Download,
            Self::CeoDashboard => FeatureIcon::Crown,
        }
    }
}

/// Display metadata for any feature key, known or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureInfo {
    pub key: FeatureKey,
    pub display_name: String,
    pub description: String,
    pub icon: FeatureIcon,
}

/// Look up display metadata. Unknown keys get a name derived from the key
/// (`lead_scoring_enabled` → "Lead Scoring") and a generic description.
pub fn feature_info(key: &FeatureKey) -> FeatureInfo {
    match KnownFeature::parse(key.as_str()) {
        Some(known) => FeatureInfo {
            key: key.clone(),
            display_name: known.display_name().to_string(),
            description: known.description().to_string(),
            icon: known.icon(),
        },
        None => FeatureInfo {
            key: key.clone(),
            display_name: humanize_key(key.as_str()),
            description: "This feature is not included in your current plan".to_string(),
            icon: FeatureIcon::Sparkles,
        },
    }
}

fn humanize_key(key: &str) -> String {
    let base = key.strip_suffix("_enabled").unwrap_or(key);
    base.split(['_', '-'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
