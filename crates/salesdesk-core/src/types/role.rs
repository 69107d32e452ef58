//! Acting-user roles.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The acting user's role.
///
/// - **Superadmin**: platform operator, bypasses every feature gate.
/// - **Manager**: tenant admin, may edit the team override map.
/// - **User**: regular seller, read-only access to the final feature map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Superadmin,
    Manager,
    #[default]
    User,
}

impl Role {
    /// Parse a backend role string. Unknown roles fall back to `User`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "superadmin" | "super_admin" => Self::Superadmin,
            "admin" | "manager" => Self::Manager,
            _ => Self::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superadmin => "superadmin",
            Self::Manager => "manager",
            Self::User => "user",
        }
    }

    pub fn is_superadmin(&self) -> bool {
        matches!(self, Self::Superadmin)
    }

    /// Whether this role may change the team override map.
    pub fn can_edit_overrides(&self) -> bool {
        matches!(self, Self::Superadmin | Self::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
