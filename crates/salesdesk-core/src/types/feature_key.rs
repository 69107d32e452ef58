//! Opaque feature identifiers and the maps keyed by them.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named boolean capability switch, e.g. `calendar_enabled`.
///
/// Keys are opaque: the set known to the backend can grow without a client
/// release, so nothing here assumes the catalog is exhaustive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureKey(String);

impl FeatureKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeatureKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FeatureKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Lets maps keyed by `FeatureKey` be queried with `&str`.
impl Borrow<str> for FeatureKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FeatureKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Feature key → enabled flag. Ordered so PATCH bodies and logs are stable.
pub type FeatureMap = BTreeMap<FeatureKey, bool>;

/// Build a [`FeatureMap`] from `(key, enabled)` pairs.
pub fn feature_map<K, I>(entries: I) -> FeatureMap
where
    K: Into<FeatureKey>,
    I: IntoIterator<Item = (K, bool)>,
{
    entries.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
