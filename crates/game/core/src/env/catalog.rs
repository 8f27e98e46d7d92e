//! Reference catalog definitions and the oracle trait used to query them.
//!
//! Catalogs (roles, professions, pathways) are read-only data owned by a
//! loader. They are keyed by a stable internal key and carry a human-readable
//! display `name`; characters historically refer to entries by display name,
//! so lookups by name are case-insensitive and whitespace-normalized.

use crate::lenient;
use crate::stats::GrowthTable;

/// Collapses whitespace runs and trims the ends of a display label.
pub fn normalize_label(label: &str) -> String {
    label.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Compares two display labels the way catalog lookups do.
pub fn labels_match(a: &str, b: &str) -> bool {
    normalize_label(a).to_lowercase() == normalize_label(b).to_lowercase()
}

/// Common view over catalog entries.
pub trait CatalogEntry {
    /// Human-readable name shown to users and stored on characters.
    fn display_name(&self) -> &str;
}

/// Read-only access to one reference catalog.
pub trait CatalogOracle<T>: Send + Sync {
    /// Entry under its stable key.
    fn get(&self, key: &str) -> Option<&T>;

    /// Entry whose display name matches `display_name`, with its key.
    fn find_by_name(&self, display_name: &str) -> Option<(&str, &T)>;

    /// Display names of every entry, in catalog order.
    fn display_names(&self) -> Vec<String>;

    /// Resolves a stored reference: the stable key wins, the display name is
    /// the fallback for records written before keys were stored.
    fn resolve(&self, key: Option<&str>, display_name: &str) -> Option<&T> {
        key.and_then(|key| self.get(key))
            .or_else(|| self.find_by_name(display_name).map(|(_, entry)| entry))
    }
}

/// Resource a role hands to new characters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DefaultResource {
    pub kind: String,
}

/// A role: display data, default resource and per-level attribute growth.
///
/// A field of the wrong shape decodes as its default, so the role itself is
/// always kept.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoleDefinition {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_resource: Option<DefaultResource>,
    #[serde(default)]
    pub growth_per_level: GrowthTable,
}

impl RoleDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_growth(mut self, growth: GrowthTable) -> Self {
        self.growth_per_level = growth;
        self
    }

    pub fn with_default_resource(mut self, kind: impl Into<String>) -> Self {
        self.default_resource = Some(DefaultResource { kind: kind.into() });
        self
    }

    pub fn resource_kind(&self) -> Option<&str> {
        self.default_resource.as_ref().map(|r| r.kind.as_str())
    }
}

impl CatalogEntry for RoleDefinition {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// A profession or pathway (nation) entry: display data only.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReferenceEntry {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl ReferenceEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl CatalogEntry for ReferenceEntry {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Catalog with no entries; every lookup misses.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyCatalog;

impl<T> CatalogOracle<T> for EmptyCatalog {
    fn get(&self, _key: &str) -> Option<&T> {
        None
    }

    fn find_by_name(&self, _display_name: &str) -> Option<(&str, &T)> {
        None
    }

    fn display_names(&self) -> Vec<String> {
        Vec::new()
    }
}
