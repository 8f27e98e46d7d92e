//! Reference catalog loader.
//!
//! Accepts both file shapes seen in the data directory:
//!
//! ```json
//! { "roles": { "warrior": { "name": "Warrior", ... } } }
//! { "warrior": { "name": "Warrior", ... } }
//! ```
//!
//! Entries that are not objects are skipped with a warning. An entry without
//! a `name` is displayed under its key.

use std::path::Path;

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, IgnoredAny};
use sheet_core::{CatalogEntry, ReferenceEntry, RoleDefinition};

use crate::catalog::Catalog;
use crate::loaders::{DataFormat, LoadResult, read_file};

/// Which catalog a file holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Roles,
    Professions,
    Pathways,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 3] = [
        CatalogKind::Roles,
        CatalogKind::Professions,
        CatalogKind::Pathways,
    ];

    /// Wrapper key inside the file, also used as the file stem.
    pub const fn as_str(self) -> &'static str {
        match self {
            CatalogKind::Roles => "roles",
            CatalogKind::Professions => "professions",
            CatalogKind::Pathways => "pathways",
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry types the loader knows how to post-process.
pub trait LoadedEntry: CatalogEntry + DeserializeOwned {
    /// Uses `key` as display name when the file gave none.
    fn fill_missing_name(&mut self, key: &str);

    /// Logs data that was dropped while parsing the entry.
    fn report_skipped(&self, _key: &str, _path: &Path) {}
}

impl LoadedEntry for RoleDefinition {
    fn fill_missing_name(&mut self, key: &str) {
        if self.name.trim().is_empty() {
            self.name = key.to_string();
        }
    }

    fn report_skipped(&self, key: &str, path: &Path) {
        for attribute in self.growth_per_level.skipped() {
            tracing::warn!(
                role = key,
                attribute = attribute.as_str(),
                path = %path.display(),
                "ignoring growth entry with unknown attribute or non-numeric increment"
            );
        }
    }
}

impl LoadedEntry for ReferenceEntry {
    fn fill_missing_name(&mut self, key: &str) {
        if self.name.trim().is_empty() {
            self.name = key.to_string();
        }
    }
}

/// Object entries always decode (their fields are lenient), so only
/// non-object values land in `Invalid`.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawEntry<T> {
    Entry(T),
    Invalid(IgnoredAny),
}

#[derive(serde::Deserialize)]
struct WrappedCatalog<T> {
    #[serde(alias = "roles", alias = "professions", alias = "pathways")]
    entries: IndexMap<String, RawEntry<T>>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum CatalogFile<T> {
    Wrapped(WrappedCatalog<T>),
    Flat(IndexMap<String, RawEntry<T>>),
}

impl<T> CatalogFile<T> {
    fn into_entries(self) -> IndexMap<String, RawEntry<T>> {
        match self {
            CatalogFile::Wrapped(wrapped) => wrapped.entries,
            CatalogFile::Flat(entries) => entries,
        }
    }
}

/// Loader for reference catalogs from JSON or RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog from a file, picking the syntax from its extension.
    pub fn load<T: LoadedEntry>(path: &Path) -> LoadResult<Catalog<T>> {
        let format = DataFormat::from_path(path)?;
        let content = read_file(path)?;
        Self::parse(&content, format, path)
    }

    /// Parse catalog text. `origin` is only used in messages.
    pub fn parse<T: LoadedEntry>(
        content: &str,
        format: DataFormat,
        origin: &Path,
    ) -> LoadResult<Catalog<T>> {
        let file: CatalogFile<T> = format.parse(content, origin)?;

        let mut catalog = Catalog::new();
        for (key, raw) in file.into_entries() {
            match raw {
                RawEntry::Entry(mut entry) => {
                    entry.fill_missing_name(&key);
                    entry.report_skipped(&key, origin);
                    catalog.insert(key, entry);
                }
                RawEntry::Invalid(_) => {
                    tracing::warn!(
                        key = key.as_str(),
                        path = %origin.display(),
                        "skipping catalog entry that is not an object"
                    );
                }
            }
        }

        tracing::debug!(
            entries = catalog.len(),
            path = %origin.display(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn load_roles(path: &Path) -> LoadResult<Catalog<RoleDefinition>> {
        Self::load(path)
    }

    pub fn load_references(path: &Path) -> LoadResult<Catalog<ReferenceEntry>> {
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::{Attribute, CatalogOracle};

    fn json<T: LoadedEntry>(content: &str) -> Catalog<T> {
        CatalogLoader::parse(content, DataFormat::Json, Path::new("test.json")).unwrap()
    }

    #[test]
    fn loads_wrapped_roles_with_growth() {
        let roles: Catalog<RoleDefinition> = json(
            r#"{
                "roles": {
                    "warrior": {
                        "name": "Warrior",
                        "description": "Front line.",
                        "default_resource": {"kind": "Fury"},
                        "growth_per_level": {"attack": 2, "resource.capacity": "3", "stamina": 1}
                    },
                    "broken": "not an object"
                }
            }"#,
        );

        assert_eq!(roles.len(), 1);
        let warrior = roles.get("warrior").unwrap();
        assert_eq!(warrior.resource_kind(), Some("Fury"));
        assert_eq!(warrior.growth_per_level.increment(Attribute::Attack), 2.0);
        assert_eq!(
            warrior.growth_per_level.increment(Attribute::ResourceCapacity),
            3.0
        );
        assert_eq!(warrior.growth_per_level.skipped(), ["stamina"]);
    }

    #[test]
    fn accepts_flat_shape_and_fills_missing_names() {
        let pathways: Catalog<ReferenceEntry> = json(
            r#"{
                "The Fool": {"image": "https://example.invalid/fool.png"},
                "sun": {"name": "The Sun"}
            }"#,
        );

        assert_eq!(pathways.display_names(), ["The Fool", "The Sun"]);
        assert_eq!(pathways.find_by_name("the sun").map(|(k, _)| k), Some("sun"));
    }

    #[test]
    fn loads_ron_catalogs() {
        let professions: Catalog<ReferenceEntry> = CatalogLoader::parse(
            r#"{ "professions": { "cook": { "name": "Cook", "description": "Feeds the party." } } }"#,
            DataFormat::Ron,
            Path::new("professions.ron"),
        )
        .unwrap();

        let cook = professions.get("cook").unwrap();
        assert_eq!(cook.name, "Cook");
        assert_eq!(cook.description.as_deref(), Some("Feeds the party."));
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert!(CatalogLoader::load_roles(Path::new("roles.yaml")).is_err());
    }

    #[test]
    fn reads_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roles.json");
        std::fs::write(&path, r#"{"mage": {"name": "Mage"}}"#).unwrap();

        let roles = CatalogLoader::load_roles(&path).unwrap();

        assert_eq!(roles.display_names(), ["Mage"]);
    }

    #[test]
    fn wrong_typed_fields_keep_the_role() {
        let roles: Catalog<RoleDefinition> = json(
            r#"{
                "roles": {
                    "warrior": {
                        "name": "Warrior",
                        "default_resource": "Fury",
                        "growth_per_level": {"attack": 2}
                    },
                    "mage": {"name": "Mage", "image": 42, "growth_per_level": {"magic_power": 3}},
                    "rogue": {"name": "Rogue", "growth_per_level": [1, 2]}
                }
            }"#,
        );

        assert_eq!(roles.display_names(), ["Warrior", "Mage", "Rogue"]);

        let warrior = roles.get("warrior").unwrap();
        assert_eq!(warrior.growth_per_level.increment(Attribute::Attack), 2.0);
        assert_eq!(warrior.resource_kind(), None);

        let mage = roles.get("mage").unwrap();
        assert_eq!(mage.image, None);
        assert_eq!(mage.growth_per_level.increment(Attribute::MagicPower), 3.0);

        assert!(roles.get("rogue").unwrap().growth_per_level.is_empty());
        assert_eq!(roles.find_by_name("rogue").map(|(k, _)| k), Some("rogue"));
    }
}
