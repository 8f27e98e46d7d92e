//! In-memory reference catalogs.

use indexmap::IndexMap;
use sheet_core::env::labels_match;
use sheet_core::{CatalogEntry, CatalogEnv, CatalogOracle, ReferenceEntry, RoleDefinition};

/// One reference catalog, keyed by stable key in file order.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog<T> {
    entries: IndexMap<String, T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> Catalog<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: T) -> Option<T> {
        self.entries.insert(key.into(), entry)
    }

    pub fn with(mut self, key: impl Into<String>, entry: T) -> Self {
        self.insert(key, entry);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T> FromIterator<(String, T)> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T: CatalogEntry + Send + Sync> CatalogOracle<T> for Catalog<T> {
    fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    fn find_by_name(&self, display_name: &str) -> Option<(&str, &T)> {
        self.entries
            .iter()
            .find(|(_, entry)| labels_match(entry.display_name(), display_name))
            .map(|(key, entry)| (key.as_str(), entry))
    }

    fn display_names(&self) -> Vec<String> {
        self.entries
            .values()
            .map(|entry| entry.display_name().to_string())
            .collect()
    }
}

/// The three catalogs character operations consult.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferenceCatalogs {
    pub roles: Catalog<RoleDefinition>,
    pub professions: Catalog<ReferenceEntry>,
    pub pathways: Catalog<ReferenceEntry>,
}

impl ReferenceCatalogs {
    /// Borrows the catalogs as an oracle bundle.
    pub fn env(&self) -> CatalogEnv<'_> {
        CatalogEnv::new(&self.roles, &self.professions, &self.pathways)
    }
}
