//! Content factory for building catalogs from a data directory.

use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, ReferenceCatalogs};
use crate::loaders::catalog::LoadedEntry;
use crate::loaders::{CatalogKind, CatalogLoader, LoadResult};

/// Content factory that loads every reference catalog from one directory.
///
/// # Directory Structure
///
/// ```text
/// catalog_dir/
/// ├── roles.json        (or roles.ron)
/// ├── professions.json  (or professions.ron)
/// └── pathways.json     (or pathways.ron)
/// ```
///
/// A missing file yields an empty catalog; a file that exists but cannot be
/// parsed is an error.
pub struct ContentFactory {
    catalog_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(catalog_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog_dir: catalog_dir.into(),
        }
    }

    /// Path of the file backing `kind`, preferring JSON over RON.
    pub fn catalog_path(&self, kind: CatalogKind) -> Option<PathBuf> {
        ["json", "ron"]
            .iter()
            .map(|ext| self.catalog_dir.join(format!("{}.{}", kind.as_str(), ext)))
            .find(|path| path.is_file())
    }

    fn load_kind<T: LoadedEntry>(&self, kind: CatalogKind) -> LoadResult<Catalog<T>> {
        match self.catalog_path(kind) {
            Some(path) => CatalogLoader::load(&path),
            None => {
                tracing::warn!(
                    catalog = %kind,
                    dir = %self.catalog_dir.display(),
                    "catalog file not found; using an empty catalog"
                );
                Ok(Catalog::new())
            }
        }
    }

    pub fn load_catalogs(&self) -> LoadResult<ReferenceCatalogs> {
        Ok(ReferenceCatalogs {
            roles: self.load_kind(CatalogKind::Roles)?,
            professions: self.load_kind(CatalogKind::Professions)?,
            pathways: self.load_kind(CatalogKind::Pathways)?,
        })
    }

    pub fn catalog_dir(&self) -> &Path {
        &self.catalog_dir
    }
}
