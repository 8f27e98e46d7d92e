//! Traits describing read-only reference data.
//!
//! Oracles expose the role, profession and pathway catalogs. The
//! [`CatalogEnv`] aggregate bundles them so character operations can access
//! everything they need without hard coupling to concrete loaders.
mod catalog;

pub use catalog::{
    CatalogEntry, CatalogOracle, DefaultResource, EmptyCatalog, ReferenceEntry, RoleDefinition,
    labels_match, normalize_label,
};

/// Role catalog as a trait object.
pub type RoleOracle = dyn CatalogOracle<RoleDefinition>;

/// Profession or pathway catalog as a trait object.
pub type ReferenceOracle = dyn CatalogOracle<ReferenceEntry>;

/// Aggregates the read-only catalogs consulted by character operations.
#[derive(Clone, Copy)]
pub struct CatalogEnv<'a> {
    roles: &'a RoleOracle,
    professions: &'a ReferenceOracle,
    pathways: &'a ReferenceOracle,
}

impl<'a> CatalogEnv<'a> {
    pub fn new(
        roles: &'a RoleOracle,
        professions: &'a ReferenceOracle,
        pathways: &'a ReferenceOracle,
    ) -> Self {
        Self {
            roles,
            professions,
            pathways,
        }
    }

    /// Environment where every catalog lookup misses.
    pub fn empty() -> CatalogEnv<'static> {
        static EMPTY: EmptyCatalog = EmptyCatalog;
        CatalogEnv::new(&EMPTY, &EMPTY, &EMPTY)
    }

    pub fn roles(&self) -> &'a RoleOracle {
        self.roles
    }

    pub fn professions(&self) -> &'a ReferenceOracle {
        self.professions
    }

    /// Pathways are the nation-equivalent catalog.
    pub fn pathways(&self) -> &'a ReferenceOracle {
        self.pathways
    }
}

impl core::fmt::Debug for CatalogEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogEnv")
            .field("roles", &self.roles.display_names())
            .field("professions", &self.professions.display_names())
            .field("pathways", &self.pathways.display_names())
            .finish()
    }
}
