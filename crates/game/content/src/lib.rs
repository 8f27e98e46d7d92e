//! Reference data and configuration loaders.
//!
//! This crate houses the in-memory reference catalogs and the loaders that
//! build them from files:
//! - Roles, professions and pathways (JSON or RON)
//! - Game configuration (TOML)
//!
//! Catalogs are consumed through the `sheet-core` oracle traits and never
//! appear in character records.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Catalog, ReferenceCatalogs};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogKind, CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
