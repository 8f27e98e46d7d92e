//! Content loaders for reading reference data and configuration from files.
//!
//! Catalogs are read from JSON or RON (chosen by file extension), the game
//! configuration from TOML.

pub mod catalog;
pub mod config;
pub mod factory;

pub use catalog::{CatalogKind, CatalogLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Data file syntax, picked from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Ron,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(DataFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Ok(DataFormat::Ron),
            _ => Err(anyhow::anyhow!(
                "Unsupported data file {} (expected .json or .ron)",
                path.display()
            )),
        }
    }

    pub(crate) fn parse<T: serde::de::DeserializeOwned>(
        self,
        content: &str,
        path: &Path,
    ) -> LoadResult<T> {
        match self {
            DataFormat::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse JSON at {}: {}", path.display(), e)),
            DataFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse RON at {}: {}", path.display(), e)),
        }
    }
}
