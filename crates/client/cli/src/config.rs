//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

/// Configuration required to bootstrap the runtime behind the CLI.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Root of persisted rosters (`<data_dir>/users/<id>.json`).
    pub data_dir: PathBuf,
    /// Directory holding `roles`, `professions` and `pathways` catalogs.
    pub catalog_dir: PathBuf,
    /// Optional TOML game configuration.
    pub config_path: Option<PathBuf>,
    pub command_buffer: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            catalog_dir: data_dir.join("catalogs"),
            data_dir,
            config_path: None,
            command_buffer: 32,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SHEET_DATA_DIR` - Directory for roster records (default: platform data dir)
    /// - `SHEET_CATALOG_DIR` - Directory for catalogs (default: `<data_dir>/catalogs`)
    /// - `SHEET_CONFIG` - Game configuration TOML (default: built-in values)
    /// - `SHEET_COMMAND_BUFFER` - Runtime command queue size (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("SHEET_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
            config.catalog_dir = config.data_dir.join("catalogs");
        }

        if let Some(dir) = env::var_os("SHEET_CATALOG_DIR") {
            config.catalog_dir = PathBuf::from(dir);
        }

        config.config_path = env::var_os("SHEET_CONFIG").map(PathBuf::from);

        if let Some(capacity) = read_env::<usize>("SHEET_COMMAND_BUFFER") {
            config.command_buffer = capacity.max(1);
        }

        config
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "sheet")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".sheet"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
