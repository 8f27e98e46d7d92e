/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum number of characters a single user may own.
    pub max_characters: usize,

    /// Resource label given to characters whose role declares none.
    pub default_resource_kind: String,
}

impl GameConfig {
    // ===== fixed rules =====
    /// Secondary attribute entries honoured per item; later entries are ignored.
    pub const MAX_SECONDARY_ATTRIBUTES: usize = 3;
    /// Lowest level a character can hold.
    pub const MIN_LEVEL: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_CHARACTERS: usize = 4;

    pub fn new() -> Self {
        Self {
            max_characters: Self::DEFAULT_MAX_CHARACTERS,
            default_resource_kind: crate::stats::DEFAULT_RESOURCE_KIND.to_string(),
        }
    }

    pub fn with_max_characters(max_characters: usize) -> Self {
        Self {
            max_characters,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
