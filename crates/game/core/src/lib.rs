//! Deterministic character-sheet logic shared by the runtime and clients.
//!
//! `sheet-core` defines the canonical rules (attribute template, item bonuses,
//! stat aggregation, role leveling) and the character and roster records they
//! operate on. Everything here is pure: no I/O, no logging, no clocks.
//! Reference data is reached through the oracle traits in [`env`].
pub mod config;
pub mod env;
pub mod error;
mod lenient;
pub mod state;
pub mod stats;

pub use config::GameConfig;
pub use env::{
    CatalogEntry, CatalogEnv, CatalogOracle, DefaultResource, EmptyCatalog, ReferenceEntry,
    ReferenceOracle, RoleDefinition, RoleOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ArtifactSlot, Character, CharacterError, EquipSlot, Equipment, Item, Roster, RosterError,
    Skill, SkillCost, SkillKind, Track, new_character,
};
pub use stats::{
    Attribute, AttributeMap, AttributeSet, BonusEntry, BonusKind, GrowthTable, ItemBonus,
    ItemBonuses, StatSheet, apply_level_growth, compute_stats, extract_item_bonuses,
};
