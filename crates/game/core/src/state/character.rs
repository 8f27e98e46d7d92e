//! Character record and the operations that mutate it.

use crate::config::GameConfig;
use crate::env::{CatalogEntry, CatalogEnv, ReferenceOracle, RoleOracle};
use crate::stats::{AttributeSet, apply_level_growth};

use super::equipment::{ArtifactSlot, Equipment};
use super::error::CharacterError;
use super::item::Item;
use super::skills::{Skill, SkillKit};

pub const NO_ROLE: &str = "No Role";
pub const NO_PROFESSION: &str = "No Profession";
pub const NO_NATION: &str = "No Nation";

/// One progression track (role, profession or nation).
///
/// `name` is the display name shown to users. `key` is the catalog's stable
/// key when the name resolved at creation time; lookups try it first.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub experience: u64,
}

impl Track {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Progression {
    pub role: Track,
    pub profession: Track,
    pub nation: Track,
}

/// Non-negative balances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Money {
    pub cash: u64,
    pub bank: u64,
}

/// A user's character.
///
/// Base attributes only change through leveling; equipment bonuses are
/// layered on at query time by [`crate::stats::compute_stats`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Character {
    pub name: String,
    pub nickname: String,
    pub level: u32,
    #[serde(default)]
    pub experience: u64,
    pub attributes: AttributeSet,
    #[serde(default)]
    pub skills: SkillKit,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub progression: Progression,
    #[serde(default)]
    pub inventory: Vec<Item>,
    #[serde(default)]
    pub money: Money,
}

impl Character {
    pub fn builder(name: impl Into<String>, nickname: impl Into<String>) -> CharacterBuilder {
        CharacterBuilder::new(name, nickname)
    }

    /// Sets the level (clamped to at least 1) and applies role growth when it
    /// rose. Returns `(old_level, new_level)`.
    pub fn set_level(&mut self, level: i64, roles: &RoleOracle) -> (u32, u32) {
        let old = self.level;
        let new = u32::try_from(level.max(i64::from(GameConfig::MIN_LEVEL))).unwrap_or(u32::MAX);
        self.level = new;
        apply_level_growth(self, old, new, roles);
        (old, new)
    }

    /// Adds a signed amount of experience; the result never drops below zero.
    pub fn add_experience(&mut self, delta: i64) -> u64 {
        let current = i128::from(self.experience);
        let next = (current + i128::from(delta)).clamp(0, i128::from(u64::MAX));
        self.experience = next as u64;
        self.experience
    }

    pub fn equip_artifact(&mut self, slot: ArtifactSlot, item: Item) -> Option<Item> {
        self.equipment.equip_artifact(slot, item)
    }

    pub fn unequip_artifact(&mut self, slot: ArtifactSlot) -> Option<Item> {
        self.equipment.unequip_artifact(slot)
    }

    pub fn equip_weapon(&mut self, item: Item) -> Option<Item> {
        self.equipment.equip_weapon(item)
    }

    pub fn unequip_weapon(&mut self) -> Option<Item> {
        self.equipment.unequip_weapon()
    }

    pub fn learn_skill(&mut self, skill: Skill) -> Result<(), CharacterError> {
        self.skills.learn(skill)
    }

    pub fn forget_skill(&mut self, name: &str) -> Result<(), CharacterError> {
        self.skills.forget(name)
    }
}

/// Builder for [`Character`] records with template attributes.
#[derive(Clone, Debug)]
pub struct CharacterBuilder {
    name: String,
    nickname: String,
    level: u32,
    resource_kind: String,
    progression: Progression,
}

impl CharacterBuilder {
    pub fn new(name: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nickname: nickname.into(),
            level: GameConfig::MIN_LEVEL,
            resource_kind: GameConfig::default().default_resource_kind,
            progression: Progression {
                role: Track::named(NO_ROLE),
                profession: Track::named(NO_PROFESSION),
                nation: Track::named(NO_NATION),
            },
        }
    }

    pub fn role(mut self, name: impl Into<String>) -> Self {
        self.progression.role = Track::named(name);
        self
    }

    pub fn profession(mut self, name: impl Into<String>) -> Self {
        self.progression.profession = Track::named(name);
        self
    }

    pub fn nation(mut self, name: impl Into<String>) -> Self {
        self.progression.nation = Track::named(name);
        self
    }

    pub fn progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level.max(GameConfig::MIN_LEVEL);
        self
    }

    pub fn resource_kind(mut self, kind: impl Into<String>) -> Self {
        self.resource_kind = kind.into();
        self
    }

    pub fn build(self) -> Character {
        Character {
            name: self.name,
            nickname: self.nickname,
            level: self.level,
            experience: 0,
            attributes: AttributeSet::template(self.resource_kind),
            skills: SkillKit::default(),
            equipment: Equipment::default(),
            progression: self.progression,
            inventory: Vec::new(),
            money: Money::default(),
        }
    }
}

fn selected(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

fn reference_track(
    selection: Option<&str>,
    placeholder: &str,
    catalog: &ReferenceOracle,
) -> Track {
    let Some(name) = selected(selection) else {
        return Track::named(placeholder);
    };
    match catalog.find_by_name(name) {
        Some((key, entry)) => Track::named(entry.display_name()).with_key(key),
        None => Track::named(name),
    }
}

/// Creates a level-1 character from the attribute template.
///
/// Tracks that were skipped get a placeholder name. Selections that match a
/// catalog entry store its display name and key; unknown selections are kept
/// as typed. The resource kind comes from the role's default resource.
pub fn new_character(
    name: &str,
    nickname: &str,
    role: Option<&str>,
    profession: Option<&str>,
    nation: Option<&str>,
    catalogs: &CatalogEnv<'_>,
    config: &GameConfig,
) -> Character {
    let mut resource_kind = config.default_resource_kind.clone();

    let role_track = match selected(role) {
        None => Track::named(NO_ROLE),
        Some(role_name) => match catalogs.roles().find_by_name(role_name) {
            Some((key, definition)) => {
                if let Some(kind) = definition.resource_kind() {
                    resource_kind = kind.to_string();
                }
                Track::named(definition.display_name()).with_key(key)
            }
            None => Track::named(role_name),
        },
    };

    Character::builder(name.trim(), nickname.trim())
        .resource_kind(resource_kind)
        .progression(Progression {
            role: role_track,
            profession: reference_track(profession, NO_PROFESSION, catalogs.professions()),
            nation: reference_track(nation, NO_NATION, catalogs.pathways()),
        })
        .build()
}
