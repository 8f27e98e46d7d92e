//! Equipment slots: one main weapon and four artifact slots.

use super::error::CharacterError;
use super::item::Item;

/// The four artifact slots.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArtifactSlot {
    Chalice,
    Coin,
    #[strum(to_string = "artifact_weapon", serialize = "artifact-weapon")]
    ArtifactWeapon,
    Staff,
}

impl ArtifactSlot {
    pub const ALL: [ArtifactSlot; 4] = [
        ArtifactSlot::Chalice,
        ArtifactSlot::Coin,
        ArtifactSlot::ArtifactWeapon,
        ArtifactSlot::Staff,
    ];

    /// Parses a user-supplied slot name, ignoring case and surrounding spaces.
    pub fn parse(name: &str) -> Result<Self, CharacterError> {
        name.trim().parse().map_err(|_| CharacterError::InvalidSlot {
            slot: name.to_string(),
        })
    }
}

/// Any slot that can hold an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EquipSlot {
    MainWeapon,
    Artifact(ArtifactSlot),
}

impl core::fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EquipSlot::MainWeapon => f.write_str("main_weapon"),
            EquipSlot::Artifact(slot) => write!(f, "{slot}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Artifacts {
    pub chalice: Option<Item>,
    pub coin: Option<Item>,
    pub artifact_weapon: Option<Item>,
    pub staff: Option<Item>,
}

impl Artifacts {
    pub fn get(&self, slot: ArtifactSlot) -> Option<&Item> {
        match slot {
            ArtifactSlot::Chalice => self.chalice.as_ref(),
            ArtifactSlot::Coin => self.coin.as_ref(),
            ArtifactSlot::ArtifactWeapon => self.artifact_weapon.as_ref(),
            ArtifactSlot::Staff => self.staff.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: ArtifactSlot) -> &mut Option<Item> {
        match slot {
            ArtifactSlot::Chalice => &mut self.chalice,
            ArtifactSlot::Coin => &mut self.coin,
            ArtifactSlot::ArtifactWeapon => &mut self.artifact_weapon,
            ArtifactSlot::Staff => &mut self.staff,
        }
    }
}

/// Items currently equipped by a character.
///
/// Equipping replaces whatever occupied the slot; the displaced item is
/// returned to the caller and is not kept anywhere else.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Equipment {
    pub main_weapon: Option<Item>,
    pub artifacts: Artifacts,
}

impl Equipment {
    pub fn equip_artifact(&mut self, slot: ArtifactSlot, item: Item) -> Option<Item> {
        self.artifacts.slot_mut(slot).replace(item)
    }

    pub fn unequip_artifact(&mut self, slot: ArtifactSlot) -> Option<Item> {
        self.artifacts.slot_mut(slot).take()
    }

    pub fn artifact(&self, slot: ArtifactSlot) -> Option<&Item> {
        self.artifacts.get(slot)
    }

    pub fn equip_weapon(&mut self, item: Item) -> Option<Item> {
        self.main_weapon.replace(item)
    }

    pub fn unequip_weapon(&mut self) -> Option<Item> {
        self.main_weapon.take()
    }

    /// Occupied slots: main weapon first, then artifacts in slot order.
    pub fn equipped(&self) -> impl Iterator<Item = (EquipSlot, &Item)> + '_ {
        let weapon = self
            .main_weapon
            .as_ref()
            .map(|item| (EquipSlot::MainWeapon, item));
        let artifacts = ArtifactSlot::ALL.into_iter().filter_map(move |slot| {
            self.artifacts
                .get(slot)
                .map(|item| (EquipSlot::Artifact(slot), item))
        });
        weapon.into_iter().chain(artifacts)
    }
}
