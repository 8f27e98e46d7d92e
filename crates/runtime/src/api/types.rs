//! Request and reply payloads exchanged with the roster worker.

use sheet_core::{ArtifactSlot, Character, Item, Skill};

/// Parameters of a character creation request.
///
/// Tracks left as `None` (or blank) get placeholder names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub nickname: String,
    pub role: Option<String>,
    pub profession: Option<String>,
    pub nation: Option<String>,
}

impl NewCharacter {
    pub fn new(name: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nickname: nickname.into(),
            ..Self::default()
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = Some(profession.into());
        self
    }

    pub fn nation(mut self, nation: impl Into<String>) -> Self {
        self.nation = Some(nation.into());
        self
    }
}

/// A change applied to one character of a roster.
#[derive(Clone, Debug, PartialEq)]
pub enum CharacterOp {
    EquipArtifact { slot: ArtifactSlot, item: Item },
    UnequipArtifact { slot: ArtifactSlot },
    EquipWeapon { item: Item },
    UnequipWeapon,
    LearnSkill { skill: Skill },
    ForgetSkill { name: String },
    /// Staff: set the level; growth applies only when it rises.
    SetLevel { level: i64 },
    /// Staff: signed experience correction.
    AddExperience { delta: i64 },
}

impl CharacterOp {
    pub fn label(&self) -> &'static str {
        match self {
            CharacterOp::EquipArtifact { .. } => "equip_artifact",
            CharacterOp::UnequipArtifact { .. } => "unequip_artifact",
            CharacterOp::EquipWeapon { .. } => "equip_weapon",
            CharacterOp::UnequipWeapon => "unequip_weapon",
            CharacterOp::LearnSkill { .. } => "learn_skill",
            CharacterOp::ForgetSkill { .. } => "forget_skill",
            CharacterOp::SetLevel { .. } => "set_level",
            CharacterOp::AddExperience { .. } => "add_experience",
        }
    }
}

/// Result of a successful [`CharacterOp`].
#[derive(Clone, Debug, PartialEq)]
pub struct Mutation {
    /// The character after the change was saved.
    pub character: Character,
    /// Item that left an equipment slot, if any.
    pub displaced: Option<Item>,
}
