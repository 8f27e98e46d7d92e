//! Skill kit: two fixed skills plus the list of learned skills.

use crate::stats::Attribute;

use super::error::CharacterError;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillKind {
    Active,
    Passive,
}

impl SkillKind {
    pub fn parse(name: &str) -> Result<Self, CharacterError> {
        name.trim().parse().map_err(|_| CharacterError::UnknownSkillKind {
            kind: name.to_string(),
        })
    }
}

/// What using a skill costs: a free-form kind ("none", "cooldown", "mana")
/// and an amount.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkillCost {
    pub kind: String,
    pub value: i64,
}

impl SkillCost {
    pub fn new(kind: impl Into<String>, value: i64) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }

    pub fn none() -> Self {
        Self::new("none", 0)
    }
}

/// Attribute a skill scales from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scaling {
    pub attribute: Attribute,
    pub multiplier: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkillBonuses {
    pub damage: f64,
    pub healing: f64,
}

/// Temporary block increase granted by the block skill.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlockEffect {
    pub block_bonus: f64,
    /// Turns the effect lasts.
    pub duration: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: SkillKind,
    #[serde(default = "first_skill_level")]
    pub skill_level: u32,
    pub cost: SkillCost,
    #[serde(default)]
    pub channel_seconds: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling: Option<Scaling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonuses: Option<SkillBonuses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect: Option<BlockEffect>,
}

fn first_skill_level() -> u32 {
    1
}

impl Skill {
    /// A newly learned skill: level 1, no channel time, zero bonuses.
    pub fn learnable(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: SkillKind,
        cost: SkillCost,
        scaling: Scaling,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            skill_level: first_skill_level(),
            cost,
            channel_seconds: 0.0,
            scaling: Some(scaling),
            bonuses: Some(SkillBonuses::default()),
            effect: None,
        }
    }

    pub fn basic_attack() -> Self {
        Self {
            name: "Basic Strike".to_string(),
            description: "A simple attack.".to_string(),
            kind: SkillKind::Active,
            skill_level: first_skill_level(),
            cost: SkillCost::none(),
            channel_seconds: 0.0,
            scaling: Some(Scaling {
                attribute: Attribute::Attack,
                multiplier: 1.0,
            }),
            bonuses: Some(SkillBonuses::default()),
            effect: None,
        }
    }

    pub fn block() -> Self {
        Self {
            name: "Block".to_string(),
            description: "Raises the chance to block for a while.".to_string(),
            kind: SkillKind::Active,
            skill_level: first_skill_level(),
            cost: SkillCost::new("cooldown", 10),
            channel_seconds: 0.0,
            scaling: None,
            bonuses: None,
            effect: Some(BlockEffect {
                block_bonus: 0.1,
                duration: 5,
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SkillKit {
    pub basic_attack: Skill,
    pub block: Skill,
    #[serde(default)]
    pub learned: Vec<Skill>,
}

impl SkillKit {
    /// Adds a learned skill. Names are unique within the learned list.
    pub fn learn(&mut self, skill: Skill) -> Result<(), CharacterError> {
        if self.learned.iter().any(|s| s.name == skill.name) {
            return Err(CharacterError::DuplicateSkill { name: skill.name });
        }
        self.learned.push(skill);
        Ok(())
    }

    /// Removes every learned skill called `name`.
    pub fn forget(&mut self, name: &str) -> Result<(), CharacterError> {
        let before = self.learned.len();
        self.learned.retain(|s| s.name != name);
        if self.learned.len() == before {
            return Err(CharacterError::SkillNotFound {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Skill> {
        self.learned.iter().find(|s| s.name == name)
    }
}

impl Default for SkillKit {
    fn default() -> Self {
        Self {
            basic_attack: Skill::basic_attack(),
            block: Skill::block(),
            learned: Vec::new(),
        }
    }
}
