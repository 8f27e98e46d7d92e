//! Authoritative character state.
//!
//! This module owns the persisted records: characters with their equipment,
//! skills and progression, and the per-user roster that holds them. Runtime
//! layers load and save these records but mutate them only through the
//! operations defined here.
mod character;
mod equipment;
mod error;
mod item;
mod roster;
mod skills;

pub use character::{
    Character, CharacterBuilder, Money, NO_NATION, NO_PROFESSION, NO_ROLE, Progression, Track,
    new_character,
};
pub use equipment::{ArtifactSlot, Artifacts, EquipSlot, Equipment};
pub use error::{CharacterError, RosterError};
pub use item::Item;
pub use roster::Roster;
pub use skills::{BlockEffect, Scaling, Skill, SkillBonuses, SkillCost, SkillKind, SkillKit};
