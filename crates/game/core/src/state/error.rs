//! Character and roster errors.
//!
//! Every variant describes a rejected operation; the record it targeted is
//! left exactly as it was.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised by operations on a single character.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    /// Slot name does not match any artifact slot.
    #[error("invalid artifact slot '{slot}' (expected chalice, coin, artifact_weapon or staff)")]
    InvalidSlot { slot: String },

    /// Item payload could not be parsed as a JSON object.
    #[error("invalid item: {reason}")]
    InvalidItem { reason: String },

    /// Skill scaling names an attribute that does not exist.
    #[error("unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    /// Skill kind is neither active nor passive.
    #[error("unknown skill kind '{kind}' (expected active or passive)")]
    UnknownSkillKind { kind: String },

    /// A learned skill with the same name already exists.
    #[error("skill '{name}' is already learned")]
    DuplicateSkill { name: String },

    /// No learned skill has this name.
    #[error("skill '{name}' not found")]
    SkillNotFound { name: String },
}

impl GameError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        use CharacterError::*;
        match self {
            InvalidSlot { .. }
            | InvalidItem { .. }
            | UnknownAttribute { .. }
            | UnknownSkillKind { .. }
            | DuplicateSkill { .. } => ErrorSeverity::Validation,

            SkillNotFound { .. } => ErrorSeverity::NotFound,
        }
    }

    fn error_code(&self) -> &'static str {
        use CharacterError::*;
        match self {
            InvalidSlot { .. } => "CHARACTER_INVALID_SLOT",
            InvalidItem { .. } => "CHARACTER_INVALID_ITEM",
            UnknownAttribute { .. } => "CHARACTER_UNKNOWN_ATTRIBUTE",
            UnknownSkillKind { .. } => "CHARACTER_UNKNOWN_SKILL_KIND",
            DuplicateSkill { .. } => "CHARACTER_DUPLICATE_SKILL",
            SkillNotFound { .. } => "CHARACTER_SKILL_NOT_FOUND",
        }
    }
}

/// Errors raised by roster (per-user collection) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// Creating another character would exceed the configured cap.
    #[error("roster is full (max: {max})")]
    RosterFull { max: usize },

    /// A character with this name already exists.
    #[error("a character named '{name}' already exists")]
    DuplicateName { name: String },

    /// Another character of the same user already uses this nickname.
    #[error("nickname '{nickname}' is already used by another character")]
    DuplicateNickname { nickname: String },

    /// Name or nickname was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// The user owns no characters.
    #[error("no characters found; create one first")]
    NoCharacters,

    /// No character has this name.
    #[error("character '{name}' not found")]
    CharacterNotFound { name: String },
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        use RosterError::*;
        match self {
            RosterFull { .. }
            | DuplicateName { .. }
            | DuplicateNickname { .. }
            | EmptyField { .. } => ErrorSeverity::Validation,

            NoCharacters | CharacterNotFound { .. } => ErrorSeverity::NotFound,
        }
    }

    fn error_code(&self) -> &'static str {
        use RosterError::*;
        match self {
            RosterFull { .. } => "ROSTER_FULL",
            DuplicateName { .. } => "ROSTER_DUPLICATE_NAME",
            DuplicateNickname { .. } => "ROSTER_DUPLICATE_NICKNAME",
            EmptyField { .. } => "ROSTER_EMPTY_FIELD",
            NoCharacters => "ROSTER_NO_CHARACTERS",
            CharacterNotFound { .. } => "ROSTER_CHARACTER_NOT_FOUND",
        }
    }
}
