//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RosterHandle`] hides channel plumbing and offers async helpers for every
//! character operation. Requests from all clones are serialized by the single
//! roster worker.
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use sheet_content::ReferenceCatalogs;
use sheet_core::{ArtifactSlot, Character, Item, Roster, Skill, StatSheet};

use super::errors::{Result, RuntimeError};
use super::types::{CharacterOp, Mutation, NewCharacter};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RosterHandle {
    command_tx: mpsc::Sender<Command>,
    catalogs: Arc<ReferenceCatalogs>,
}

impl RosterHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, catalogs: Arc<ReferenceCatalogs>) -> Self {
        Self {
            command_tx,
            catalogs,
        }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T>>) -> Command,
    ) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Create a character for `user_id` (also used by staff on behalf of a user).
    pub async fn create_character(
        &self,
        user_id: &str,
        request: NewCharacter,
    ) -> Result<Character> {
        self.request(|reply| Command::CreateCharacter {
            user_id: user_id.to_string(),
            request,
            reply,
        })
        .await
    }

    /// Full roster record of a user.
    pub async fn roster(&self, user_id: &str) -> Result<Roster> {
        self.request(|reply| Command::LoadRoster {
            user_id: user_id.to_string(),
            reply,
        })
        .await
    }

    /// The named character, or the user's first one when `name` is `None`.
    pub async fn character(&self, user_id: &str, name: Option<&str>) -> Result<Character> {
        self.request(|reply| Command::GetCharacter {
            user_id: user_id.to_string(),
            name: name.map(str::to_string),
            reply,
        })
        .await
    }

    /// Character together with its computed stat sheet.
    pub async fn stats(&self, user_id: &str, name: Option<&str>) -> Result<(Character, StatSheet)> {
        self.request(|reply| Command::ComputeStats {
            user_id: user_id.to_string(),
            name: name.map(str::to_string),
            reply,
        })
        .await
    }

    /// Apply an operation to a character and persist the result.
    pub async fn mutate(
        &self,
        user_id: &str,
        name: Option<&str>,
        op: CharacterOp,
    ) -> Result<Mutation> {
        self.request(|reply| Command::Mutate {
            user_id: user_id.to_string(),
            name: name.map(str::to_string),
            op,
            reply,
        })
        .await
    }

    pub async fn equip_artifact(
        &self,
        user_id: &str,
        name: Option<&str>,
        slot: ArtifactSlot,
        item: Item,
    ) -> Result<Mutation> {
        self.mutate(user_id, name, CharacterOp::EquipArtifact { slot, item })
            .await
    }

    pub async fn unequip_artifact(
        &self,
        user_id: &str,
        name: Option<&str>,
        slot: ArtifactSlot,
    ) -> Result<Mutation> {
        self.mutate(user_id, name, CharacterOp::UnequipArtifact { slot })
            .await
    }

    pub async fn equip_weapon(
        &self,
        user_id: &str,
        name: Option<&str>,
        item: Item,
    ) -> Result<Mutation> {
        self.mutate(user_id, name, CharacterOp::EquipWeapon { item })
            .await
    }

    pub async fn unequip_weapon(&self, user_id: &str, name: Option<&str>) -> Result<Mutation> {
        self.mutate(user_id, name, CharacterOp::UnequipWeapon).await
    }

    pub async fn learn_skill(
        &self,
        user_id: &str,
        name: Option<&str>,
        skill: Skill,
    ) -> Result<Mutation> {
        self.mutate(user_id, name, CharacterOp::LearnSkill { skill })
            .await
    }

    pub async fn forget_skill(
        &self,
        user_id: &str,
        name: Option<&str>,
        skill_name: &str,
    ) -> Result<Mutation> {
        self.mutate(
            user_id,
            name,
            CharacterOp::ForgetSkill {
                name: skill_name.to_string(),
            },
        )
        .await
    }

    /// Staff: set a character's level.
    pub async fn set_level(&self, user_id: &str, name: &str, level: i64) -> Result<Mutation> {
        self.mutate(user_id, Some(name), CharacterOp::SetLevel { level })
            .await
    }

    /// Staff: add (or remove) experience.
    pub async fn add_experience(&self, user_id: &str, name: &str, delta: i64) -> Result<Mutation> {
        self.mutate(user_id, Some(name), CharacterOp::AddExperience { delta })
            .await
    }

    /// Staff: delete a character.
    pub async fn delete_character(&self, user_id: &str, name: &str) -> Result<Character> {
        self.request(|reply| Command::DeleteCharacter {
            user_id: user_id.to_string(),
            name: name.to_string(),
            reply,
        })
        .await
    }

    /// Reference catalogs the runtime was built with.
    pub fn catalogs(&self) -> &ReferenceCatalogs {
        &self.catalogs
    }
}
