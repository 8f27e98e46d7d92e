//! Roster worker that owns the user repository.
//!
//! Every read-modify-write of a user record happens inside this task, one
//! command at a time, so two requests for the same user can never interleave
//! their load and save.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use sheet_content::ReferenceCatalogs;
use sheet_core::{Character, GameConfig, Roster, StatSheet, compute_stats, new_character};

use crate::api::{CharacterOp, Mutation, NewCharacter, Result};
use crate::repository::UserRepository;

/// Commands that can be sent to the roster worker
pub enum Command {
    CreateCharacter {
        user_id: String,
        request: NewCharacter,
        reply: oneshot::Sender<Result<Character>>,
    },
    LoadRoster {
        user_id: String,
        reply: oneshot::Sender<Result<Roster>>,
    },
    /// Resolve a character; `None` selects the user's first character.
    GetCharacter {
        user_id: String,
        name: Option<String>,
        reply: oneshot::Sender<Result<Character>>,
    },
    ComputeStats {
        user_id: String,
        name: Option<String>,
        reply: oneshot::Sender<Result<(Character, StatSheet)>>,
    },
    Mutate {
        user_id: String,
        name: Option<String>,
        op: CharacterOp,
        reply: oneshot::Sender<Result<Mutation>>,
    },
    DeleteCharacter {
        user_id: String,
        name: String,
        reply: oneshot::Sender<Result<Character>>,
    },
}

/// Background task that processes roster commands.
pub struct RosterWorker {
    repository: Box<dyn UserRepository>,
    catalogs: Arc<ReferenceCatalogs>,
    config: GameConfig,
    command_rx: mpsc::Receiver<Command>,
}

impl RosterWorker {
    /// Creates a new roster worker.
    pub fn new(
        repository: Box<dyn UserRepository>,
        catalogs: Arc<ReferenceCatalogs>,
        config: GameConfig,
        command_rx: mpsc::Receiver<Command>,
    ) -> Self {
        Self {
            repository,
            catalogs,
            config,
            command_rx,
        }
    }

    /// Main worker loop. Ends when every handle has been dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::worker", "roster worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::CreateCharacter {
                user_id,
                request,
                reply,
            } => {
                let _ = reply.send(self.create_character(&user_id, request));
            }
            Command::LoadRoster { user_id, reply } => {
                let _ = reply.send(self.repository.load(&user_id).map_err(Into::into));
            }
            Command::GetCharacter {
                user_id,
                name,
                reply,
            } => {
                let _ = reply.send(self.get_character(&user_id, name.as_deref()));
            }
            Command::ComputeStats {
                user_id,
                name,
                reply,
            } => {
                let result = self
                    .get_character(&user_id, name.as_deref())
                    .map(|character| {
                        let sheet = compute_stats(&character);
                        (character, sheet)
                    });
                let _ = reply.send(result);
            }
            Command::Mutate {
                user_id,
                name,
                op,
                reply,
            } => {
                let _ = reply.send(self.mutate(&user_id, name.as_deref(), op));
            }
            Command::DeleteCharacter {
                user_id,
                name,
                reply,
            } => {
                let _ = reply.send(self.delete_character(&user_id, &name));
            }
        }
    }

    fn create_character(&mut self, user_id: &str, request: NewCharacter) -> Result<Character> {
        let mut roster = self.repository.load(user_id)?;
        roster.check_can_create(&request.name, &request.nickname, &self.config)?;

        let character = new_character(
            &request.name,
            &request.nickname,
            request.role.as_deref(),
            request.profession.as_deref(),
            request.nation.as_deref(),
            &self.catalogs.env(),
            &self.config,
        );
        let created = roster.create(character, &self.config)?.clone();
        self.repository.save(user_id, &mut roster)?;

        info!(
            target: "runtime::worker",
            user = user_id,
            character = created.name.as_str(),
            nickname = created.nickname.as_str(),
            role = created.progression.role.name.as_str(),
            total = roster.len(),
            "character created"
        );
        Ok(created)
    }

    fn get_character(&self, user_id: &str, name: Option<&str>) -> Result<Character> {
        let roster = self.repository.load(user_id)?;
        Ok(roster.resolve(name)?.clone())
    }

    fn mutate(&mut self, user_id: &str, name: Option<&str>, op: CharacterOp) -> Result<Mutation> {
        let mut roster = self.repository.load(user_id)?;
        let label = op.label();
        let character = roster.resolve_mut(name)?;
        let displaced = apply_op(character, op, &self.catalogs)?;
        let character = character.clone();

        self.repository.save(user_id, &mut roster)?;

        info!(
            target: "runtime::worker",
            user = user_id,
            character = character.name.as_str(),
            op = label,
            level = character.level,
            experience = character.experience,
            "character updated"
        );
        Ok(Mutation {
            character,
            displaced,
        })
    }

    fn delete_character(&mut self, user_id: &str, name: &str) -> Result<Character> {
        let mut roster = self.repository.load(user_id)?;
        let removed = roster.remove(name)?;
        self.repository.save(user_id, &mut roster)?;

        info!(
            target: "runtime::worker",
            user = user_id,
            character = name,
            remaining = roster.len(),
            "character deleted"
        );
        Ok(removed)
    }
}

/// Applies one operation to a character. On error the character is unchanged.
fn apply_op(
    character: &mut Character,
    op: CharacterOp,
    catalogs: &ReferenceCatalogs,
) -> Result<Option<sheet_core::Item>> {
    let displaced = match op {
        CharacterOp::EquipArtifact { slot, item } => character.equip_artifact(slot, item),
        CharacterOp::UnequipArtifact { slot } => character.unequip_artifact(slot),
        CharacterOp::EquipWeapon { item } => character.equip_weapon(item),
        CharacterOp::UnequipWeapon => character.unequip_weapon(),
        CharacterOp::LearnSkill { skill } => {
            character.learn_skill(skill)?;
            None
        }
        CharacterOp::ForgetSkill { name } => {
            character.forget_skill(&name)?;
            None
        }
        CharacterOp::SetLevel { level } => {
            let (old, new) = character.set_level(level, &catalogs.roles);
            debug!(target: "runtime::worker", old, new, "level changed");
            None
        }
        CharacterOp::AddExperience { delta } => {
            character.add_experience(delta);
            None
        }
    };
    Ok(displaced)
}
