//! Command-line surface and dispatch onto the runtime handle.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use sheet_core::state::Scaling;
use sheet_core::{
    ArtifactSlot, Attribute, CatalogOracle, CharacterError, Item, Skill, SkillCost, SkillKind,
};
use sheet_runtime::{NewCharacter, RosterHandle};

use crate::render;

#[derive(Debug, Parser)]
#[command(name = "sheet", version, about = "Character sheets, equipment and rosters")]
pub struct Cli {
    /// User whose roster is addressed
    #[arg(long, short, global = true, default_value = "local")]
    pub user: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a character
    Create {
        name: String,
        nickname: String,
        #[command(flatten)]
        tracks: TrackArgs,
    },
    /// Show a character or its stat sheet
    Show {
        #[arg(value_enum, default_value_t = View::Basic)]
        view: View,
        #[command(flatten)]
        target: CharacterArg,
    },
    /// List the user's characters
    List,
    /// Equip an item (JSON object) into an artifact slot
    EquipArtifact {
        slot: String,
        item: String,
        #[command(flatten)]
        target: CharacterArg,
    },
    UnequipArtifact {
        slot: String,
        #[command(flatten)]
        target: CharacterArg,
    },
    /// Equip an item (JSON object) as main weapon
    EquipWeapon {
        item: String,
        #[command(flatten)]
        target: CharacterArg,
    },
    UnequipWeapon {
        #[command(flatten)]
        target: CharacterArg,
    },
    #[command(subcommand)]
    Skill(SkillCommand),
    /// Staff operations on any user's roster
    #[command(subcommand)]
    Staff(StaffCommand),
    #[command(subcommand)]
    Catalog(CatalogCommand),
}

#[derive(Debug, Args)]
pub struct TrackArgs {
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub profession: Option<String>,
    #[arg(long)]
    pub nation: Option<String>,
}

/// Character to act on; the first character of the roster when omitted.
#[derive(Debug, Args)]
pub struct CharacterArg {
    #[arg(long = "name")]
    pub character: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    Basic,
    Stats,
}

#[derive(Debug, Subcommand)]
pub enum SkillCommand {
    /// Learn a skill
    Add {
        name: String,
        description: String,
        kind: String,
        cost_kind: String,
        #[arg(allow_negative_numbers = true)]
        cost_value: i64,
        attribute: String,
        multiplier: f64,
        #[command(flatten)]
        target: CharacterArg,
    },
    /// Forget a learned skill
    Remove {
        name: String,
        #[command(flatten)]
        target: CharacterArg,
    },
}

#[derive(Debug, Subcommand)]
pub enum StaffCommand {
    /// Create a character for another user
    Create {
        target_user: String,
        name: String,
        nickname: String,
        #[command(flatten)]
        tracks: TrackArgs,
    },
    Delete {
        target_user: String,
        name: String,
    },
    SetLevel {
        target_user: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
    AddXp {
        target_user: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    List {
        #[arg(value_enum)]
        kind: CatalogArg,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CatalogArg {
    Roles,
    Professions,
    Pathways,
}

fn new_character(name: String, nickname: String, tracks: TrackArgs) -> NewCharacter {
    NewCharacter {
        name,
        nickname,
        role: tracks.role,
        profession: tracks.profession,
        nation: tracks.nation,
    }
}

fn parse_skill(
    name: String,
    description: String,
    kind: &str,
    cost_kind: String,
    cost_value: i64,
    attribute: &str,
    multiplier: f64,
) -> Result<Skill> {
    let kind = SkillKind::parse(kind)?;
    let attribute = Attribute::parse(attribute).ok_or_else(|| CharacterError::UnknownAttribute {
        name: attribute.to_string(),
    })?;
    Ok(Skill::learnable(
        name,
        description,
        kind,
        SkillCost::new(cost_kind, cost_value),
        Scaling {
            attribute,
            multiplier,
        },
    ))
}

/// Runs one command and returns the text to print.
pub async fn execute(handle: &RosterHandle, cli: Cli) -> Result<String> {
    let user = cli.user.as_str();

    let output = match cli.command {
        Command::Create {
            name,
            nickname,
            tracks,
        } => {
            let created = handle
                .create_character(user, new_character(name, nickname, tracks))
                .await?;
            format!("Created character:\n{}", render::character(&created))
        }
        Command::Show { view, target } => {
            let name = target.character.as_deref();
            match view {
                View::Basic => render::character(&handle.character(user, name).await?),
                View::Stats => {
                    let (character, sheet) = handle.stats(user, name).await?;
                    render::stats(&character, &sheet)
                }
            }
        }
        Command::List => render::roster(&handle.roster(user).await?),
        Command::EquipArtifact { slot, item, target } => {
            let slot = ArtifactSlot::parse(&slot)?;
            let item = Item::from_json(&item)?;
            let mutation = handle
                .equip_artifact(user, target.character.as_deref(), slot, item)
                .await?;
            render::mutation(&format!("Equipped {slot}"), &mutation)
        }
        Command::UnequipArtifact { slot, target } => {
            let slot = ArtifactSlot::parse(&slot)?;
            let mutation = handle
                .unequip_artifact(user, target.character.as_deref(), slot)
                .await?;
            render::mutation(&format!("Unequipped {slot}"), &mutation)
        }
        Command::EquipWeapon { item, target } => {
            let item = Item::from_json(&item)?;
            let mutation = handle
                .equip_weapon(user, target.character.as_deref(), item)
                .await?;
            render::mutation("Equipped main weapon", &mutation)
        }
        Command::UnequipWeapon { target } => {
            let mutation = handle
                .unequip_weapon(user, target.character.as_deref())
                .await?;
            render::mutation("Unequipped main weapon", &mutation)
        }
        Command::Skill(SkillCommand::Add {
            name,
            description,
            kind,
            cost_kind,
            cost_value,
            attribute,
            multiplier,
            target,
        }) => {
            let skill = parse_skill(
                name,
                description,
                &kind,
                cost_kind,
                cost_value,
                &attribute,
                multiplier,
            )?;
            let label = format!("Learned {}", skill.name);
            let mutation = handle
                .learn_skill(user, target.character.as_deref(), skill)
                .await?;
            render::mutation(&label, &mutation)
        }
        Command::Skill(SkillCommand::Remove { name, target }) => {
            let mutation = handle
                .forget_skill(user, target.character.as_deref(), &name)
                .await?;
            render::mutation(&format!("Forgot {name}"), &mutation)
        }
        Command::Staff(staff) => execute_staff(handle, staff).await?,
        Command::Catalog(CatalogCommand::List { kind }) => {
            let catalogs = handle.catalogs();
            match kind {
                CatalogArg::Roles => render::names("roles", &catalogs.roles.display_names()),
                CatalogArg::Professions => {
                    render::names("professions", &catalogs.professions.display_names())
                }
                CatalogArg::Pathways => {
                    render::names("pathways", &catalogs.pathways.display_names())
                }
            }
        }
    };

    Ok(output)
}

async fn execute_staff(handle: &RosterHandle, command: StaffCommand) -> Result<String> {
    let output = match command {
        StaffCommand::Create {
            target_user,
            name,
            nickname,
            tracks,
        } => {
            let created = handle
                .create_character(&target_user, new_character(name, nickname, tracks))
                .await?;
            format!(
                "Created character for {target_user}:\n{}",
                render::character(&created)
            )
        }
        StaffCommand::Delete { target_user, name } => {
            let removed = handle.delete_character(&target_user, &name).await?;
            format!("Deleted {} from {target_user}", removed.name)
        }
        StaffCommand::SetLevel {
            target_user,
            name,
            level,
        } => {
            let mutation = handle.set_level(&target_user, &name, level).await?;
            render::mutation("Level set", &mutation)
        }
        StaffCommand::AddXp {
            target_user,
            name,
            delta,
        } => {
            let mutation = handle.add_experience(&target_user, &name, delta).await?;
            format!(
                "{}\nExperience: {}",
                render::mutation("Experience changed", &mutation),
                mutation.character.experience
            )
        }
    };
    Ok(output)
}
