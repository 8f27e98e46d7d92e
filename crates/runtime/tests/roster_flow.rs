//! End-to-end roster flows through the runtime with file persistence.

use sheet_content::{Catalog, ReferenceCatalogs};
use sheet_core::{
    ArtifactSlot, Attribute, CharacterError, GrowthTable, Item, ItemBonus, ReferenceEntry,
    RoleDefinition, RosterError, Skill, SkillCost, SkillKind,
    state::{NO_NATION, NO_PROFESSION, Scaling},
};
use sheet_runtime::{FileUserRepository, NewCharacter, Runtime, RuntimeError, UserRepository};
use tempfile::TempDir;

fn catalogs() -> ReferenceCatalogs {
    ReferenceCatalogs {
        roles: Catalog::new().with(
            "warrior",
            RoleDefinition::new("Warrior")
                .with_default_resource("Rage")
                .with_growth(
                    GrowthTable::new()
                        .with(Attribute::Attack, 2.0)
                        .with(Attribute::Life, 10.0),
                ),
        ),
        professions: Catalog::new().with("smith", ReferenceEntry::new("Blacksmith")),
        pathways: Catalog::new(),
    }
}

fn start(dir: &TempDir) -> Runtime {
    let repository = FileUserRepository::new(dir.path()).expect("repository");
    Runtime::builder()
        .repository(repository)
        .catalogs(catalogs())
        .build()
        .expect("runtime builds")
}

#[tokio::test]
async fn create_resolves_catalog_tracks() {
    let dir = TempDir::new().unwrap();
    let runtime = start(&dir);
    let handle = runtime.handle();

    let created = handle
        .create_character(
            "1001",
            NewCharacter::new("Aria", "aria")
                .role("  WARRIOR ")
                .profession("blacksmith"),
        )
        .await
        .unwrap();

    assert_eq!(created.progression.role.name, "Warrior");
    assert_eq!(created.progression.role.key.as_deref(), Some("warrior"));
    assert_eq!(created.progression.profession.name, "Blacksmith");
    assert_eq!(created.progression.nation.name, NO_NATION);
    assert_eq!(created.attributes.resource_kind(), "Rage");
    assert_eq!(created.level, 1);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn fifth_character_is_rejected_without_writing() {
    let dir = TempDir::new().unwrap();
    let runtime = start(&dir);
    let handle = runtime.handle();

    for i in 0..4 {
        handle
            .create_character("42", NewCharacter::new(format!("Hero{i}"), format!("h{i}")))
            .await
            .unwrap();
    }
    let before = handle.roster("42").await.unwrap();
    assert_eq!(before.len(), 4);

    let err = handle
        .create_character("42", NewCharacter::new("Hero4", "h4"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Roster(RosterError::RosterFull { max: 4 })
    ));
    assert!(err.is_rejection());

    let after = handle.roster("42").await.unwrap();
    assert_eq!(after.revision, before.revision);
    assert_eq!(after.len(), 4);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn nicknames_are_unique_per_user() {
    let dir = TempDir::new().unwrap();
    let runtime = start(&dir);
    let handle = runtime.handle();

    handle
        .create_character("7", NewCharacter::new("One", "shadow"))
        .await
        .unwrap();
    let err = handle
        .create_character("7", NewCharacter::new("Two", "shadow"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Roster(RosterError::DuplicateNickname { .. })
    ));

    // Another user may reuse it.
    handle
        .create_character("8", NewCharacter::new("Two", "shadow"))
        .await
        .unwrap();

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn rosters_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    let runtime = start(&dir);
    runtime
        .handle()
        .create_character("99", NewCharacter::new("Kael", "kael"))
        .await
        .unwrap();
    runtime.shutdown().await.unwrap();

    let repository = FileUserRepository::new(dir.path()).unwrap();
    assert!(repository.exists("99"));

    let runtime = start(&dir);
    let character = runtime.handle().character("99", None).await.unwrap();
    assert_eq!(character.name, "Kael");
    assert_eq!(character.progression.profession.name, NO_PROFESSION);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn set_level_applies_role_growth() {
    let dir = TempDir::new().unwrap();
    let runtime = start(&dir);
    let handle = runtime.handle();

    handle
        .create_character("5", NewCharacter::new("Brom", "brom").role("warrior"))
        .await
        .unwrap();

    let mutation = handle.set_level("5", "Brom", 6).await.unwrap();
    let character = mutation.character;
    assert_eq!(character.level, 6);
    assert_eq!(character.attributes.base(Attribute::Attack), 20.0);
    assert_eq!(character.attributes.base(Attribute::Life), 150.0);

    // Lowering the level never removes growth.
    let lowered = handle.set_level("5", "Brom", 2).await.unwrap().character;
    assert_eq!(lowered.level, 2);
    assert_eq!(lowered.attributes.base(Attribute::Attack), 20.0);

    let clamped = handle.set_level("5", "Brom", -3).await.unwrap().character;
    assert_eq!(clamped.level, 1);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn stats_include_equipped_items() {
    let dir = TempDir::new().unwrap();
    let runtime = start(&dir);
    let handle = runtime.handle();

    handle
        .create_character("3", NewCharacter::new("Vex", "vex"))
        .await
        .unwrap();

    let coin = Item::with_main(ItemBonus::flat(Attribute::Attack, 5.0)).named("Old Coin");
    let first = handle
        .equip_artifact("3", None, ArtifactSlot::Coin, coin.clone())
        .await
        .unwrap();
    assert!(first.displaced.is_none());

    let mut chalice = Item::with_main(ItemBonus::percentage(Attribute::Attack, 0.5));
    chalice.secondary_attributes.push(ItemBonus::flat(Attribute::Armor, 4.0).into());
    handle
        .equip_artifact("3", None, ArtifactSlot::Chalice, chalice)
        .await
        .unwrap();

    let (_, sheet) = handle.stats("3", None).await.unwrap();
    assert_eq!(sheet.breakdown(Attribute::Attack), (15.0, 7.5, 22.5));
    assert_eq!(sheet.total[Attribute::Armor], 4.0);

    let replaced = handle
        .equip_artifact("3", None, ArtifactSlot::Coin, Item::default())
        .await
        .unwrap();
    assert_eq!(replaced.displaced, Some(coin));

    let removed = handle
        .unequip_artifact("3", None, ArtifactSlot::Chalice)
        .await
        .unwrap();
    assert!(removed.displaced.is_some());
    let (_, sheet) = handle.stats("3", None).await.unwrap();
    assert_eq!(sheet.total[Attribute::Attack], 10.0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn skills_are_learned_and_forgotten() {
    let dir = TempDir::new().unwrap();
    let runtime = start(&dir);
    let handle = runtime.handle();

    handle
        .create_character("11", NewCharacter::new("Lira", "lira"))
        .await
        .unwrap();

    let fireball = Skill::learnable(
        "Fireball",
        "Hurls fire",
        SkillKind::Active,
        SkillCost::new("Mana", 20),
        Scaling {
            attribute: Attribute::MagicPower,
            multiplier: 1.2,
        },
    );
    handle
        .learn_skill("11", None, fireball.clone())
        .await
        .unwrap();

    let err = handle
        .learn_skill("11", None, fireball)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Character(CharacterError::DuplicateSkill { .. })
    ));

    let err = handle
        .forget_skill("11", None, "Ice Lance")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Character(CharacterError::SkillNotFound { .. })
    ));

    let mutation = handle.forget_skill("11", None, "Fireball").await.unwrap();
    assert!(mutation.character.skills.learned.is_empty());

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn experience_never_goes_negative() {
    let dir = TempDir::new().unwrap();
    let runtime = start(&dir);
    let handle = runtime.handle();

    handle
        .create_character("12", NewCharacter::new("Odo", "odo"))
        .await
        .unwrap();

    let up = handle.add_experience("12", "Odo", 250).await.unwrap();
    assert_eq!(up.character.experience, 250);

    let down = handle.add_experience("12", "Odo", -1000).await.unwrap();
    assert_eq!(down.character.experience, 0);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn unknown_character_and_delete() {
    let dir = TempDir::new().unwrap();
    let runtime = start(&dir);
    let handle = runtime.handle();

    let err = handle.character("13", None).await.unwrap_err();
    assert!(matches!(err, RuntimeError::Roster(RosterError::NoCharacters)));

    handle
        .create_character("13", NewCharacter::new("Ivo", "ivo"))
        .await
        .unwrap();
    let err = handle.character("13", Some("Nobody")).await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Roster(RosterError::CharacterNotFound { .. })
    ));

    let removed = handle.delete_character("13", "Ivo").await.unwrap();
    assert_eq!(removed.name, "Ivo");
    assert!(handle.roster("13").await.unwrap().is_empty());

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn build_without_repository_fails() {
    let result = Runtime::builder().build();
    assert!(matches!(result, Err(RuntimeError::MissingRepository)));
}
