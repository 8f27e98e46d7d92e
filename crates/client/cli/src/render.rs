//! Plain-text rendering of characters, stat sheets and catalogs.

use std::fmt::Write;

use sheet_core::{ArtifactSlot, Attribute, Character, Item, Roster, StatSheet};
use sheet_runtime::Mutation;

/// Whole numbers print without decimals, everything else with two.
fn number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

fn slot_line(out: &mut String, label: &str, item: Option<&Item>) {
    let _ = writeln!(out, "  {label:<16} {}", item.map_or("-", Item::label));
}

pub fn character(character: &Character) -> String {
    let mut out = String::new();
    let progression = &character.progression;

    let _ = writeln!(out, "{} ({})", character.name, character.nickname);
    let _ = writeln!(
        out,
        "Level {}  XP {}",
        character.level, character.experience
    );
    let _ = writeln!(
        out,
        "Role: {} (level {})",
        progression.role.name, progression.role.level
    );
    let _ = writeln!(
        out,
        "Profession: {} (level {})",
        progression.profession.name, progression.profession.level
    );
    let _ = writeln!(
        out,
        "Nation: {} (level {})",
        progression.nation.name, progression.nation.level
    );
    let _ = writeln!(out, "Resource: {}", character.attributes.resource_kind());
    let _ = writeln!(
        out,
        "Money: {} cash, {} bank",
        character.money.cash, character.money.bank
    );

    let _ = writeln!(out, "Equipment:");
    slot_line(
        &mut out,
        "main_weapon",
        character.equipment.main_weapon.as_ref(),
    );
    for slot in ArtifactSlot::ALL {
        slot_line(&mut out, slot.as_ref(), character.equipment.artifact(slot));
    }

    let skills = &character.skills;
    let _ = writeln!(out, "Skills:");
    let _ = writeln!(out, "  {}", skills.basic_attack.name);
    let _ = writeln!(out, "  {}", skills.block.name);
    for skill in &skills.learned {
        let _ = writeln!(
            out,
            "  {} [{}] lv{}",
            skill.name, skill.kind, skill.skill_level
        );
    }

    out.trim_end().to_string()
}

/// Table of base, additional and total values per attribute.
pub fn stats(character: &Character, sheet: &StatSheet) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) - level {}",
        character.name, character.nickname, character.level
    );
    let _ = writeln!(
        out,
        "{:<18} {:>10} {:>10} {:>10}",
        "attribute", "base", "additional", "total"
    );

    for attribute in Attribute::ALL {
        let (base, additional, total) = sheet.breakdown(attribute);
        let label = match attribute {
            Attribute::ResourceCapacity => {
                format!("{} capacity", character.attributes.resource_kind().to_lowercase())
            }
            _ => attribute.to_string(),
        };
        let _ = writeln!(
            out,
            "{label:<18} {:>10} {:>10} {:>10}",
            number(base),
            number(additional),
            number(total)
        );
    }

    out.trim_end().to_string()
}

pub fn roster(roster: &Roster) -> String {
    if roster.is_empty() {
        return "No characters.".to_string();
    }
    roster
        .characters
        .values()
        .map(|c| format!("{} ({}) - level {}", c.name, c.nickname, c.level))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn mutation(action: &str, mutation: &Mutation) -> String {
    let character = &mutation.character;
    let mut out = format!("{action}: {} (level {})", character.name, character.level);
    if let Some(item) = &mutation.displaced {
        let _ = write!(out, "\nReturned item: {}", item.label());
    }
    out
}

pub fn names(title: &str, names: &[String]) -> String {
    if names.is_empty() {
        return format!("No {title} available.");
    }
    let mut out = format!("{title}:");
    for name in names {
        let _ = write!(out, "\n  {name}");
    }
    out
}
