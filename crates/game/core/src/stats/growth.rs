//! Role growth tables and the leveling engine.
//!
//! A role declares how much each attribute grows per level gained. Growth is
//! the only thing that writes base attribute values after creation.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::env::RoleOracle;
use crate::lenient::Numeric;
use crate::state::Character;

use super::attribute::Attribute;

/// Per-level attribute increments declared by a role.
///
/// Deserialization is lenient: entries with an unknown attribute name or a
/// non-numeric increment are dropped and their keys remembered in
/// [`GrowthTable::skipped`], so a single bad entry never invalidates a role.
/// A table that is not a map at all decodes as empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GrowthTable {
    increments: IndexMap<Attribute, f64>,
    skipped: Vec<String>,
}

impl GrowthTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `increment` to the per-level growth of `attribute`.
    pub fn with(mut self, attribute: Attribute, increment: f64) -> Self {
        *self.increments.entry(attribute).or_insert(0.0) += increment;
        self
    }

    /// Valid `(attribute, increment)` pairs in declaration order.
    pub fn increments(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        self.increments.iter().map(|(a, v)| (*a, *v))
    }

    pub fn increment(&self, attribute: Attribute) -> f64 {
        self.increments.get(&attribute).copied().unwrap_or(0.0)
    }

    /// Keys that were present in the source data but could not be used.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.increments.is_empty()
    }

    fn from_raw(raw: IndexMap<String, RawIncrement>) -> Self {
        let mut table = Self::new();
        for (key, value) in raw {
            match (Attribute::parse(&key), value.as_number()) {
                (Some(attribute), Some(increment)) => {
                    *table.increments.entry(attribute).or_insert(0.0) += increment;
                }
                _ => table.skipped.push(key),
            }
        }
        table
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawIncrement {
    Numeric(Numeric),
    Other(serde::de::IgnoredAny),
}

impl RawIncrement {
    fn as_number(&self) -> Option<f64> {
        match self {
            RawIncrement::Numeric(n) => n.as_number(),
            RawIncrement::Other(_) => None,
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawTable {
    Map(IndexMap<String, RawIncrement>),
    Other(serde::de::IgnoredAny),
}

impl serde::Serialize for GrowthTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.increments.iter())
    }
}

impl<'de> serde::Deserialize<'de> for GrowthTable {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawTable::deserialize(deserializer)? {
            RawTable::Map(raw) => Self::from_raw(raw),
            RawTable::Other(_) => Self::default(),
        })
    }
}

/// Applies role growth for a level change from `old_level` to `new_level`.
///
/// Every valid growth entry of the character's role adds
/// `increment × (new_level − old_level)` to the matching base value. Nothing
/// happens when the level did not rise or the role cannot be resolved.
pub fn apply_level_growth(
    character: &mut Character,
    old_level: u32,
    new_level: u32,
    roles: &RoleOracle,
) {
    if new_level <= old_level {
        return;
    }

    let track = &character.progression.role;
    let Some(role) = roles.resolve(track.key.as_deref(), &track.name) else {
        return;
    };

    let levels_gained = f64::from(new_level - old_level);
    for (attribute, increment) in role.growth_per_level.increments() {
        character
            .attributes
            .add_base(attribute, increment * levels_gained);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CatalogOracle, EmptyCatalog, RoleDefinition, labels_match};
    use serde_json::json;

    struct OneRole {
        key: &'static str,
        role: RoleDefinition,
    }

    impl CatalogOracle<RoleDefinition> for OneRole {
        fn get(&self, key: &str) -> Option<&RoleDefinition> {
            (key == self.key).then_some(&self.role)
        }

        fn find_by_name(&self, display_name: &str) -> Option<(&str, &RoleDefinition)> {
            labels_match(&self.role.name, display_name).then_some((self.key, &self.role))
        }

        fn display_names(&self) -> Vec<String> {
            vec![self.role.name.clone()]
        }
    }

    fn warrior() -> OneRole {
        OneRole {
            key: "warrior",
            role: RoleDefinition::new("Warrior").with_growth(
                GrowthTable::new()
                    .with(Attribute::Attack, 2.0)
                    .with(Attribute::ResourceCapacity, 5.0),
            ),
        }
    }

    fn character_with_role(name: &str) -> Character {
        Character::builder("Aria", "Ari").role(name).build()
    }

    #[test]
    fn level_one_to_six_adds_five_increments() {
        let roles = warrior();
        let mut ch = character_with_role("Warrior");

        apply_level_growth(&mut ch, 1, 6, &roles);

        assert_eq!(ch.attributes.base(Attribute::Attack), 20.0);
        assert_eq!(ch.attributes.base(Attribute::ResourceCapacity), 75.0);
        assert_eq!(ch.attributes.base(Attribute::Life), 100.0);
    }

    #[test]
    fn lowering_or_keeping_the_level_is_a_no_op() {
        let roles = warrior();
        let mut ch = character_with_role("Warrior");
        let before = ch.clone();

        apply_level_growth(&mut ch, 5, 5, &roles);
        apply_level_growth(&mut ch, 5, 2, &roles);

        assert_eq!(ch, before);
    }

    #[test]
    fn unknown_role_is_a_silent_no_op() {
        let mut ch = character_with_role("Bard");
        let before = ch.clone();

        apply_level_growth(&mut ch, 1, 10, &warrior());
        apply_level_growth(&mut ch, 1, 10, &EmptyCatalog);

        assert_eq!(ch, before);
    }

    #[test]
    fn display_name_lookup_is_normalized() {
        let mut ch = character_with_role("  warrior ");

        apply_level_growth(&mut ch, 1, 2, &warrior());

        assert_eq!(ch.attributes.base(Attribute::Attack), 12.0);
    }

    #[test]
    fn stable_key_wins_over_display_name() {
        let mut ch = character_with_role("Renamed Warrior");
        ch.progression.role.key = Some("warrior".to_string());

        apply_level_growth(&mut ch, 1, 2, &warrior());

        assert_eq!(ch.attributes.base(Attribute::Attack), 12.0);
    }

    #[test]
    fn lenient_deserialization_skips_bad_entries() {
        let table: GrowthTable = serde_json::from_value(json!({
            "attack": 2,
            "life": "10",
            "resource.capacity": 5.5,
            "stamina": 3,
            "luck": "lots",
            "armor": null,
            "aura": [1, 2]
        }))
        .unwrap();

        assert_eq!(table.increment(Attribute::Attack), 2.0);
        assert_eq!(table.increment(Attribute::Life), 10.0);
        assert_eq!(table.increment(Attribute::ResourceCapacity), 5.5);
        assert_eq!(table.increments().count(), 3);
        assert_eq!(table.skipped(), ["stamina", "luck", "armor", "aura"]);
    }

    #[test]
    fn non_map_table_decodes_as_empty() {
        for raw in [json!([1, 2]), json!("fast"), json!(null)] {
            let table: GrowthTable = serde_json::from_value(raw).unwrap();
            assert!(table.is_empty());
            assert!(table.skipped().is_empty());
        }
    }

    #[test]
    fn serializes_as_attribute_map() {
        let table = GrowthTable::new()
            .with(Attribute::Attack, 2.0)
            .with(Attribute::ResourceCapacity, 1.0);

        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!({"attack": 2.0, "resource_capacity": 1.0})
        );
    }
}
