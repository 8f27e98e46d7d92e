//! Item bonuses and the bonus extractor.
//!
//! Every equippable item declares one main attribute entry and up to
//! [`GameConfig::MAX_SECONDARY_ATTRIBUTES`] secondary entries. Each entry is
//! either a flat bonus (added to the base value) or a percentage bonus
//! (a fraction of the flat-adjusted base, `0.10` = +10%).
//!
//! Items are hand-edited data, so entries that do not fit the typed shape are
//! kept as [`BonusEntry::Unrecognized`] and contribute nothing.

use serde::de::{Deserialize, Deserializer, Error};

use crate::config::GameConfig;
use crate::lenient;
use crate::state::Item;

use super::attribute::{Attribute, AttributeMap};

/// How a bonus value is applied.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BonusKind {
    /// Added to the base value before percentages are applied.
    Flat,
    /// Fraction of the flat-adjusted base, summed with other percentages.
    Percentage,
}

/// A single typed bonus carried by an item.
///
/// Attribute and kind names match case-insensitively and the value may be a
/// numeric string, the same leniency growth tables apply.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemBonus {
    #[serde(deserialize_with = "attribute_name")]
    pub attribute: Attribute,
    #[serde(deserialize_with = "kind_name")]
    pub kind: BonusKind,
    #[serde(default, deserialize_with = "lenient::number")]
    pub value: f64,
}

fn attribute_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Attribute, D::Error> {
    let name = String::deserialize(deserializer)?;
    Attribute::parse(&name)
        .ok_or_else(|| D::Error::custom(format!("unknown attribute `{name}`")))
}

fn kind_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BonusKind, D::Error> {
    let name = String::deserialize(deserializer)?;
    name.trim()
        .parse()
        .map_err(|_| D::Error::custom(format!("unknown bonus kind `{name}`")))
}

impl ItemBonus {
    pub const fn flat(attribute: Attribute, value: f64) -> Self {
        Self {
            attribute,
            kind: BonusKind::Flat,
            value,
        }
    }

    pub const fn percentage(attribute: Attribute, fraction: f64) -> Self {
        Self {
            attribute,
            kind: BonusKind::Percentage,
            value: fraction,
        }
    }
}

/// One attribute entry as stored on an item.
///
/// Entries that are not a well-formed [`ItemBonus`] (missing attribute,
/// unknown attribute or kind, not an object) are preserved verbatim so a
/// record round-trips unchanged, but they never contribute a bonus.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum BonusEntry {
    Bonus(ItemBonus),
    Unrecognized(serde_json::Value),
}

impl BonusEntry {
    /// The typed bonus, if this entry is well-formed.
    pub fn bonus(&self) -> Option<&ItemBonus> {
        match self {
            BonusEntry::Bonus(bonus) => Some(bonus),
            BonusEntry::Unrecognized(_) => None,
        }
    }
}

impl From<ItemBonus> for BonusEntry {
    fn from(bonus: ItemBonus) -> Self {
        BonusEntry::Bonus(bonus)
    }
}

/// Flat and percentage bonuses accumulated per attribute.
///
/// Repeated attributes are summed, whether they come from the same item or
/// from several equipped items.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemBonuses {
    pub flat: AttributeMap,
    pub percentage: AttributeMap,
}

impl ItemBonuses {
    /// Create empty bonuses (no effects)
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates one bonus into the matching map.
    pub fn add(&mut self, bonus: &ItemBonus) {
        match bonus.kind {
            BonusKind::Flat => self.flat.accumulate(bonus.attribute, bonus.value),
            BonusKind::Percentage => self.percentage.accumulate(bonus.attribute, bonus.value),
        }
    }

    /// Accumulates everything from `other`.
    pub fn merge(&mut self, other: &ItemBonuses) {
        self.flat.merge(&other.flat);
        self.percentage.merge(&other.percentage);
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_zero() && self.percentage.is_zero()
    }
}

/// Extracts the bonuses declared by one item (pure function).
///
/// Reads the main entry and the first three secondary entries. Positions
/// count even when an entry is unrecognised, so a malformed second entry
/// still pushes a fourth one out of range.
pub fn extract_item_bonuses(item: &Item) -> ItemBonuses {
    let mut bonuses = ItemBonuses::new();

    let entries = item.main_attribute.iter().chain(
        item.secondary_attributes
            .iter()
            .take(GameConfig::MAX_SECONDARY_ATTRIBUTES),
    );

    for bonus in entries.filter_map(BonusEntry::bonus) {
        bonuses.add(bonus);
    }

    bonuses
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(main: Option<ItemBonus>, secondary: Vec<BonusEntry>) -> Item {
        Item {
            main_attribute: main.map(BonusEntry::from),
            secondary_attributes: secondary,
            ..Item::default()
        }
    }

    #[test]
    fn splits_flat_and_percentage() {
        let item = item(
            Some(ItemBonus::flat(Attribute::Attack, 12.0)),
            vec![
                ItemBonus::percentage(Attribute::Life, 0.03).into(),
                ItemBonus::flat(Attribute::Armor, 4.0).into(),
            ],
        );

        let bonuses = extract_item_bonuses(&item);

        assert_eq!(bonuses.flat[Attribute::Attack], 12.0);
        assert_eq!(bonuses.flat[Attribute::Armor], 4.0);
        assert_eq!(bonuses.percentage[Attribute::Life], 0.03);
        assert_eq!(bonuses.percentage[Attribute::Attack], 0.0);
    }

    #[test]
    fn repeated_attribute_is_summed() {
        let item = item(
            Some(ItemBonus::flat(Attribute::Attack, 5.0)),
            vec![ItemBonus::flat(Attribute::Attack, 3.0).into()],
        );

        assert_eq!(extract_item_bonuses(&item).flat[Attribute::Attack], 8.0);
    }

    #[test]
    fn fourth_secondary_entry_is_ignored() {
        let item = item(
            None,
            vec![
                ItemBonus::flat(Attribute::Life, 1.0).into(),
                ItemBonus::flat(Attribute::Life, 1.0).into(),
                ItemBonus::flat(Attribute::Life, 1.0).into(),
                ItemBonus::flat(Attribute::Life, 100.0).into(),
            ],
        );

        assert_eq!(extract_item_bonuses(&item).flat[Attribute::Life], 3.0);
    }

    #[test]
    fn unrecognized_entries_are_skipped_but_keep_their_position() {
        let item = item(
            None,
            vec![
                BonusEntry::Unrecognized(json!({"kind": "flat", "value": 9})),
                ItemBonus::flat(Attribute::Luck, 2.0).into(),
                BonusEntry::Unrecognized(json!("not an entry")),
                ItemBonus::flat(Attribute::Luck, 50.0).into(),
            ],
        );

        let bonuses = extract_item_bonuses(&item);
        assert_eq!(bonuses.flat[Attribute::Luck], 2.0);
    }

    #[test]
    fn malformed_json_entries_deserialize_as_unrecognized() {
        let entries: Vec<BonusEntry> = serde_json::from_value(json!([
            {"attribute": "attack", "kind": "flat", "value": 5},
            {"attribute": "attack", "kind": "multiplier", "value": 2},
            {"kind": "flat", "value": 1},
            {"attribute": "stamina", "kind": "flat", "value": 1},
            42
        ]))
        .unwrap();

        assert_eq!(entries[0].bonus(), Some(&ItemBonus::flat(Attribute::Attack, 5.0)));
        assert!(entries[1..].iter().all(|e| e.bonus().is_none()));
    }

    #[test]
    fn names_are_case_insensitive_and_values_may_be_strings() {
        let entries: Vec<BonusEntry> = serde_json::from_value(json!([
            {"attribute": "Attack", "kind": "FLAT", "value": "5"},
            {"attribute": "resource.capacity", "kind": "Percentage", "value": " 0.1 "},
            {"attribute": "attack", "kind": "flat", "value": "five"}
        ]))
        .unwrap();

        assert_eq!(entries[0].bonus(), Some(&ItemBonus::flat(Attribute::Attack, 5.0)));
        assert_eq!(
            entries[1].bonus(),
            Some(&ItemBonus::percentage(Attribute::ResourceCapacity, 0.1))
        );
        assert!(entries[2].bonus().is_none());
    }

    #[test]
    fn missing_value_defaults_to_zero() {
        let entry: BonusEntry =
            serde_json::from_value(json!({"attribute": "aura", "kind": "percentage"})).unwrap();

        assert_eq!(entry.bonus(), Some(&ItemBonus::percentage(Attribute::Aura, 0.0)));
    }

    #[test]
    fn empty_item_yields_no_bonuses() {
        assert!(extract_item_bonuses(&Item::default()).is_empty());
    }
}
