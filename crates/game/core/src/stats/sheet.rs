//! StatSheet - base / additional / total breakdown of a character.
//!
//! The sheet is derived data: it is recomputed from the character record on
//! every query and never stored.
//!
//! ```text
//! base       = attribute base + Σ flat (weapon + artifacts)
//! additional = base × Σ percentage      (summed first, applied once)
//! total      = base + additional
//! ```

use crate::state::Character;

use super::attribute::{Attribute, AttributeMap};
use super::bonus::{ItemBonuses, extract_item_bonuses};

/// Snapshot of a character's effective attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatSheet {
    /// Stored base values plus all flat bonuses.
    pub base: AttributeMap,
    /// Percentage bonuses applied to the flat-adjusted base.
    pub additional: AttributeMap,
    /// `base + additional`.
    pub total: AttributeMap,
}

impl StatSheet {
    /// Builds a sheet from raw base values and accumulated item bonuses.
    pub fn compute(raw_base: &AttributeMap, bonuses: &ItemBonuses) -> Self {
        let base = *raw_base + bonuses.flat;
        let additional = AttributeMap::from_fn(|attribute| {
            let fraction = bonuses.percentage[attribute];
            if fraction == 0.0 {
                0.0
            } else {
                base[attribute] * fraction
            }
        });
        let total = base + additional;

        Self {
            base,
            additional,
            total,
        }
    }

    /// `(base, additional, total)` for one attribute.
    pub fn breakdown(&self, attribute: Attribute) -> (f64, f64, f64) {
        (
            self.base[attribute],
            self.additional[attribute],
            self.total[attribute],
        )
    }
}

/// Sums the bonuses of every equipped item (main weapon and artifacts).
pub fn equipped_bonuses(character: &Character) -> ItemBonuses {
    character
        .equipment
        .equipped()
        .map(|(_, item)| extract_item_bonuses(item))
        .fold(ItemBonuses::new(), |mut acc, bonuses| {
            acc.merge(&bonuses);
            acc
        })
}

/// Computes the stat sheet of a character (pure function).
///
/// Reads the stored attribute set and the equipped items; the character is
/// not modified and nothing is cached.
pub fn compute_stats(character: &Character) -> StatSheet {
    StatSheet::compute(&character.attributes.to_map(), &equipped_bonuses(character))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ArtifactSlot, Item};
    use crate::stats::bonus::ItemBonus;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn character() -> Character {
        Character::builder("Aria", "Ari").build()
    }

    #[test]
    fn no_equipment_matches_template() {
        let ch = character();
        let sheet = compute_stats(&ch);

        assert_eq!(sheet.base, ch.attributes.to_map());
        assert!(sheet.additional.is_zero());
        assert_eq!(sheet.total, sheet.base);
    }

    #[test]
    fn percentages_from_several_items_stack_additively() {
        let mut ch = character();
        ch.equipment.equip_artifact(
            ArtifactSlot::Chalice,
            Item::with_main(ItemBonus::percentage(Attribute::Attack, 0.10)),
        );
        ch.equipment.equip_artifact(
            ArtifactSlot::Coin,
            Item::with_main(ItemBonus::percentage(Attribute::Attack, 0.10)),
        );

        let (base, additional, total) = compute_stats(&ch).breakdown(Attribute::Attack);

        assert_close(base, 10.0);
        assert_close(additional, 2.0);
        assert_close(total, 12.0);
    }

    #[test]
    fn percentages_apply_to_flat_adjusted_base() {
        let mut ch = character();
        ch.equipment
            .equip_weapon(Item::with_main(ItemBonus::flat(Attribute::Attack, 5.0)));
        ch.equipment.equip_artifact(
            ArtifactSlot::Staff,
            Item::with_main(ItemBonus::percentage(Attribute::Attack, 0.10)),
        );

        let (base, additional, total) = compute_stats(&ch).breakdown(Attribute::Attack);

        assert_close(base, 15.0);
        assert_close(additional, 1.5);
        assert_close(total, 16.5);
    }

    #[test]
    fn resource_capacity_takes_bonuses_like_other_attributes() {
        let mut ch = character();
        let mut coin = Item::with_main(ItemBonus::flat(Attribute::ResourceCapacity, 25.0));
        coin.secondary_attributes
            .push(ItemBonus::percentage(Attribute::ResourceCapacity, 0.2).into());
        ch.equipment.equip_artifact(ArtifactSlot::Coin, coin);

        let (base, additional, total) =
            compute_stats(&ch).breakdown(Attribute::ResourceCapacity);

        assert_close(base, 75.0);
        assert_close(additional, 15.0);
        assert_close(total, 90.0);
    }

    #[test]
    fn compute_is_idempotent_and_side_effect_free() {
        let mut ch = character();
        ch.equipment.equip_artifact(
            ArtifactSlot::ArtifactWeapon,
            Item::with_main(ItemBonus::flat(Attribute::MagicPower, 10.0)),
        );
        let before = ch.clone();

        let first = compute_stats(&ch);
        let second = compute_stats(&ch);

        assert_eq!(first, second);
        assert_eq!(ch, before);
        assert_eq!(ch.attributes.base(Attribute::MagicPower), 5.0);
    }

    #[test]
    fn percentage_without_base_contributes_nothing() {
        let mut ch = character();
        ch.equipment.equip_artifact(
            ArtifactSlot::Chalice,
            Item::with_main(ItemBonus::percentage(Attribute::Armor, 0.5)),
        );

        assert_eq!(compute_stats(&ch).breakdown(Attribute::Armor), (0.0, 0.0, 0.0));
    }
}
