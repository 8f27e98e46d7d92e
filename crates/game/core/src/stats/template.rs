//! Attribute Set - the persisted base attributes of a character.
//!
//! This is the only stat data that is stored. Item bonuses are never written
//! here; they are layered on top at query time by [`super::sheet`]. The only
//! writer of base values is the leveling engine in [`super::growth`].

use super::attribute::{Attribute, AttributeMap};

/// Resource label used when a role declares no default resource.
pub const DEFAULT_RESOURCE_KIND: &str = "Mana";

/// A stored attribute value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttributeValue {
    pub base: f64,
}

impl AttributeValue {
    pub const fn new(base: f64) -> Self {
        Self { base }
    }
}

/// The character's resource pool: a label plus its capacity attribute.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResourceBlock {
    pub kind: String,
    pub capacity: AttributeValue,
}

/// Closed set of base attributes.
///
/// Each attribute is a named field, so the set cannot grow or shrink at
/// runtime; callers address values through [`Attribute`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttributeSet {
    pub life: AttributeValue,
    pub attack: AttributeValue,
    pub magic_power: AttributeValue,
    pub armor: AttributeValue,
    pub magic_resistance: AttributeValue,
    pub critical_chance: AttributeValue,
    pub critical_damage: AttributeValue,
    pub resource: ResourceBlock,
    pub evasion: AttributeValue,
    pub luck: AttributeValue,
    pub aura: AttributeValue,
    pub immortality: AttributeValue,
    pub block: AttributeValue,
}

impl AttributeSet {
    /// Default attributes of a freshly created character.
    ///
    /// | attribute | base |
    /// |-----------|------|
    /// | life | 100 |
    /// | attack | 10 |
    /// | magic power | 5 |
    /// | armor, magic resistance | 0 |
    /// | critical chance | 0.05 |
    /// | critical damage | 1.5 |
    /// | evasion, luck, aura, immortality, block | 0 |
    /// | resource capacity | 50 |
    pub fn template(resource_kind: impl Into<String>) -> Self {
        Self {
            life: AttributeValue::new(100.0),
            attack: AttributeValue::new(10.0),
            magic_power: AttributeValue::new(5.0),
            armor: AttributeValue::new(0.0),
            magic_resistance: AttributeValue::new(0.0),
            critical_chance: AttributeValue::new(0.05),
            critical_damage: AttributeValue::new(1.5),
            resource: ResourceBlock {
                kind: resource_kind.into(),
                capacity: AttributeValue::new(50.0),
            },
            evasion: AttributeValue::new(0.0),
            luck: AttributeValue::new(0.0),
            aura: AttributeValue::new(0.0),
            immortality: AttributeValue::new(0.0),
            block: AttributeValue::new(0.0),
        }
    }

    fn value(&self, attribute: Attribute) -> &AttributeValue {
        match attribute {
            Attribute::Life => &self.life,
            Attribute::Attack => &self.attack,
            Attribute::MagicPower => &self.magic_power,
            Attribute::Armor => &self.armor,
            Attribute::MagicResistance => &self.magic_resistance,
            Attribute::CriticalChance => &self.critical_chance,
            Attribute::CriticalDamage => &self.critical_damage,
            Attribute::Evasion => &self.evasion,
            Attribute::Luck => &self.luck,
            Attribute::Aura => &self.aura,
            Attribute::Immortality => &self.immortality,
            Attribute::Block => &self.block,
            Attribute::ResourceCapacity => &self.resource.capacity,
        }
    }

    fn value_mut(&mut self, attribute: Attribute) -> &mut AttributeValue {
        match attribute {
            Attribute::Life => &mut self.life,
            Attribute::Attack => &mut self.attack,
            Attribute::MagicPower => &mut self.magic_power,
            Attribute::Armor => &mut self.armor,
            Attribute::MagicResistance => &mut self.magic_resistance,
            Attribute::CriticalChance => &mut self.critical_chance,
            Attribute::CriticalDamage => &mut self.critical_damage,
            Attribute::Evasion => &mut self.evasion,
            Attribute::Luck => &mut self.luck,
            Attribute::Aura => &mut self.aura,
            Attribute::Immortality => &mut self.immortality,
            Attribute::Block => &mut self.block,
            Attribute::ResourceCapacity => &mut self.resource.capacity,
        }
    }

    /// Stored base value of `attribute`.
    pub fn base(&self, attribute: Attribute) -> f64 {
        self.value(attribute).base
    }

    pub fn set_base(&mut self, attribute: Attribute, base: f64) {
        self.value_mut(attribute).base = base;
    }

    /// Permanently raises (or lowers) the base value of `attribute`.
    pub fn add_base(&mut self, attribute: Attribute, delta: f64) {
        self.value_mut(attribute).base += delta;
    }

    pub fn resource_kind(&self) -> &str {
        &self.resource.kind
    }

    /// All base values as a dense map.
    pub fn to_map(&self) -> AttributeMap {
        AttributeMap::from_fn(|attribute| self.base(attribute))
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::template(DEFAULT_RESOURCE_KIND)
    }
}
