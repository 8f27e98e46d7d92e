//! Attribute identities and dense per-attribute value maps.
//!
//! The attribute set is closed: every character, item bonus and growth table
//! speaks in terms of [`Attribute`], and per-attribute values are carried in
//! an [`AttributeMap`] that always has an entry for every attribute.

use core::ops::{Add, Index, IndexMut};

const ATTRIBUTE_COUNT: usize = 13;

/// Every attribute a character sheet tracks.
///
/// The order matches the order attributes are listed on a sheet. The
/// resource capacity is a first-class attribute; the legacy compound key
/// `resource.capacity` parses to it as well.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Life,
    Attack,
    MagicPower,
    Armor,
    MagicResistance,
    CriticalChance,
    CriticalDamage,
    Evasion,
    Luck,
    Aura,
    Immortality,
    Block,
    /// Maximum amount of the character's resource (mana, energy, ...).
    #[strum(to_string = "resource_capacity", serialize = "resource.capacity")]
    #[serde(alias = "resource.capacity")]
    ResourceCapacity,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; ATTRIBUTE_COUNT] = [
        Attribute::Life,
        Attribute::Attack,
        Attribute::MagicPower,
        Attribute::Armor,
        Attribute::MagicResistance,
        Attribute::CriticalChance,
        Attribute::CriticalDamage,
        Attribute::Evasion,
        Attribute::Luck,
        Attribute::Aura,
        Attribute::Immortality,
        Attribute::Block,
        Attribute::ResourceCapacity,
    ];

    /// Parses a user- or file-supplied attribute name.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        name.trim().parse().ok()
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Dense map holding one `f64` per [`Attribute`].
///
/// Absent contributions are zero, so the map doubles as an accumulator for
/// bonuses and as the output of the stat sheet layers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AttributeMap {
    values: [f64; ATTRIBUTE_COUNT],
}

impl AttributeMap {
    /// Map with every attribute at zero.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Builds a map by evaluating `f` for each attribute.
    pub fn from_fn(mut f: impl FnMut(Attribute) -> f64) -> Self {
        let mut map = Self::zeroed();
        for attribute in Attribute::ALL {
            map[attribute] = f(attribute);
        }
        map
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        self.values[attribute.index()]
    }

    /// Adds `value` to the entry for `attribute`.
    pub fn accumulate(&mut self, attribute: Attribute, value: f64) {
        self.values[attribute.index()] += value;
    }

    /// Adds every entry of `other` into this map.
    pub fn merge(&mut self, other: &AttributeMap) {
        for attribute in Attribute::ALL {
            self.accumulate(attribute, other.get(attribute));
        }
    }

    /// Iterates `(attribute, value)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }

    /// Iterates only the entries that are not zero.
    pub fn nonzero(&self) -> impl Iterator<Item = (Attribute, f64)> + '_ {
        self.iter().filter(|(_, v)| *v != 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }
}

impl Index<Attribute> for AttributeMap {
    type Output = f64;

    fn index(&self, attribute: Attribute) -> &f64 {
        &self.values[attribute.index()]
    }
}

impl IndexMut<Attribute> for AttributeMap {
    fn index_mut(&mut self, attribute: Attribute) -> &mut f64 {
        &mut self.values[attribute.index()]
    }
}

impl Add for AttributeMap {
    type Output = AttributeMap;

    fn add(mut self, rhs: AttributeMap) -> AttributeMap {
        self.merge(&rhs);
        self
    }
}
