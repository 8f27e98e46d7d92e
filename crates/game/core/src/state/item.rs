use crate::stats::{BonusEntry, ItemBonus};

use super::error::CharacterError;

/// An equippable item as pasted by a user or stored in a record.
///
/// Only the bonus entries are interpreted. Any other fields are kept in
/// [`Item::extra`] and written back unchanged.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_attribute: Option<BonusEntry>,
    #[serde(default)]
    pub secondary_attributes: Vec<BonusEntry>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Item with a single typed main bonus.
    pub fn with_main(bonus: ItemBonus) -> Self {
        Self {
            main_attribute: Some(bonus.into()),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parses an item from user-supplied JSON.
    ///
    /// The payload must be a JSON object. Malformed bonus entries are
    /// accepted and kept, they simply contribute nothing.
    pub fn from_json(raw: &str) -> Result<Self, CharacterError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| CharacterError::InvalidItem {
                reason: e.to_string(),
            })?;

        if !value.is_object() {
            return Err(CharacterError::InvalidItem {
                reason: "expected a JSON object".to_string(),
            });
        }

        serde_json::from_value(value).map_err(|e| CharacterError::InvalidItem {
            reason: e.to_string(),
        })
    }

    /// Label used when listing equipment.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("(unnamed)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Attribute, extract_item_bonuses};

    #[test]
    fn parses_pasted_item() {
        let item = Item::from_json(
            r#"{
                "id": "c-17",
                "name": "Silver Chalice",
                "rarity": 3,
                "main_attribute": {"attribute": "life", "kind": "flat", "value": 40},
                "secondary_attributes": [
                    {"attribute": "luck", "kind": "percentage", "value": 0.05},
                    {"attribute": "nope", "kind": "flat", "value": 1}
                ],
                "forged_by": "Ilsa"
            }"#,
        )
        .unwrap();

        assert_eq!(item.label(), "Silver Chalice");
        assert_eq!(item.rarity, Some(3));
        assert_eq!(item.extra.get("forged_by"), Some(&serde_json::json!("Ilsa")));

        let bonuses = extract_item_bonuses(&item);
        assert_eq!(bonuses.flat[Attribute::Life], 40.0);
        assert_eq!(bonuses.percentage[Attribute::Luck], 0.05);
    }

    #[test]
    fn rejects_non_objects_and_bad_json() {
        assert!(matches!(
            Item::from_json("[1, 2]"),
            Err(CharacterError::InvalidItem { .. })
        ));
        assert!(matches!(
            Item::from_json("{not json"),
            Err(CharacterError::InvalidItem { .. })
        ));
    }

    #[test]
    fn malformed_entries_survive_a_round_trip() {
        let raw = serde_json::json!({
            "main_attribute": {"attribute": "attack", "kind": "multiplier", "value": 2},
            "secondary_attributes": ["junk", {"attribute": "armor", "kind": "flat", "value": 1.5}]
        });

        let item: Item = serde_json::from_value(raw.clone()).unwrap();
        let written = serde_json::to_value(&item).unwrap();

        assert_eq!(written, raw);
    }
}
