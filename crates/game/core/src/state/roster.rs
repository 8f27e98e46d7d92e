//! Per-user character collection.

use indexmap::IndexMap;

use crate::config::GameConfig;

use super::character::Character;
use super::error::RosterError;

/// All characters owned by one user, keyed by character name.
///
/// Insertion order is preserved; the first character is the default one.
/// `revision` increases on every successful save and lets the repository
/// detect records that were edited behind its back.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub revision: u64,
    #[serde(default)]
    pub characters: IndexMap<String, Character>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Checks whether `name` / `nickname` could be added without touching
    /// the roster.
    pub fn check_can_create(
        &self,
        name: &str,
        nickname: &str,
        config: &GameConfig,
    ) -> Result<(), RosterError> {
        if name.trim().is_empty() {
            return Err(RosterError::EmptyField { field: "name" });
        }
        if nickname.trim().is_empty() {
            return Err(RosterError::EmptyField { field: "nickname" });
        }
        if self.characters.len() >= config.max_characters {
            return Err(RosterError::RosterFull {
                max: config.max_characters,
            });
        }
        if self.characters.contains_key(name.trim()) {
            return Err(RosterError::DuplicateName {
                name: name.trim().to_string(),
            });
        }
        if self
            .characters
            .values()
            .any(|c| c.nickname == nickname.trim())
        {
            return Err(RosterError::DuplicateNickname {
                nickname: nickname.trim().to_string(),
            });
        }
        Ok(())
    }

    /// Inserts a new character after validating the cap and uniqueness.
    pub fn create(
        &mut self,
        character: Character,
        config: &GameConfig,
    ) -> Result<&Character, RosterError> {
        self.check_can_create(&character.name, &character.nickname, config)?;
        let name = character.name.trim().to_string();
        let entry = self.characters.entry(name).or_insert(character);
        Ok(entry)
    }

    pub fn get(&self, name: &str) -> Result<&Character, RosterError> {
        self.characters
            .get(name)
            .ok_or_else(|| RosterError::CharacterNotFound {
                name: name.to_string(),
            })
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Character, RosterError> {
        self.characters
            .get_mut(name)
            .ok_or_else(|| RosterError::CharacterNotFound {
                name: name.to_string(),
            })
    }

    /// Resolves an optional name: the named character, or the first one.
    pub fn resolve(&self, name: Option<&str>) -> Result<&Character, RosterError> {
        match name {
            Some(name) => self.get(name),
            None => self
                .characters
                .values()
                .next()
                .ok_or(RosterError::NoCharacters),
        }
    }

    pub fn resolve_mut(&mut self, name: Option<&str>) -> Result<&mut Character, RosterError> {
        match name {
            Some(name) => self.get_mut(name),
            None => self
                .characters
                .values_mut()
                .next()
                .ok_or(RosterError::NoCharacters),
        }
    }

    /// Removes a character, keeping the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Result<Character, RosterError> {
        self.characters
            .shift_remove(name)
            .ok_or_else(|| RosterError::CharacterNotFound {
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.characters.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(name: &str, nickname: &str) -> Character {
        Character::builder(name, nickname).build()
    }

    #[test]
    fn cap_is_enforced() {
        let config = GameConfig::default();
        let mut roster = Roster::new();
        for i in 0..4 {
            roster
                .create(character(&format!("C{i}"), &format!("N{i}")), &config)
                .unwrap();
        }

        let err = roster.create(character("C4", "N4"), &config).unwrap_err();

        assert_eq!(err, RosterError::RosterFull { max: 4 });
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn nickname_and_name_must_be_unique() {
        let config = GameConfig::default();
        let mut roster = Roster::new();
        roster.create(character("Aria", "Ari"), &config).unwrap();
        let before = roster.clone();

        assert!(matches!(
            roster.create(character("Bran", "Ari"), &config),
            Err(RosterError::DuplicateNickname { .. })
        ));
        assert!(matches!(
            roster.create(character("Aria", "Other"), &config),
            Err(RosterError::DuplicateName { .. })
        ));
        assert_eq!(roster, before);
    }

    #[test]
    fn resolve_defaults_to_first_character() {
        let config = GameConfig::default();
        let mut roster = Roster::new();
        assert_eq!(roster.resolve(None).unwrap_err(), RosterError::NoCharacters);

        roster.create(character("Aria", "Ari"), &config).unwrap();
        roster.create(character("Bran", "Bee"), &config).unwrap();

        assert_eq!(roster.resolve(None).unwrap().name, "Aria");
        assert_eq!(roster.resolve(Some("Bran")).unwrap().nickname, "Bee");
        assert!(matches!(
            roster.resolve(Some("Cato")),
            Err(RosterError::CharacterNotFound { .. })
        ));
    }

    #[test]
    fn remove_keeps_order() {
        let config = GameConfig::default();
        let mut roster = Roster::new();
        for (name, nick) in [("A", "a"), ("B", "b"), ("C", "c")] {
            roster.create(character(name, nick), &config).unwrap();
        }

        roster.remove("A").unwrap();

        assert_eq!(roster.names().collect::<Vec<_>>(), ["B", "C"]);
        assert!(roster.remove("A").is_err());
    }
}
