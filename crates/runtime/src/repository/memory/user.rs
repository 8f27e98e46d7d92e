//! In-memory UserRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use sheet_core::Roster;

use crate::repository::traits::next_revision;
use crate::repository::{RepositoryError, Result, UserRepository};

/// In-memory implementation of UserRepository.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, Roster>>,
}

impl InMemoryUserRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn load(&self, user_id: &str) -> Result<Roster> {
        let users = self
            .users
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(users.get(user_id).cloned().unwrap_or_default())
    }

    fn save(&self, user_id: &str, roster: &mut Roster) -> Result<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let stored = users.get(user_id).map(|r| r.revision);
        roster.revision = next_revision(user_id, stored, roster.revision);
        users.insert(user_id.to_string(), roster.clone());
        Ok(())
    }

    fn exists(&self, user_id: &str) -> bool {
        self.users
            .read()
            .map(|users| users.contains_key(user_id))
            .unwrap_or(false)
    }

    fn delete(&self, user_id: &str) -> Result<()> {
        let mut users = self
            .users
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        users.remove(user_id);
        Ok(())
    }

    fn list_users(&self) -> Result<Vec<String>> {
        let users = self
            .users
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<String> = users.keys().cloned().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_bumps_revision_and_load_returns_copy() {
        let repo = InMemoryUserRepository::new();
        let mut roster = Roster::new();

        repo.save("1", &mut roster).unwrap();
        repo.save("1", &mut roster).unwrap();

        assert_eq!(roster.revision, 2);
        assert_eq!(repo.load("1").unwrap().revision, 2);
        assert_eq!(repo.load("2").unwrap(), Roster::new());
        assert_eq!(repo.list_users().unwrap(), ["1"]);
    }
}
