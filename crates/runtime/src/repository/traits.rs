//! Repository contract for per-user roster records.

use sheet_core::Roster;

use super::error::{RepositoryError, Result};

/// Storage for one roster record per user.
///
/// A user without a record has an empty roster. `save` increments the
/// record's revision; when the stored revision differs from the one being
/// saved, the record was changed elsewhere since it was loaded. That is
/// logged and the save still goes through (last writer wins).
pub trait UserRepository: Send + Sync {
    /// Load the roster of `user_id`, or an empty one if none is stored.
    fn load(&self, user_id: &str) -> Result<Roster>;

    /// Store the roster of `user_id`, bumping `roster.revision`.
    fn save(&self, user_id: &str, roster: &mut Roster) -> Result<()>;

    /// Check if a record exists
    fn exists(&self, user_id: &str) -> bool;

    /// Remove the record of `user_id`; missing records are not an error.
    fn delete(&self, user_id: &str) -> Result<()>;

    /// List every user id with a stored record.
    fn list_users(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

/// User ids become file names, so only a conservative alphabet is accepted.
pub fn validate_user_id(user_id: &str) -> Result<()> {
    let valid = !user_id.is_empty()
        && user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(RepositoryError::InvalidUserId(user_id.to_string()))
    }
}

/// Next revision for a save, logging when the stored record moved on.
pub(crate) fn next_revision(user_id: &str, stored: Option<u64>, loaded: u64) -> u64 {
    match stored {
        Some(stored) if stored != loaded => {
            tracing::warn!(
                target: "runtime::repository",
                user = user_id,
                stored,
                loaded,
                "record changed since it was loaded; overwriting with the newer write"
            );
            stored.max(loaded) + 1
        }
        _ => loaded + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ids_are_restricted() {
        assert!(validate_user_id("123456789").is_ok());
        assert!(validate_user_id("staff_user-2").is_ok());
        assert!(validate_user_id("").is_err());
        assert!(validate_user_id("../etc").is_err());
        assert!(validate_user_id("a/b").is_err());
    }

    #[test]
    fn revision_moves_past_both_sides() {
        assert_eq!(next_revision("u", None, 0), 1);
        assert_eq!(next_revision("u", Some(3), 3), 4);
        assert_eq!(next_revision("u", Some(7), 3), 8);
        assert_eq!(next_revision("u", Some(1), 3), 4);
    }
}
