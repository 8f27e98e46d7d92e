//! File-based UserRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use sheet_core::Roster;

use crate::repository::traits::{next_revision, validate_user_id};
use crate::repository::{RepositoryError, Result, UserRepository};

/// File-based implementation of UserRepository.
///
/// Stores one pretty-printed JSON document per user as
/// `{base_dir}/users/{user_id}.json`. Writes go to a temporary file that is
/// renamed over the record, so a crash never leaves a half-written roster.
pub struct FileUserRepository {
    users_dir: PathBuf,
}

/// Only the revision is read back when checking for concurrent edits.
#[derive(serde::Deserialize)]
struct StoredRevision {
    #[serde(default)]
    revision: u64,
}

impl FileUserRepository {
    /// Create a repository rooted at `base_dir`, creating `users/` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let users_dir = base_dir.as_ref().join("users");
        fs::create_dir_all(&users_dir).map_err(RepositoryError::Io)?;
        Ok(Self { users_dir })
    }

    pub fn users_dir(&self) -> &Path {
        &self.users_dir
    }

    /// Get the path to a user's record.
    fn user_path(&self, user_id: &str) -> Result<PathBuf> {
        validate_user_id(user_id)?;
        Ok(self.users_dir.join(format!("{}.json", user_id)))
    }

    fn stored_revision(path: &Path) -> Result<Option<u64>> {
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path).map_err(RepositoryError::Io)?;
        let stored: StoredRevision = serde_json::from_slice(&bytes)?;
        Ok(Some(stored.revision))
    }
}

impl UserRepository for FileUserRepository {
    fn load(&self, user_id: &str) -> Result<Roster> {
        let path = self.user_path(user_id)?;

        if !path.exists() {
            tracing::debug!("No record for user {} at {}", user_id, path.display());
            return Ok(Roster::new());
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let roster: Roster = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            "Loaded user {} (revision {}) from {}",
            user_id,
            roster.revision,
            path.display()
        );

        Ok(roster)
    }

    fn save(&self, user_id: &str, roster: &mut Roster) -> Result<()> {
        let path = self.user_path(user_id)?;
        let temp_path = path.with_extension("json.tmp");

        let revision = next_revision(user_id, Self::stored_revision(&path)?, roster.revision);

        let mut staged = roster.clone();
        staged.revision = revision;
        let bytes = serde_json::to_vec_pretty(&staged)?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        roster.revision = revision;
        tracing::debug!(
            "Saved user {} (revision {}) to {}",
            user_id,
            revision,
            path.display()
        );

        Ok(())
    }

    fn exists(&self, user_id: &str) -> bool {
        self.user_path(user_id)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn delete(&self, user_id: &str) -> Result<()> {
        let path = self.user_path(user_id)?;

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted record of user {}", user_id);
        }

        Ok(())
    }

    fn list_users(&self) -> Result<Vec<String>> {
        let mut users = Vec::new();

        let entries = fs::read_dir(&self.users_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(user_id) = filename.strip_suffix(".json")
                && validate_user_id(user_id).is_ok()
            {
                users.push(user_id.to_string());
            }
        }

        users.sort_unstable();
        Ok(users)
    }
}
