//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories, and the domain
//! rules so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use sheet_core::{CharacterError, ErrorSeverity, GameError, RosterError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("roster worker command channel closed")]
    CommandChannelClosed,

    #[error("roster worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("roster worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a user repository to be configured before building")]
    MissingRepository,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl RuntimeError {
    /// Severity of domain rejections; `None` for infrastructure failures.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        match self {
            RuntimeError::Character(e) => Some(e.severity()),
            RuntimeError::Roster(e) => Some(e.severity()),
            _ => None,
        }
    }

    /// True when the request was rejected by the rules rather than failing.
    pub fn is_rejection(&self) -> bool {
        self.severity().is_some()
    }
}
