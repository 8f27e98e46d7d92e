//! Repository layer for per-user records
//!
//! Repositories handle data that CHANGES through commands:
//! - One roster record per user (characters, equipment, progression)
//!
//! Static reference content (roles, professions, pathways) is handled by
//! catalogs, not Repositories.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileUserRepository;
pub use memory::InMemoryUserRepository;
pub use traits::{UserRepository, validate_user_id};
