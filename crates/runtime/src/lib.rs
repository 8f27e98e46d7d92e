//! Runtime orchestration for character rosters.
//!
//! This crate wires together the reference catalogs, the user repository and
//! the roster worker into a cohesive runtime API. Consumers embed [`Runtime`]
//! and interact with rosters through [`RosterHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`repository`] provides persistence adapters
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{CharacterOp, Mutation, NewCharacter, Result, RosterHandle, RuntimeError};
pub use repository::{
    FileUserRepository, InMemoryUserRepository, RepositoryError, UserRepository, validate_user_id,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
