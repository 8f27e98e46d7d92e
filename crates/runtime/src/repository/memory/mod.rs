//! In-memory repository implementations for testing and development.

mod user;

pub use user::InMemoryUserRepository;
