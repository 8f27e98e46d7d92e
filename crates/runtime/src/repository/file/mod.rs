//! File-based repository implementations.

mod user;

pub use user::FileUserRepository;
