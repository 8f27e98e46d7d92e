//! Worker tasks that back the runtime orchestration.
//!
//! The roster worker is the single writer of user records.

mod roster;

pub use roster::{Command, RosterWorker};
