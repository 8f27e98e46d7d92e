//! Common error infrastructure for sheet-core.
//!
//! Domain-specific errors (`CharacterError`, `RosterError`) are defined next to
//! the state they validate in [`crate::state`]. This module holds the shared
//! classification used by callers to decide how to report a failure.
//!
//! Nothing in the core is fatal: every failure is local to one operation, and
//! a rejected operation leaves the record untouched.

/// Severity level of an error, used for categorization and reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: invalid slot name, duplicate nickname, roster full
    Validation,

    /// The requested record does not exist.
    ///
    /// Examples: unknown character name, skill not learned
    NotFound,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
        }
    }

    /// Returns true if the failure is a lookup miss rather than bad input.
    pub const fn is_lookup_miss(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Common trait for all sheet-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to act: the caller (validation) or nobody (lookup miss)
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for error categorization and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
