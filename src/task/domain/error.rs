//! Error types for task payload validation.

use thiserror::Error;

/// Errors returned while validating candidate task payloads.
///
/// Each variant's display text names the offending field so callers can
/// surface it directly to clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is missing or empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The priority value is not one of the supported levels.
    #[error("invalid priority '{0}', expected low, medium, or high")]
    InvalidPriority(String),

    /// The status value is not one of the supported states.
    #[error("invalid status '{0}', expected pending, in-progress, or completed")]
    InvalidStatus(String),
}
