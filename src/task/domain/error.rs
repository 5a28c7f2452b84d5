//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or validating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured length limit.
    #[error("task title is {actual} characters long, limit is {max}")]
    TitleTooLong {
        /// Maximum permitted title length in characters.
        max: usize,
        /// Actual title length in characters.
        actual: usize,
    },

    /// The numeric priority is outside the supported scale.
    #[error("invalid priority {0}, expected 1 (low), 2 (medium) or 3 (high)")]
    InvalidPriority(i16),

    /// The due date string is not a valid RFC 3339 timestamp.
    #[error("invalid due date '{value}': {reason}")]
    InvalidDueDate {
        /// Raw value supplied by the caller.
        value: String,
        /// Parser failure description.
        reason: String,
    },
}
