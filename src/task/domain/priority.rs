//! Task priority scale.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-level task priority, persisted as `1`, `2` or `3`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "i16", try_from = "i16")]
pub enum Priority {
    /// Low priority (`1`).
    Low,
    /// Medium priority (`2`), used when callers do not choose one.
    #[default]
    Medium,
    /// High priority (`3`).
    High,
}

impl Priority {
    /// Returns the numeric storage representation.
    #[must_use]
    pub const fn value(self) -> i16 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Resolves a caller-supplied label.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. Empty
    /// or unrecognized labels resolve to [`Priority::Medium`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl From<Priority> for i16 {
    fn from(priority: Priority) -> Self {
        priority.value()
    }
}

impl TryFrom<i16> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            other => Err(TaskDomainError::InvalidPriority(other)),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
