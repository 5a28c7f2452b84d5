//! Title validation rules and their configuration.

use crate::task::domain::TaskDomainError;
use serde::{Deserialize, Serialize};

/// Configuration for task validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskValidationConfig {
    /// Maximum title length in characters.
    pub max_title_length: usize,
    /// Whether surrounding whitespace is stripped from titles before storage.
    pub trim_title: bool,
}

impl Default for TaskValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: 500,
            trim_title: true,
        }
    }
}

impl TaskValidationConfig {
    /// Creates a lenient configuration that stores titles verbatim.
    ///
    /// Useful for importing records that were written by other tools.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_title_length: 10_000,
            trim_title: false,
        }
    }

    /// Creates a strict configuration with a short title limit.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_length: 120,
            trim_title: true,
        }
    }

    /// Validates a title and returns the form that should be stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty or
    /// whitespace only, and [`TaskDomainError::TitleTooLong`] when it exceeds
    /// [`Self::max_title_length`].
    pub fn validate_title(&self, title: &str) -> Result<String, TaskDomainError> {
        if title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let normalized = if self.trim_title { title.trim() } else { title };
        let length = normalized.chars().count();
        if length > self.max_title_length {
            return Err(TaskDomainError::TitleTooLong {
                max: self.max_title_length,
                actual: length,
            });
        }

        Ok(normalized.to_owned())
    }
}
