//! Request payloads carrying caller-supplied primitive fields.

use crate::task::domain::{Priority, TaskDomainError};
use chrono::{DateTime, Utc};

/// Request payload for creating a task.
///
/// Fields arrive as the presentation layer supplies them: the due date as an
/// RFC 3339 string and the priority as a textual label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(crate) title: String,
    pub(crate) due_date: Option<String>,
    pub(crate) priority: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            due_date: None,
            priority: None,
        }
    }

    /// Sets the due date as an RFC 3339 timestamp string.
    ///
    /// An empty string means "no due date".
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Sets the priority label (`low`, `medium` or `high`).
    ///
    /// Unrecognized labels fall back to medium.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Returns the resolved priority.
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
            .as_deref()
            .map(Priority::from_label)
            .unwrap_or_default()
    }
}

/// Parses an optional RFC 3339 due date.
///
/// `None`, empty and whitespace-only values yield `Ok(None)`. Offsets are
/// normalized to UTC.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when the value is not a valid
/// RFC 3339 timestamp.
pub fn parse_due_date(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, TaskDomainError> {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    DateTime::parse_from_rfc3339(value)
        .map(|parsed| Some(parsed.with_timezone(&Utc)))
        .map_err(|err| TaskDomainError::InvalidDueDate {
            value: value.to_owned(),
            reason: err.to_string(),
        })
}
