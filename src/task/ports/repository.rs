//! Repository port for task persistence and lookup.

use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every backend returns tasks in insertion order (oldest first) and hands out
/// independent copies; mutating a returned task never changes stored state
/// until it is written back with [`TaskRepository::update`].
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// The repository assigns a fresh identifier and the current time as the
    /// creation timestamp, and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the storage medium is
    /// unavailable.
    async fn create(&self, task: NewTask) -> TaskRepositoryResult<Task>;

    /// Returns copies of all stored tasks in insertion order.
    ///
    /// An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the storage medium is
    /// unavailable.
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the storage medium is
    /// unavailable.
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Replaces the stored task that has the same identifier.
    ///
    /// The whole record is replaced except for its creation timestamp. An
    /// unknown identifier is a no-op and still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the storage medium is
    /// unavailable.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes the task with the given identifier.
    ///
    /// The relative order of the remaining tasks is preserved. An unknown
    /// identifier is a no-op and still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the storage medium is
    /// unavailable.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
