//! Service layer validating caller input and forwarding to task storage.

use super::{CreateTaskRequest, TaskValidationConfig, parse_due_date};
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use log::{info, warn};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Rejects invalid input before storage is touched and otherwise passes
/// calls through to the injected repository unchanged.
///
/// Updates, deletes and the read-change-write completion helpers issued
/// through one service (or its clones) are serialized, so a helper never
/// acts on a task another service call has removed or changed meanwhile.
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
    config: TaskValidationConfig,
    writes: Arc<Mutex<()>>,
}

impl<R> Clone for TaskService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            config: self.config,
            writes: Arc::clone(&self.writes),
        }
    }
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a task service with the default validation configuration.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_config(repository, TaskValidationConfig::default())
    }

    /// Creates a task service with a custom validation configuration.
    #[must_use]
    pub fn with_config(repository: Arc<R>, config: TaskValidationConfig) -> Self {
        Self {
            repository,
            config,
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the active validation configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskValidationConfig {
        &self.config
    }

    /// Creates a task from caller-supplied fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is empty or too
    /// long or the due date is malformed, and [`TaskServiceError::Repository`]
    /// when storage fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = self.checked_title(&request.title)?;
        let due_date = parse_due_date(request.due_date.as_deref()).inspect_err(|err| {
            warn!("rejected task '{title}': {err}");
        })?;
        let draft = NewTask::new(title)
            .with_due_date(due_date)
            .with_priority(request.priority());

        let task = self.repository.create(draft).await?;
        info!("created task {} ({})", task.id(), task.priority());
        Ok(task)
    }

    /// Returns all tasks in store order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub async fn list_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.get_all().await?)
    }

    /// Returns the tasks whose completion flag matches `completed`, in store
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub async fn list_tasks_by_status(&self, completed: bool) -> TaskServiceResult<Vec<Task>> {
        let mut tasks = self.repository.get_all().await?;
        tasks.retain(|task| task.completed() == completed);
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub async fn get_task(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Replaces a stored task with `task`.
    ///
    /// An unknown identifier is a no-op and still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is invalid and
    /// [`TaskServiceError::Repository`] when storage fails.
    pub async fn update_task(&self, task: &Task) -> TaskServiceResult<()> {
        let title = self.checked_title(task.title())?;
        let _writes = self.writes.lock().await;
        if title == task.title() {
            self.repository.update(task).await?;
        } else {
            self.repository.update(&task.clone().with_title(title)).await?;
        }
        Ok(())
    }

    /// Sets the completion flag of a stored task.
    ///
    /// Returns the task as stored after the write, or `None` when no task has
    /// the identifier (including when it disappears before the write lands).
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub async fn set_completed(
        &self,
        id: TaskId,
        completed: bool,
    ) -> TaskServiceResult<Option<Task>> {
        self.modify(id, |task| task.set_completed(completed)).await
    }

    /// Flips the completion flag of a stored task.
    ///
    /// Returns the task as stored after the write, or `None` when no task has
    /// the identifier (including when it disappears before the write lands).
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub async fn toggle_completed(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        self.modify(id, Task::toggle_completed).await
    }

    /// Deletes a task by identifier.
    ///
    /// An unknown identifier is a no-op and still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<()> {
        let _writes = self.writes.lock().await;
        self.repository.delete(id).await?;
        info!("deleted task {id}");
        Ok(())
    }

    fn checked_title(&self, title: &str) -> Result<String, TaskDomainError> {
        self.config.validate_title(title).inspect_err(|err| {
            warn!("rejected task title: {err}");
        })
    }

    async fn modify<F>(&self, id: TaskId, change: F) -> TaskServiceResult<Option<Task>>
    where
        F: FnOnce(&mut Task) + Send,
    {
        let _writes = self.writes.lock().await;
        let Some(mut task) = self.repository.get_by_id(id).await? else {
            return Ok(None);
        };
        change(&mut task);
        self.repository.update(&task).await?;
        // Update is a no-op for a vanished id; report what is actually stored.
        let stored = self.repository.get_by_id(id).await?;
        if stored.is_none() {
            warn!("task {id} vanished before its change was stored");
        }
        Ok(stored)
    }
}
