//! In-memory task repository.

use async_trait::async_trait;
use log::{debug, trace};
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks live in a single insertion-ordered vector behind one reader/writer
/// lock. Writes take the lock exclusively, reads share it, and every task
/// leaving the repository is a clone of the stored record. Cloning the
/// repository yields another handle onto the same collection; separately
/// constructed repositories share nothing.
pub struct InMemoryTaskRepository<C = DefaultClock> {
    tasks: Arc<RwLock<Vec<Task>>>,
    clock: Arc<C>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty in-memory repository stamped by the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_tasks().len()
    }

    /// Returns `true` when no tasks are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_tasks().is_empty()
    }

    // Every critical section leaves the vector consistent, so a panic in
    // another holder does not invalidate the data.
    fn read_tasks(&self) -> RwLockReadGuard<'_, Vec<Task>> {
        self.tasks.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tasks(&self) -> RwLockWriteGuard<'_, Vec<Task>> {
        self.tasks.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, draft: NewTask) -> Task {
        let mut tasks = self.write_tasks();
        let mut id = TaskId::new();
        while tasks.iter().any(|stored| stored.id() == id) {
            id = TaskId::new();
        }
        let task = draft.into_task(id, self.clock.utc());
        tasks.push(task.clone());
        task
    }

    fn snapshot(&self) -> Vec<Task> {
        self.read_tasks().clone()
    }

    fn find(&self, id: TaskId) -> Option<Task> {
        self.read_tasks()
            .iter()
            .find(|stored| stored.id() == id)
            .cloned()
    }

    fn replace(&self, task: &Task) -> bool {
        let mut tasks = self.write_tasks();
        let Some(slot) = tasks.iter_mut().find(|stored| stored.id() == task.id()) else {
            return false;
        };
        let created_at = slot.created_at();
        *slot = task.clone();
        slot.retain_created_at(created_at);
        true
    }

    fn remove(&self, id: TaskId) -> bool {
        let mut tasks = self.write_tasks();
        let Some(position) = tasks.iter().position(|stored| stored.id() == id) else {
            return false;
        };
        tasks.remove(position);
        true
    }
}

impl<C> Clone for InMemoryTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> fmt::Debug for InMemoryTaskRepository<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .tasks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("InMemoryTaskRepository")
            .field("len", &len)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, task: NewTask) -> TaskRepositoryResult<Task> {
        let created = self.insert(task);
        debug!("stored task {} at {}", created.id(), created.created_at());
        Ok(created)
    }

    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let tasks = self.snapshot();
        trace!("listed {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let task = self.find(id);
        trace!("lookup of task {id} found: {}", task.is_some());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        if self.replace(task) {
            debug!("updated task {}", task.id());
        } else {
            debug!("update skipped, task {} not found", task.id());
        }
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        if self.remove(id) {
            debug!("deleted task {id}");
        } else {
            debug!("delete skipped, task {id} not found");
        }
        Ok(())
    }
}
