//! Domain model for the to-do task store.
//!
//! The task domain models the task record, its priority scale and the
//! creation draft handed to storage, keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod priority;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use priority::Priority;
pub use task::{NewTask, PersistedTaskData, Task};
