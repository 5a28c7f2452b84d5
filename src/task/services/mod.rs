//! Application services for task orchestration.

mod lifecycle;
mod request;
mod validation;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
pub use request::{CreateTaskRequest, parse_due_date};
pub use validation::TaskValidationConfig;
