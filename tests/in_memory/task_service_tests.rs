//! End-to-end task flows through [`TaskService`] over the in-memory store.

use crate::in_memory::helpers::{BoxError, repo, runtime, titles};
use rstest::rstest;
use std::io;
use std::sync::Arc;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, TaskDomainError},
    services::{CreateTaskRequest, TaskService, TaskServiceError, TaskValidationConfig},
};
use tokio::runtime::Runtime;

#[rstest]
fn create_list_toggle_delete_flow(
    runtime: io::Result<Runtime>,
    repo: InMemoryTaskRepository,
) -> Result<(), BoxError> {
    let rt = runtime?;
    let service = TaskService::new(Arc::new(repo));

    let learn = rt.block_on(service.create_task(
        CreateTaskRequest::new("Learn Rust").with_priority("high"),
    ))?;
    let build = rt.block_on(service.create_task(
        CreateTaskRequest::new("Build a to-do app")
            .with_priority("medium")
            .with_due_date("2030-01-01T00:00:00Z"),
    ))?;
    rt.block_on(service.create_task(CreateTaskRequest::new("Get a job").with_priority("HIGH")))?;

    let listed = rt.block_on(service.list_tasks())?;
    assert_eq!(
        titles(&listed),
        ["Learn Rust", "Build a to-do app", "Get a job"]
    );
    assert_eq!(learn.priority(), Priority::High);
    assert!(build.due_date().is_some());

    let toggled = rt
        .block_on(service.toggle_completed(learn.id()))?
        .ok_or("toggled task missing")?;
    assert!(toggled.completed());
    let done = rt.block_on(service.list_tasks_by_status(true))?;
    assert_eq!(titles(&done), ["Learn Rust"]);

    rt.block_on(service.delete_task(build.id()))?;
    let remaining = rt.block_on(service.list_tasks())?;
    assert_eq!(titles(&remaining), ["Learn Rust", "Get a job"]);
    assert_eq!(rt.block_on(service.get_task(build.id()))?, None);
    Ok(())
}

#[rstest]
fn validation_errors_are_reported_before_storage(
    runtime: io::Result<Runtime>,
) -> Result<(), BoxError> {
    let rt = runtime?;
    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = TaskService::new(Arc::clone(&repository));

    let empty = rt.block_on(service.create_task(CreateTaskRequest::new("")));
    let bad_date = rt.block_on(
        service.create_task(CreateTaskRequest::new("Dentist").with_due_date("2024-13-40")),
    );

    assert!(matches!(
        empty,
        Err(TaskServiceError::Domain(TaskDomainError::EmptyTitle))
    ));
    assert!(matches!(
        bad_date,
        Err(TaskServiceError::Domain(TaskDomainError::InvalidDueDate { .. }))
    ));
    assert!(repository.is_empty());
    Ok(())
}

#[rstest]
fn validation_config_loads_from_json() -> Result<(), BoxError> {
    let config: TaskValidationConfig = serde_json::from_str(r#"{"max_title_length": 8}"#)?;

    assert_eq!(config.max_title_length, 8);
    assert!(config.trim_title);
    assert_eq!(
        config.validate_title("  too long title "),
        Err(TaskDomainError::TitleTooLong { max: 8, actual: 14 })
    );
    Ok(())
}
