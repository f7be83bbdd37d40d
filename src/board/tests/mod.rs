//! Unit tests for the board projection and its interaction protocol.


use crate::task::domain::{DueDate, Task, TaskFields, TaskId, TaskPriority, TaskStatus};

fn task(id: &str, status: TaskStatus, priority: TaskPriority) -> Task {
    Task::new(
        TaskId::new(id).expect("valid task id"),
        TaskFields::new(format!("task {id}"), DueDate::parse("2024-06-01").expect("valid date"))
            .with_status(status)
            .with_priority(priority),
    )
}
