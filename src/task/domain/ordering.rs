//! Display ordering within a board column.
//!
//! Columns are derived on every render: filter by status, then stable-sort
//! by priority rank. Tasks with equal priority keep their relative order in
//! the backing list, which is the only way a manual reorder stays visible.

use super::{Task, TaskStatus};

/// Stable-sorts tasks by priority rank (High, Medium, Low).
#[must_use]
pub fn sort_by_priority<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a Task> {
    let mut sorted: Vec<&Task> = tasks.into_iter().collect();
    sorted.sort_by_key(|task| task.priority().rank());
    sorted
}

/// Returns the backing-list positions of the tasks shown in `status`'s
/// column, in display order.
#[must_use]
pub fn column_positions(tasks: &[Task], status: TaskStatus) -> Vec<usize> {
    let mut positions: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| task.status() == status)
        .map(|(position, _)| position)
        .collect();
    positions.sort_by_key(|position| {
        tasks
            .get(*position)
            .map_or(u8::MAX, |task| task.priority().rank())
    });
    positions
}
