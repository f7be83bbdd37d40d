//! Column projection of the task list.

use crate::task::domain::{Task, TaskId, TaskStatus, sort_by_priority};

/// One status column in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn<'a> {
    status: TaskStatus,
    cards: Vec<&'a Task>,
}

impl<'a> BoardColumn<'a> {
    /// Builds the column for `status`: filter, then stable priority sort.
    #[must_use]
    pub fn build(tasks: &'a [Task], status: TaskStatus) -> Self {
        let cards = sort_by_priority(tasks.iter().filter(|task| task.status() == status));
        Self { status, cards }
    }

    /// Returns the column's status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[&'a Task] {
        &self.cards
    }

    /// Returns the card at a display position.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&'a Task> {
        self.cards.get(index).copied()
    }

    /// Returns the display position of a task in this column.
    #[must_use]
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.cards.iter().position(|task| task.id() == id)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` when the column shows no card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The three board columns, `TODO` first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    columns: [BoardColumn<'a>; 3],
}

impl<'a> BoardView<'a> {
    /// Projects the task list onto the fixed status columns.
    #[must_use]
    pub fn build(tasks: &'a [Task]) -> Self {
        Self {
            columns: TaskStatus::ALL.map(|status| BoardColumn::build(tasks, status)),
        }
    }

    /// Returns all columns in board order.
    #[must_use]
    pub const fn columns(&self) -> &[BoardColumn<'a>; 3] {
        &self.columns
    }

    /// Returns the column for a status.
    #[must_use]
    pub const fn column(&self, status: TaskStatus) -> &BoardColumn<'a> {
        let [todo, in_progress, completed] = &self.columns;
        match status {
            TaskStatus::Todo => todo,
            TaskStatus::InProgress => in_progress,
            TaskStatus::Completed => completed,
        }
    }

    /// Finds the column and display position of a task.
    #[must_use]
    pub fn locate(&self, id: &TaskId) -> Option<(TaskStatus, usize)> {
        self.columns.iter().find_map(|column| {
            column
                .position_of(id)
                .map(|position| (column.status(), position))
        })
    }
}
