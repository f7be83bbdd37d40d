//! Key bindings per interaction mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::task::domain::TaskStatus;

/// Which bindings apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Browsing the board.
    Board,
    /// Carrying a card.
    Dragging,
    /// Editing a task in the modal form.
    Editor,
    /// Answering the delete confirmation.
    Confirm,
}

/// A user command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Move the cursor one column left.
    Left,
    /// Move the cursor one column right.
    Right,
    /// Move the cursor one card up.
    Up,
    /// Move the cursor one card down.
    Down,
    /// Open the editor for a new task.
    NewTask,
    /// Open the editor for the focused task.
    EditTask,
    /// Ask to delete the focused task.
    DeleteTask,
    /// Move the focused task to the next column.
    CycleStatus,
    /// Move the focused task to a given column.
    PickStatus(TaskStatus),
    /// Pick up the focused card.
    Grab,
    /// Release the carried card.
    Drop,
    /// Abandon the current drag, form, or prompt.
    Cancel,
    /// Fetch the task list again.
    Reload,
    /// Hide the failure notice.
    DismissNotice,
    /// Focus the next form field.
    NextField,
    /// Focus the previous form field.
    PreviousField,
    /// Type into the focused form field.
    Input(char),
    /// Erase the last character of the focused form field.
    Backspace,
    /// Advance the focused selector.
    CycleChoice,
    /// Submit the form.
    Submit,
    /// Accept the confirmation prompt.
    Confirm,
}

/// Decodes a key press for the given context.
#[must_use]
pub fn map_key(context: KeyContext, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    match context {
        KeyContext::Board => board_key(key.code),
        KeyContext::Dragging => dragging_key(key.code),
        KeyContext::Editor => editor_key(key.code),
        KeyContext::Confirm => confirm_key(key.code),
    }
}

fn board_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('n' | 'a') => Some(Action::NewTask),
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::EditTask),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteTask),
        KeyCode::Char('s') => Some(Action::CycleStatus),
        KeyCode::Char('1') => Some(Action::PickStatus(TaskStatus::Todo)),
        KeyCode::Char('2') => Some(Action::PickStatus(TaskStatus::InProgress)),
        KeyCode::Char('3') => Some(Action::PickStatus(TaskStatus::Completed)),
        KeyCode::Char(' ') => Some(Action::Grab),
        KeyCode::Char('r') => Some(Action::Reload),
        KeyCode::Char('x') | KeyCode::Esc => Some(Action::DismissNotice),
        code => direction(code),
    }
}

fn dragging_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Drop),
        KeyCode::Esc => Some(Action::Cancel),
        code => direction(code),
    }
}

fn direction(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        _ => None,
    }
}

fn editor_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PreviousField),
        KeyCode::Left | KeyCode::Right => Some(Action::CycleChoice),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(ch) => Some(Action::Input(ch)),
        _ => None,
    }
}

fn confirm_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}
