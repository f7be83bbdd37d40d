//! Terminal board state and action handling.

use mockable::Clock;

use super::keymap::{Action, KeyContext};
use crate::board::{
    BoardView, ColumnDropZone, DragSession, DropTarget, FormError, TaskCard, TaskEditorForm,
};
use crate::task::{
    domain::{TaskId, TaskStatus},
    ports::TaskRepository,
    services::{BoardController, BoardError, BoardIntent},
};

/// What the screen is showing on top of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Plain board.
    Board,
    /// Modal task editor.
    Editor(TaskEditorForm),
    /// Delete confirmation for a task.
    ConfirmDelete(TaskId),
}

/// A card being carried with the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    session: DragSession,
    column: TaskStatus,
    row: usize,
}

impl DragState {
    /// Returns the drag session.
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Returns the column the card hovers over.
    #[must_use]
    pub const fn column(&self) -> TaskStatus {
        self.column
    }

    /// Returns the row the card hovers over.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }
}

/// Terminal application state wrapped around the board controller.
pub struct App<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    controller: BoardController<R, C>,
    mode: Mode,
    focus_column: TaskStatus,
    focus_row: usize,
    drag: Option<DragState>,
    form_error: Option<FormError>,
    should_quit: bool,
}

impl<R, C> App<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a controller; the cursor starts on the first `TODO` card.
    #[must_use]
    pub const fn new(controller: BoardController<R, C>) -> Self {
        Self {
            controller,
            mode: Mode::Board,
            focus_column: TaskStatus::Todo,
            focus_row: 0,
            drag: None,
            form_error: None,
            should_quit: false,
        }
    }

    /// Returns the board controller.
    #[must_use]
    pub const fn controller(&self) -> &BoardController<R, C> {
        &self.controller
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Returns the focused column and row.
    #[must_use]
    pub const fn focus(&self) -> (TaskStatus, usize) {
        (self.focus_column, self.focus_row)
    }

    /// Returns the keyboard drag in progress.
    #[must_use]
    pub const fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Returns the last editor validation failure.
    #[must_use]
    pub const fn form_error(&self) -> Option<&FormError> {
        self.form_error.as_ref()
    }

    /// Returns `true` once the user asked to leave.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the key bindings that apply right now.
    #[must_use]
    pub const fn key_context(&self) -> KeyContext {
        match (&self.mode, &self.drag) {
            (Mode::Editor(_), _) => KeyContext::Editor,
            (Mode::ConfirmDelete(_), _) => KeyContext::Confirm,
            (Mode::Board, Some(_)) => KeyContext::Dragging,
            (Mode::Board, None) => KeyContext::Board,
        }
    }

    /// Loads the task list; failures surface as a notice.
    pub async fn start(&mut self) {
        let outcome = self.controller.load().await;
        settle(outcome);
    }

    /// Applies one user action, awaiting any store call it triggers.
    pub async fn handle_action(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        match self.key_context() {
            KeyContext::Board => self.handle_board(action).await,
            KeyContext::Dragging => self.handle_drag(action).await,
            KeyContext::Editor => self.handle_editor(action).await,
            KeyContext::Confirm => self.handle_confirm(action).await,
        }
        self.clamp_focus();
    }

    async fn handle_board(&mut self, action: Action) {
        match action {
            Action::Left => self.move_column(-1),
            Action::Right => self.move_column(1),
            Action::Up => self.focus_row = self.focus_row.saturating_sub(1),
            Action::Down => self.focus_row = self.focus_row.saturating_add(1),
            Action::NewTask => self.dispatch(BoardIntent::Create).await,
            Action::EditTask => {
                if let Some(intent) = self.with_focused_card(|card| card.edit()) {
                    self.dispatch(intent).await;
                }
            }
            Action::DeleteTask => {
                if let Some(id) = self.with_focused_card(|card| card.task().id().clone()) {
                    self.mode = Mode::ConfirmDelete(id);
                }
            }
            Action::CycleStatus => {
                if let Some(intent) = self.with_focused_card(|card| card.cycle_status()) {
                    self.dispatch_following(intent).await;
                }
            }
            Action::PickStatus(status) => {
                if let Some(intent) = self.with_focused_card(|card| card.select_status(status)) {
                    self.dispatch_following(intent).await;
                }
            }
            Action::Grab => {
                self.drag = self.with_focused_card(|card| DragState {
                    session: DragSession::begin(&card),
                    column: card.task().status(),
                    row: card.index(),
                });
            }
            Action::Reload => {
                let outcome = self.controller.load().await;
                settle(outcome);
            }
            Action::DismissNotice => self.controller.dismiss_notice(),
            _ => {}
        }
    }

    async fn handle_drag(&mut self, action: Action) {
        match action {
            Action::Up | Action::Down => {
                let step_down = action == Action::Down;
                if let Some(intent) = self.hover_step(step_down) {
                    self.dispatch(intent).await;
                }
            }
            Action::Left => self.move_drag_column(-1),
            Action::Right => self.move_drag_column(1),
            Action::Drop => self.release().await,
            Action::Cancel => self.drag = None,
            _ => {}
        }
    }

    async fn handle_editor(&mut self, action: Action) {
        let Mode::Editor(form) = &mut self.mode else {
            return;
        };
        match action {
            Action::NextField => form.focus_next(),
            Action::PreviousField => form.focus_previous(),
            Action::CycleChoice => form.cycle_choice(),
            Action::Backspace => form.delete_char(),
            Action::Input(' ') if !form.focus().is_text() => form.cycle_choice(),
            Action::Input(ch) => form.insert_char(ch),
            Action::Cancel => {
                self.mode = Mode::Board;
                self.form_error = None;
                self.controller.close_editor();
            }
            Action::Submit => match form.submit() {
                Ok(submission) => {
                    self.mode = Mode::Board;
                    self.form_error = None;
                    let outcome = self.controller.submit(submission).await;
                    settle(outcome);
                }
                Err(err) => self.form_error = Some(err),
            },
            _ => {}
        }
    }

    async fn handle_confirm(&mut self, action: Action) {
        let Mode::ConfirmDelete(id) = &self.mode else {
            return;
        };
        match action {
            Action::Confirm => {
                let intent = BoardIntent::Delete(id.clone());
                self.mode = Mode::Board;
                self.dispatch(intent).await;
            }
            Action::Cancel => self.mode = Mode::Board,
            _ => {}
        }
    }

    async fn dispatch(&mut self, intent: BoardIntent) {
        let outcome = self.controller.dispatch(intent).await;
        settle(outcome);
        if self.controller.is_editor_open() && matches!(self.mode, Mode::Board) {
            self.mode = Mode::Editor(TaskEditorForm::from_selected(
                self.controller.selected_task(),
            ));
        }
    }

    /// Dispatches a status change and keeps the cursor on the moved task.
    async fn dispatch_following(&mut self, intent: BoardIntent) {
        let followed = match &intent {
            BoardIntent::ChangeStatus { id, .. } => Some(id.clone()),
            _ => None,
        };
        self.dispatch(intent).await;
        if let Some(id) = followed {
            self.focus_task(&id);
        }
    }

    fn with_focused_card<T>(&self, f: impl FnOnce(TaskCard<'_>) -> T) -> Option<T> {
        let view = BoardView::build(self.controller.tasks());
        view.column(self.focus_column)
            .card(self.focus_row)
            .map(|task| f(TaskCard::new(task, self.focus_row)))
    }

    fn hover_step(&mut self, step_down: bool) -> Option<BoardIntent> {
        let drag = self.drag.as_mut()?;
        let view = BoardView::build(self.controller.tasks());
        let column = view.column(drag.column);
        let row = if step_down {
            drag.row.saturating_add(1)
        } else {
            drag.row.checked_sub(1)?
        };
        let task = column.card(row)?;
        drag.row = row;
        self.focus_row = row;
        drag.session.hover(&TaskCard::new(task, row))
    }

    fn move_drag_column(&mut self, delta: isize) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if let Some(status) = shift_column(drag.column, delta) {
            drag.column = status;
            drag.row = 0;
            self.focus_column = status;
            self.focus_row = 0;
        }
    }

    async fn release(&mut self) {
        let Some(mut drag) = self.drag.take() else {
            return;
        };
        let dragged = drag.session.item().id.clone();
        let intent = {
            let view = BoardView::build(self.controller.tasks());
            let zone = ColumnDropZone::new(drag.column);
            let hovered = view
                .column(drag.column)
                .card(drag.row)
                .map(|task| TaskCard::new(task, drag.row));
            let mut targets: Vec<&dyn DropTarget> = Vec::with_capacity(2);
            if let Some(card) = hovered.as_ref() {
                targets.push(card);
            }
            targets.push(&zone);
            drag.session.drop_on(&targets)
        };
        if let Some(intent) = intent {
            self.dispatch(intent).await;
        }
        self.focus_task(&dragged);
    }

    fn move_column(&mut self, delta: isize) {
        if let Some(status) = shift_column(self.focus_column, delta) {
            self.focus_column = status;
        }
    }

    fn focus_task(&mut self, id: &TaskId) {
        let located = BoardView::build(self.controller.tasks()).locate(id);
        if let Some((status, row)) = located {
            self.focus_column = status;
            self.focus_row = row;
        }
    }

    fn clamp_focus(&mut self) {
        let len = BoardView::build(self.controller.tasks())
            .column(self.focus_column)
            .len();
        self.focus_row = self.focus_row.min(len.saturating_sub(1));
    }
}

/// Controller failures are already logged and shown as a notice.
fn settle<T>(outcome: Result<T, BoardError>) {
    if let Err(err) = outcome {
        tracing::debug!(error = %err, "board action did not complete");
    }
}

fn shift_column(status: TaskStatus, delta: isize) -> Option<TaskStatus> {
    status
        .column_index()
        .checked_add_signed(delta)
        .and_then(TaskStatus::from_column_index)
}
