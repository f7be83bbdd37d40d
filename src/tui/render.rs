//! Board drawing.

use mockable::Clock;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::app::{App, Mode};
use crate::board::{BoardColumn, BoardView, EditorField, TaskEditorForm};
use crate::task::{
    domain::{Task, TaskPriority},
    ports::TaskRepository,
};

const BOARD_HELP: &str =
    "n new  e edit  d delete  s next column  1-3 set column  space drag  r reload  q quit";
const DRAG_HELP: &str = "j/k reorder  h/l change column  space drop  esc cancel";

/// Draws the whole screen.
pub fn draw<R, C>(frame: &mut Frame<'_>, app: &App<R, C>)
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let [board_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    let columns = Layout::horizontal([
        Constraint::Percentage(33),
        Constraint::Percentage(33),
        Constraint::Percentage(34),
    ])
    .split(board_area);

    let view = BoardView::build(app.controller().tasks());
    for (column, area) in view.columns().iter().zip(columns.iter()) {
        draw_column(frame, *area, column, app);
    }
    draw_footer(frame, footer_area, app);

    match app.mode() {
        Mode::Board => {}
        Mode::Editor(form) => draw_editor(frame, form, app.form_error().map(ToString::to_string)),
        Mode::ConfirmDelete(id) => {
            let title = app
                .controller()
                .find(id)
                .map_or_else(|| id.to_string(), |task| task.title().to_owned());
            draw_confirm(frame, &title);
        }
    }
}

fn draw_column<R, C>(frame: &mut Frame<'_>, area: Rect, column: &BoardColumn<'_>, app: &App<R, C>)
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let (focus_column, focus_row) = app.focus();
    let focused = focus_column == column.status();
    let dragged = app.drag().map(|drag| &drag.session().item().id);

    let items: Vec<ListItem<'_>> = column
        .cards()
        .iter()
        .map(|task| card_item(task, dragged == Some(task.id())))
        .collect();
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ({}) ", column.status(), column.len()))
                .borders(Borders::ALL)
                .border_style(border),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if focused && !column.is_empty() {
        state.select(Some(focus_row));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn card_item(task: &Task, dragged: bool) -> ListItem<'static> {
    let marker = if dragged { "» " } else { "" };
    let mut lines = vec![Line::from(vec![
        Span::raw(marker),
        Span::styled(
            format!("[{}] ", task.priority()),
            Style::default().fg(priority_color(task.priority())),
        ),
        Span::styled(
            task.title().to_owned(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.push(Line::from(Span::styled(
        format!("due {}", task.date()),
        Style::default().fg(Color::DarkGray),
    )));
    if !task.description().is_empty() {
        lines.push(Line::from(task.description().to_owned()));
    }
    ListItem::new(lines)
}

const fn priority_color(priority: TaskPriority) -> Color {
    match priority {
        TaskPriority::High => Color::Red,
        TaskPriority::Medium => Color::Yellow,
        TaskPriority::Low => Color::Green,
    }
}

fn draw_footer<R, C>(frame: &mut Frame<'_>, area: Rect, app: &App<R, C>)
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let line = match app.controller().notice() {
        Some(notice) => Line::from(Span::styled(
            notice.message().to_owned(),
            Style::default().fg(Color::Red),
        )),
        None if app.drag().is_some() => Line::from(DRAG_HELP),
        None => Line::from(BOARD_HELP),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_editor(frame: &mut Frame<'_>, form: &TaskEditorForm, error: Option<String>) {
    let area = centered(frame.area(), 60, 50);
    let title = if form.editing().is_some() {
        " Edit task "
    } else {
        " New task "
    };

    let mut lines: Vec<Line<'_>> = EditorField::ALL
        .iter()
        .map(|field| field_line(form, *field))
        .collect();
    lines.push(Line::default());
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(Span::styled(
        "tab next field  ←/→ change choice  enter save  esc cancel",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(title).borders(Borders::ALL)),
        area,
    );
}

fn field_line(form: &TaskEditorForm, field: EditorField) -> Line<'static> {
    let value = match field {
        EditorField::Title => form.title().to_owned(),
        EditorField::Description => form.description().to_owned(),
        EditorField::Date => form.date().to_owned(),
        EditorField::Status => format!("< {} >", form.status()),
        EditorField::Priority => format!("< {} >", form.priority()),
    };
    let focused = form.focus() == field;
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let cursor = if focused && field.is_text() { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:<12}", field.label()), label_style),
        Span::raw(value),
        Span::raw(cursor),
    ])
}

fn draw_confirm(frame: &mut Frame<'_>, title: &str) {
    let area = centered(frame.area(), 50, 20);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(format!("Delete '{title}'?")),
            Line::from(Span::styled(
                "y delete  n keep",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Confirm ").borders(Borders::ALL)),
        area,
    );
}

fn centered(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Percentage(height_percent),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Percentage(width_percent),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}
