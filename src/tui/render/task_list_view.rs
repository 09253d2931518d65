use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::helpers::{field_spans, pad_to};
use crate::model::task::Task;
use crate::ops::row_editor::RowState;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

pub const EDIT_LABEL: &str = "Edit Task:";
const EDIT_CONTROL: &str = "  [Edit] ";
const DELETE_CONTROL: &str = "[Delete]";
const EDIT_CONTROLS: &str = "  [Save] [Discard]";
const MARKER_WIDTH: usize = 2;

/// Render one line per task in store order
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.list.tasks().is_empty() {
        let empty = Paragraph::new(" No tasks yet")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    app.scroll_to_cursor(height);

    let lines: Vec<Line> = app
        .list
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
        .map(|(i, task)| render_row(app, task, i, area.width as usize))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_row(app: &App, task: &Task, index: usize, width: usize) -> Line<'static> {
    let is_cursor = app.focus == Focus::List && index == app.cursor;
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };

    let mut spans: Vec<Span<'static>> = Vec::new();
    let marker = if is_cursor { "\u{25B8} " } else { "  " };
    spans.push(Span::styled(
        marker,
        Style::default().fg(app.theme.highlight).bg(bg),
    ));

    let control_style = if is_cursor {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    match app.list.row_state(task.id) {
        RowState::Viewing => {
            let (checkbox, check_color) = if task.is_completed {
                ("[x] ", app.theme.green)
            } else {
                ("[ ] ", app.theme.text)
            };
            spans.push(Span::styled(checkbox, Style::default().fg(check_color).bg(bg)));

            let mut title_style = Style::default()
                .fg(app.theme.title_color(task.is_completed))
                .bg(bg);
            if task.is_completed {
                title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
            }
            let budget = width
                .saturating_sub(MARKER_WIDTH + unicode::display_width(checkbox))
                .saturating_sub(unicode::display_width(EDIT_CONTROL))
                .saturating_sub(unicode::display_width(DELETE_CONTROL));
            spans.push(Span::styled(
                unicode::truncate_to_width(&task.title, budget),
                title_style,
            ));
            spans.push(Span::styled(EDIT_CONTROL, control_style));
            let delete_style = if is_cursor {
                Style::default().fg(app.theme.red).bg(bg)
            } else {
                control_style
            };
            spans.push(Span::styled(DELETE_CONTROL, delete_style));
        }
        RowState::Editing { draft } => {
            let label = format!("{} ", EDIT_LABEL);
            spans.push(Span::styled(
                label.clone(),
                Style::default().fg(app.theme.text).bg(bg),
            ));
            let field_width = width
                .saturating_sub(MARKER_WIDTH + unicode::display_width(&label))
                .saturating_sub(unicode::display_width(EDIT_CONTROLS));
            let field_style = Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.input_bg);
            let caret = is_cursor.then_some(app.draft_cursor);
            spans.extend(field_spans(draft, caret, field_width, field_style));
            spans.push(Span::styled(EDIT_CONTROLS, control_style));
        }
    }

    if is_cursor {
        pad_to(&mut spans, width, Style::default().bg(bg));
    }
    Line::from(spans)
}
