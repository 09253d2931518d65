use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_list::Intent;
use crate::tui::app::{App, Focus};

/// Keys in the task list when the cursor row is viewing
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('a') | KeyCode::Tab | KeyCode::Esc => app.focus = Focus::AddField,
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Home | KeyCode::Char('g') => app.move_cursor(i32::MIN),
        KeyCode::End | KeyCode::Char('G') => app.move_cursor(i32::MAX),
        KeyCode::Char(' ') | KeyCode::Char('x') => toggle_cursor_task(app),
        KeyCode::Char('e') | KeyCode::Enter => enter_edit(app),
        KeyCode::Char('d') | KeyCode::Delete => delete_cursor_task(app),
        _ => {}
    }
}

fn toggle_cursor_task(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    if app.apply(Intent::ToggleComplete(id)) {
        let done = app.list.store().get(id).is_some_and(|t| t.is_completed);
        app.status_message = Some(if done {
            format!("Completed {}", id)
        } else {
            format!("Reopened {}", id)
        });
    }
}

fn enter_edit(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    if app.apply(Intent::EnterEdit(id)) {
        app.reset_draft_cursor();
    }
}

fn delete_cursor_task(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    if app.apply(Intent::DeleteTask(id)) {
        app.reset_draft_cursor();
        app.status_message = Some(format!("Deleted {}", id));
    }
}
