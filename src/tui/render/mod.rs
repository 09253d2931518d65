pub mod add_bar;
pub mod help_overlay;
mod helpers;
pub mod status_row;
pub mod task_list_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: add bar (2 rows) | task rows | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // add field + separator
            Constraint::Min(1),    // task rows
            Constraint::Length(1), // status row
        ])
        .split(area);

    add_bar::render_add_bar(frame, app, chunks[0]);
    task_list_view::render_task_list(frame, app, chunks[1]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_list::Intent;
    use crate::tui::app::Focus;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn full_frame_with_tasks() {
        let mut app = app_with_tasks(&["New Task", "Done one"]);
        let done = app.list.tasks()[1].id;
        app.apply(Intent::ToggleComplete(done));
        app.focus = Focus::List;
        let output = render_to_string(40, 6, |frame, _| render(frame, &mut app));
        assert_snapshot!(output, @r"
     Add Task:                         [Add]
    ────────────────────────────────────────
    ▸ [ ] New Task  [Edit] [Delete]
      [x] Done one  [Edit] [Delete]
    ");
    }

    #[test]
    fn full_frame_empty() {
        let mut app = empty_app();
        let output = render_to_string(40, 4, |frame, _| render(frame, &mut app));
        assert_snapshot!(output, @r"
     Add Task:                         [Add]
    ────────────────────────────────────────
     No tasks yet
    ");
    }
}
