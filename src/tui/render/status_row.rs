use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::helpers::spans_width;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Key hints for the current focus
pub fn key_hints(app: &App) -> &'static str {
    match app.focus {
        Focus::AddField => "Enter add  Tab list  Esc quit",
        Focus::List if app.cursor_editing() => "Enter save  Esc discard",
        Focus::List => "Space toggle  e edit  d delete  a add  ? help",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    if app.show_key_hints {
        let hint = key_hints(app);
        let content_width = spans_width(&spans);
        let hint_width = unicode::display_width(hint);
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
