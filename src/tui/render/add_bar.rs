use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::helpers::{field_spans, pad_to};
use crate::tui::app::{App, Focus};
use crate::util::unicode;

pub const ADD_LABEL: &str = "Add Task:";
pub const ADD_BUTTON: &str = "[Add]";

/// Render the persistent "Add Task:" field and the separator under it
pub fn render_add_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let focused = app.focus == Focus::AddField;

    let label_style = if focused {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let button_style = if focused {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let field_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.input_bg);

    let label = format!(" {} ", ADD_LABEL);
    let button = format!("  {}", ADD_BUTTON);
    let field_width = width
        .saturating_sub(unicode::display_width(&label))
        .saturating_sub(unicode::display_width(&button));

    let mut spans = vec![Span::styled(label, label_style)];
    let caret = focused.then_some(app.add_cursor);
    spans.extend(field_spans(
        app.list.add_input(),
        caret,
        field_width,
        field_style,
    ));
    spans.push(Span::styled(button, button_style));
    pad_to(&mut spans, width, Style::default().bg(bg));

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans), separator])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
