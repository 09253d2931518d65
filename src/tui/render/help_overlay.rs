use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const ADD_FIELD_KEYS: &[(&str, &str)] = &[
    (" Enter", "Add the typed task"),
    (" Tab/\u{2193}", "Go to the list"),
    (" Esc", "Quit"),
];

const LIST_KEYS: &[(&str, &str)] = &[
    (" \u{2191}\u{2193}/jk", "Move cursor up/down"),
    (" g/G", "Jump to top/bottom"),
    (" Space/x", "Toggle complete"),
    (" e/Enter", "Edit title"),
    (" d/Del", "Delete task"),
    (" a/Tab/Esc", "Back to the add field"),
    (" q", "Quit"),
];

const EDIT_KEYS: &[(&str, &str)] = &[
    (" Enter", "Save"),
    (" Esc", "Discard"),
    (" Ctrl-W/U", "Delete word/line"),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    for (header, keys) in [
        (" Add field", ADD_FIELD_KEYS),
        (" Task list", LIST_KEYS),
        (" Editing a row", EDIT_KEYS),
    ] {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(header, header_style)));
        for (key, desc) in keys {
            add_binding(&mut lines, key, desc, key_style, desc_style);
        }
    }

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let padded_key = format!("{:<14}", key);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn help_lists_every_section() {
        let app = empty_app();
        let output = render_to_string(80, 30, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        assert!(output.contains("Help"));
        assert!(output.contains("Add field"));
        assert!(output.contains("Toggle complete"));
        assert!(output.contains("Discard"));
    }
}
