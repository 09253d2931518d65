use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::task_list::Intent;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Result of feeding a key to a single-line text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum TextEdit {
    /// New field value; the caller turns it into a change intent
    Changed(String),
    /// Only the caret moved
    Moved,
    Ignored,
}

/// Apply an editing key to `value` with the caret at byte offset `caret`.
///
/// The value itself is never mutated here: changes come back as
/// `TextEdit::Changed` so they flow through the owning intent.
pub(super) fn edit_text(value: &str, caret: &mut usize, key: KeyEvent) -> TextEdit {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    *caret = (*caret).min(value.len());
    match key.code {
        KeyCode::Char('w') if ctrl => {
            let start = unicode::word_boundary_left(value, *caret);
            if start == *caret {
                return TextEdit::Ignored;
            }
            let mut next = value.to_string();
            next.replace_range(start..*caret, "");
            *caret = start;
            TextEdit::Changed(next)
        }
        KeyCode::Char('u') if ctrl => {
            if *caret == 0 {
                return TextEdit::Ignored;
            }
            let next = value[*caret..].to_string();
            *caret = 0;
            TextEdit::Changed(next)
        }
        KeyCode::Char('a') if ctrl => {
            *caret = 0;
            TextEdit::Moved
        }
        KeyCode::Char('e') if ctrl => {
            *caret = value.len();
            TextEdit::Moved
        }
        KeyCode::Char(_) if ctrl => TextEdit::Ignored,
        KeyCode::Char(c) => {
            let mut next = value.to_string();
            next.insert(*caret, c);
            *caret += c.len_utf8();
            TextEdit::Changed(next)
        }
        KeyCode::Backspace => match unicode::prev_grapheme_boundary(value, *caret) {
            Some(start) => {
                let mut next = value.to_string();
                next.replace_range(start..*caret, "");
                *caret = start;
                TextEdit::Changed(next)
            }
            None => TextEdit::Ignored,
        },
        KeyCode::Delete => match unicode::next_grapheme_boundary(value, *caret) {
            Some(end) => {
                let mut next = value.to_string();
                next.replace_range(*caret..end, "");
                TextEdit::Changed(next)
            }
            None => TextEdit::Ignored,
        },
        KeyCode::Left => match unicode::prev_grapheme_boundary(value, *caret) {
            Some(pos) => {
                *caret = pos;
                TextEdit::Moved
            }
            None => TextEdit::Ignored,
        },
        KeyCode::Right => match unicode::next_grapheme_boundary(value, *caret) {
            Some(pos) => {
                *caret = pos;
                TextEdit::Moved
            }
            None => TextEdit::Ignored,
        },
        KeyCode::Home => {
            *caret = 0;
            TextEdit::Moved
        }
        KeyCode::End => {
            *caret = value.len();
            TextEdit::Moved
        }
        _ => TextEdit::Ignored,
    }
}

/// Keys while the "Add Task:" field has focus
pub(super) fn handle_add_field(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit_add(app),
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::Down => {
            if !app.list.tasks().is_empty() {
                app.focus = Focus::List;
                app.reset_draft_cursor();
            }
        }
        _ => {
            let mut caret = app.add_cursor;
            if let TextEdit::Changed(next) = edit_text(app.list.add_input(), &mut caret, key) {
                app.apply(Intent::ChangeAddInput(next));
            }
            app.add_cursor = caret;
        }
    }
}

/// Submit the add field. The field clears even when nothing was added.
pub(super) fn submit_add(app: &mut App) {
    let text = app.list.add_input().to_string();
    let before = app.list.tasks().len();
    app.apply(Intent::AddTask(text));
    app.add_cursor = 0;
    if app.list.tasks().len() > before
        && let Some(task) = app.list.tasks().last()
    {
        app.status_message = Some(format!("Added {}", task.id));
    }
}

/// Keys while the row under the cursor is in edit mode
pub(super) fn handle_row_edit(app: &mut App, key: KeyEvent) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    match key.code {
        KeyCode::Enter => {
            if app.apply(Intent::SaveEdit(id)) {
                app.status_message = Some(format!("Saved {}", id));
            }
        }
        KeyCode::Esc => {
            if app.apply(Intent::DiscardEdit(id)) {
                app.status_message = Some("Edit discarded".to_string());
            }
        }
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        _ => {
            let Some(draft) = app.list.draft(id) else {
                return;
            };
            let mut caret = app.draft_cursor;
            if let TextEdit::Changed(next) = edit_text(draft, &mut caret, key) {
                app.apply(Intent::ChangeDraft(id, next));
            }
            app.draft_cursor = caret;
        }
    }
}

/// Insert pasted text into whichever field has the caret. Newlines become spaces.
pub fn paste_text(app: &mut App, text: &str) {
    let clean = text.replace(['\r', '\n'], " ");
    if clean.is_empty() {
        return;
    }
    match app.focus {
        Focus::AddField => {
            let caret = app.add_cursor.min(app.list.add_input().len());
            let mut next = app.list.add_input().to_string();
            next.insert_str(caret, &clean);
            app.apply(Intent::ChangeAddInput(next));
            app.add_cursor = caret + clean.len();
        }
        Focus::List => {
            let Some(id) = app.cursor_task_id() else {
                return;
            };
            let Some(draft) = app.list.draft(id) else {
                return;
            };
            let caret = app.draft_cursor.min(draft.len());
            let mut next = draft.to_string();
            next.insert_str(caret, &clean);
            app.apply(Intent::ChangeDraft(id, next));
            app.draft_cursor = caret + clean.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_insert_at_caret() {
        let mut caret = 3;
        assert_eq!(
            edit_text("New Task", &mut caret, key(KeyCode::Char('!'))),
            TextEdit::Changed("New! Task".into())
        );
        assert_eq!(caret, 4);
    }

    #[test]
    fn test_backspace_removes_grapheme() {
        let mut caret = "cafe\u{0301}".len();
        assert_eq!(
            edit_text("cafe\u{0301}", &mut caret, key(KeyCode::Backspace)),
            TextEdit::Changed("caf".into())
        );
        assert_eq!(caret, 3);

        let mut caret = 0;
        assert_eq!(
            edit_text("abc", &mut caret, key(KeyCode::Backspace)),
            TextEdit::Ignored
        );
    }

    #[test]
    fn test_delete_forward() {
        let mut caret = 0;
        assert_eq!(
            edit_text("abc", &mut caret, key(KeyCode::Delete)),
            TextEdit::Changed("bc".into())
        );
        assert_eq!(caret, 0);
    }

    #[test]
    fn test_caret_movement() {
        let mut caret = 0;
        assert_eq!(edit_text("a🎉b", &mut caret, key(KeyCode::Left)), TextEdit::Ignored);
        let mut caret = 5;
        assert_eq!(edit_text("a🎉b", &mut caret, key(KeyCode::Left)), TextEdit::Moved);
        assert_eq!(caret, 1);
        edit_text("a🎉b", &mut caret, key(KeyCode::End));
        assert_eq!(caret, 6);
        edit_text("a🎉b", &mut caret, key(KeyCode::Home));
        assert_eq!(caret, 0);
    }

    #[test]
    fn test_ctrl_w_and_ctrl_u() {
        let mut caret = 13;
        assert_eq!(
            edit_text("buy some milk", &mut caret, ctrl('w')),
            TextEdit::Changed("buy some ".into())
        );
        assert_eq!(caret, 9);
        assert_eq!(
            edit_text("buy some ", &mut caret, ctrl('u')),
            TextEdit::Changed("".into())
        );
        assert_eq!(caret, 0);
    }

    #[test]
    fn test_other_ctrl_chars_ignored() {
        let mut caret = 0;
        assert_eq!(edit_text("x", &mut caret, ctrl('z')), TextEdit::Ignored);
    }
}
