mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use edit::{handle_add_field, handle_row_edit};
use navigate::handle_navigate;

/// Handle a key event for the current focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    app.status_message = None;

    // Help overlay swallows the key that closes it
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.focus {
        Focus::AddField => handle_add_field(app, key),
        Focus::List if app.cursor_editing() => handle_row_edit(app, key),
        Focus::List => handle_navigate(app, key),
    }
}

/// Handle a bracketed paste into the focused text field
pub fn handle_paste(app: &mut App, text: &str) {
    if app.show_help {
        return;
    }
    match app.focus {
        Focus::AddField => edit::paste_text(app, text),
        Focus::List if app.cursor_editing() => edit::paste_text(app, text),
        Focus::List => {}
    }
}
