use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::Config;
use crate::model::task::{Task, TaskId};
use crate::ops::task_list::{Intent, TaskList};

use super::input;
use super::render;
use super::theme::Theme;

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The persistent "Add Task:" field
    AddField,
    /// The task rows (cursor selects one)
    List,
}

/// Main application state
pub struct App {
    pub list: TaskList,
    pub focus: Focus,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the task rows
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Byte offset of the caret in the add field
    pub add_cursor: usize,
    /// Byte offset of the caret in the draft of the row under the cursor
    pub draft_cursor: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// One-shot message for the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            list: TaskList::new(),
            focus: Focus::AddField,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            add_cursor: 0,
            draft_cursor: 0,
            show_help: false,
            status_message: None,
        }
    }

    /// Task under the list cursor
    pub fn cursor_task(&self) -> Option<&Task> {
        self.list.tasks().get(self.cursor)
    }

    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.cursor_task().map(|t| t.id)
    }

    /// Whether the row under the cursor is being edited
    pub fn cursor_editing(&self) -> bool {
        self.cursor_task_id()
            .is_some_and(|id| self.list.is_editing(id))
    }

    /// Apply an intent and keep cursor state consistent with the result
    pub fn apply(&mut self, intent: Intent) -> bool {
        let changed = self.list.apply(intent);
        self.clamp_cursor();
        if self.list.tasks().is_empty() {
            self.focus = Focus::AddField;
        }
        self.add_cursor = self.add_cursor.min(self.list.add_input().len());
        changed
    }

    /// Move the list cursor, placing the draft caret at the end of the new row's draft
    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.list.tasks().len();
        if len == 0 {
            return;
        }
        let next = (self.cursor as i64 + delta as i64).clamp(0, len as i64 - 1) as usize;
        self.cursor = next;
        self.reset_draft_cursor();
    }

    pub fn reset_draft_cursor(&mut self) {
        self.draft_cursor = self
            .cursor_task_id()
            .and_then(|id| self.list.draft(id))
            .map_or(0, str::len);
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.list.tasks().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// Keep the cursor row inside a viewport of `height` rows
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal if anything panics while it is in raw mode
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);
    info!(tasks = app.list.tasks().len(), "tui exiting");

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
