use std::collections::HashMap;

use tracing::trace;

use crate::model::task::{Task, TaskId};
use crate::ops::row_editor::{RowEditor, RowState};
use crate::ops::task_store::TaskStore;

/// A user intent, as produced by the UI or by a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Submit of the add field with the given text
    AddTask(String),
    /// The add field's text changed
    ChangeAddInput(String),
    ToggleComplete(TaskId),
    EnterEdit(TaskId),
    ChangeDraft(TaskId, String),
    SaveEdit(TaskId),
    DiscardEdit(TaskId),
    DeleteTask(TaskId),
}

/// The task store together with the add field and the per-row editors.
///
/// Row editors are created on first edit and dropped with their task.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    store: TaskStore,
    editors: HashMap<TaskId, RowEditor>,
    add_input: String,
}

static VIEWING: RowState = RowState::Viewing;

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Current value of the add field
    pub fn add_input(&self) -> &str {
        &self.add_input
    }

    /// Edit state of a row; rows never edited are viewing
    pub fn row_state(&self, id: TaskId) -> &RowState {
        self.editors.get(&id).map_or(&VIEWING, |e| e.state())
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editors.get(&id).is_some_and(|e| e.is_editing())
    }

    pub fn draft(&self, id: TaskId) -> Option<&str> {
        self.editors.get(&id).and_then(|e| e.draft())
    }

    /// Number of live row editors (edited at least once, not deleted)
    pub fn editor_count(&self) -> usize {
        self.editors.len()
    }

    /// Apply one intent. Returns true if anything observable changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        trace!(?intent, "apply");
        match intent {
            Intent::AddTask(text) => {
                let had_input = !self.add_input.is_empty();
                self.add_input.clear();
                self.store.add_task(&text).is_some() || had_input
            }
            Intent::ChangeAddInput(text) => {
                if self.add_input == text {
                    return false;
                }
                self.add_input = text;
                true
            }
            Intent::ToggleComplete(id) => self.store.toggle_complete(id),
            Intent::EnterEdit(id) => {
                let Some(task) = self.store.get(id) else {
                    return false;
                };
                self.editors
                    .entry(id)
                    .or_insert_with(|| RowEditor::new(id))
                    .enter_edit(&task.title)
            }
            Intent::ChangeDraft(id, text) => self
                .editors
                .get_mut(&id)
                .is_some_and(|e| e.change_draft(text)),
            Intent::SaveEdit(id) => match self.editors.get_mut(&id) {
                Some(editor) => editor.save(&mut self.store),
                None => false,
            },
            Intent::DiscardEdit(id) => self.editors.get_mut(&id).is_some_and(|e| e.discard()),
            Intent::DeleteTask(id) => {
                self.editors.remove(&id);
                self.store.delete_task(id)
            }
        }
    }
}
